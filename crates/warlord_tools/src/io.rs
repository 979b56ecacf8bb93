//! Loading snapshots and configs, rendering results.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use warlord_core::config::DecisionConfig;
use warlord_core::error::{Result, WarlordError};
use warlord_core::world::WorldSnapshot;

/// Output encoding for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Pretty-printed RON.
    Ron,
}

/// Load a world snapshot. `.json` files are read as JSON, anything else as RON.
pub fn load_snapshot(path: &Path) -> Result<WorldSnapshot> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return WorldSnapshot::load(path);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| WarlordError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let world: WorldSnapshot =
        serde_json::from_str(&contents).map_err(|e| WarlordError::SnapshotParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(
        path = %path.display(),
        kingdoms = world.kingdoms.len(),
        generals = world.generals.len(),
        provinces = world.provinces.len(),
        "loaded JSON snapshot"
    );
    Ok(world)
}

/// Load a config file, or fall back to defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<DecisionConfig> {
    match path {
        Some(path) => {
            let config = DecisionConfig::load(path)?;
            tracing::info!(path = %path.display(), "using decision config");
            Ok(config)
        }
        None => Ok(DecisionConfig::default()),
    }
}

/// Render a value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| WarlordError::Encoding(format!("Failed to render JSON: {e}"))),
        OutputFormat::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
            .map_err(|e| WarlordError::Encoding(format!("Failed to render RON: {e}"))),
    }
}
