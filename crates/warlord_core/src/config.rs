//! Tunable constants for the decision engine.
//!
//! Defaults reproduce the shipped AI. A RON file may override any subset:
//!
//! ```ron
//! DecisionConfig(
//!     conquer_limit: 3,
//!     train_strength_below: 20,
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarlordError};

/// Thresholds and limits used by the scanner and scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecisionConfig {
    /// Maximum enemy generals considered for capture.
    pub capture_limit: usize,
    /// Maximum enemy provinces considered for conquest.
    pub conquer_limit: usize,
    /// Maximum lost provinces considered for reconquest.
    pub reconquer_limit: usize,
    /// Maximum own provinces considered for defence.
    pub defend_limit: usize,

    /// Vulnerability baseline: a general scores `capture_base - hp`.
    pub capture_base: i64,
    /// Extra vulnerability when the general's province is nearly fallen.
    pub exposed_province_bonus: i64,
    /// Province hp at or below which the exposure bonus applies.
    pub exposed_province_hp: u32,

    /// Added to a capital's conquest priority (higher = less attractive).
    pub capital_penalty: u32,

    /// Idle generals below this percentage of max hp rest.
    pub rest_hp_percent: u32,
    /// Idle healthy generals below this strength train.
    pub train_strength_below: u32,

    /// Captives with love above this are enslaved rather than isolated.
    pub enslavement_love_above: i32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            capture_limit: 3,
            conquer_limit: 5,
            reconquer_limit: 3,
            defend_limit: 3,
            capture_base: 100,
            exposed_province_bonus: 50,
            exposed_province_hp: 1,
            capital_penalty: 100,
            rest_hp_percent: 50,
            train_strength_below: 15,
            enslavement_love_above: 30,
        }
    }
}

impl DecisionConfig {
    /// Parse a config from a RON string. Missing fields keep their defaults.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| WarlordError::ConfigParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WarlordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&contents).map_err(|e| WarlordError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
