//! Target scanning.
//!
//! Four independent, read-only queries rank candidate targets for each
//! combat objective. Every query walks the snapshot in order and uses
//! stable sorts, so equal scores keep scan order.

use crate::config::DecisionConfig;
use crate::ids::KingdomId;
use crate::roster::is_available;
use crate::world::{General, Province, WorldView};

/// An enemy general ranked for capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTarget<'w> {
    /// The enemy general.
    pub general: &'w General,
    /// Vulnerability (higher = easier prey).
    pub score: i64,
}

/// An enemy province ranked for conquest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConquestTarget<'w> {
    /// The enemy province.
    pub province: &'w Province,
    /// Conquest priority (lower = more vulnerable).
    pub score: u32,
}

/// Rank enemy generals by vulnerability.
///
/// Score is `capture_base - hp`, plus `exposed_province_bonus` when the
/// general stands in a province at or below `exposed_province_hp`.
/// Own and unavailable generals are skipped.
pub fn vulnerable_generals<'w, W>(
    world: &'w W,
    kingdom: &KingdomId,
    config: &DecisionConfig,
) -> Vec<CaptureTarget<'w>>
where
    W: WorldView + ?Sized,
{
    let mut targets: Vec<_> = world
        .generals()
        .iter()
        .filter(|g| &g.kingdom != kingdom && is_available(g))
        .map(|general| {
            let exposed = general
                .location
                .as_ref()
                .and_then(|id| world.province(id))
                .is_some_and(|p| p.hp <= config.exposed_province_hp);
            let bonus = if exposed {
                config.exposed_province_bonus
            } else {
                0
            };
            CaptureTarget {
                general,
                score: config.capture_base - i64::from(general.hp) + bonus,
            }
        })
        .collect();

    targets.sort_by(|a, b| b.score.cmp(&a.score));
    targets.truncate(config.capture_limit);
    targets
}

/// Rank enemy provinces by vulnerability, most vulnerable first.
///
/// Score is the province's `hp`, plus `capital_penalty` for capitals.
pub fn vulnerable_provinces<'w, W>(
    world: &'w W,
    kingdom: &KingdomId,
    config: &DecisionConfig,
) -> Vec<ConquestTarget<'w>>
where
    W: WorldView + ?Sized,
{
    let mut targets: Vec<_> = world
        .provinces()
        .iter()
        .filter(|p| &p.owner != kingdom)
        .map(|province| {
            let penalty = if province.is_capital {
                config.capital_penalty
            } else {
                0
            };
            ConquestTarget {
                province,
                score: province.hp.saturating_add(penalty),
            }
        })
        .collect();

    targets.sort_by_key(|t| t.score);
    targets.truncate(config.conquer_limit);
    targets
}

/// Find provinces that look like they used to be ours.
///
/// A province counts as lost when another kingdom owns it and its name
/// contains the first word of our kingdom's name, ignoring case. Results
/// keep discovery order. An unknown kingdom or a blank name finds nothing.
pub fn lost_provinces<'w, W>(
    world: &'w W,
    kingdom: &KingdomId,
    config: &DecisionConfig,
) -> Vec<&'w Province>
where
    W: WorldView + ?Sized,
{
    let Some(stem) = world.kingdom(kingdom).and_then(|k| k.name_stem()) else {
        return Vec::new();
    };

    world
        .provinces()
        .iter()
        .filter(|p| &p.owner != kingdom && p.name.to_lowercase().contains(&stem))
        .take(config.reconquer_limit)
        .collect()
}

/// Rank our damaged provinces, lowest hp first.
pub fn threatened_provinces<'w, W>(
    world: &'w W,
    kingdom: &KingdomId,
    config: &DecisionConfig,
) -> Vec<&'w Province>
where
    W: WorldView + ?Sized,
{
    let mut threatened: Vec<_> = world
        .provinces_of(kingdom)
        .into_iter()
        .filter(|p| p.is_damaged())
        .collect();

    threatened.sort_by_key(|p| p.hp);
    threatened.truncate(config.defend_limit);
    threatened
}
