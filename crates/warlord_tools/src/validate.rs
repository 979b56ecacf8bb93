//! Snapshot validation.
//!
//! The engine trusts its input: a general pointing at a province that does
//! not exist is silently treated as undeployed. These checks catch such
//! snapshots before they reach a turn.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use warlord_core::error::{Result, WarlordError};
use warlord_core::ids::{GeneralId, KingdomId, ProvinceId};
use warlord_core::world::WorldSnapshot;

use crate::io::load_snapshot;

/// A single integrity problem in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Two kingdoms share an id.
    #[error("duplicate kingdom id '{0}'")]
    DuplicateKingdom(KingdomId),

    /// Two generals share an id.
    #[error("duplicate general id '{0}'")]
    DuplicateGeneral(GeneralId),

    /// Two provinces share an id.
    #[error("duplicate province id '{0}'")]
    DuplicateProvince(ProvinceId),

    /// A general serves a kingdom that does not exist.
    #[error("general '{general}' serves unknown kingdom '{kingdom}'")]
    UnknownGeneralKingdom {
        /// Offending general.
        general: GeneralId,
        /// Missing kingdom.
        kingdom: KingdomId,
    },

    /// A general stands in a province that does not exist.
    #[error("general '{general}' stands in unknown province '{province}'")]
    UnknownLocation {
        /// Offending general.
        general: GeneralId,
        /// Missing province.
        province: ProvinceId,
    },

    /// A general is held by a kingdom that does not exist.
    #[error("general '{general}' is held by unknown kingdom '{captor}'")]
    UnknownCaptor {
        /// Offending general.
        general: GeneralId,
        /// Missing kingdom.
        captor: KingdomId,
    },

    /// A general is held captive by its own kingdom.
    #[error("general '{0}' is held captive by its own kingdom")]
    SelfCaptured(GeneralId),

    /// A province is owned by a kingdom that does not exist.
    #[error("province '{province}' is owned by unknown kingdom '{owner}'")]
    UnknownOwner {
        /// Offending province.
        province: ProvinceId,
        /// Missing kingdom.
        owner: KingdomId,
    },

    /// A general has more hp than its maximum.
    #[error("general '{id}' has hp {hp} above max {max_hp}")]
    GeneralHpOverflow {
        /// Offending general.
        id: GeneralId,
        /// Current hp.
        hp: u32,
        /// Maximum hp.
        max_hp: u32,
    },

    /// A province has more hp than its maximum.
    #[error("province '{id}' has hp {hp} above max {max_hp}")]
    ProvinceHpOverflow {
        /// Offending province.
        id: ProvinceId,
        /// Current hp.
        hp: u32,
        /// Maximum hp.
        max_hp: u32,
    },
}

/// Check a snapshot for referential integrity and hp bounds.
///
/// Returns every issue found, in snapshot order. An empty list means the
/// snapshot is sound.
#[must_use]
pub fn validate_snapshot(world: &WorldSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut kingdoms = HashSet::new();
    for kingdom in &world.kingdoms {
        if !kingdoms.insert(&kingdom.id) {
            issues.push(ValidationIssue::DuplicateKingdom(kingdom.id.clone()));
        }
    }

    let mut provinces = HashSet::new();
    for province in &world.provinces {
        if !provinces.insert(&province.id) {
            issues.push(ValidationIssue::DuplicateProvince(province.id.clone()));
        }
        if !kingdoms.contains(&province.owner) {
            issues.push(ValidationIssue::UnknownOwner {
                province: province.id.clone(),
                owner: province.owner.clone(),
            });
        }
        if province.hp > province.max_hp {
            issues.push(ValidationIssue::ProvinceHpOverflow {
                id: province.id.clone(),
                hp: province.hp,
                max_hp: province.max_hp,
            });
        }
    }

    let mut generals = HashSet::new();
    for general in &world.generals {
        if !generals.insert(&general.id) {
            issues.push(ValidationIssue::DuplicateGeneral(general.id.clone()));
        }
        if !kingdoms.contains(&general.kingdom) {
            issues.push(ValidationIssue::UnknownGeneralKingdom {
                general: general.id.clone(),
                kingdom: general.kingdom.clone(),
            });
        }
        if let Some(location) = &general.location {
            if !provinces.contains(location) {
                issues.push(ValidationIssue::UnknownLocation {
                    general: general.id.clone(),
                    province: location.clone(),
                });
            }
        }
        if let Some(captor) = &general.captured_by {
            if captor == &general.kingdom {
                issues.push(ValidationIssue::SelfCaptured(general.id.clone()));
            } else if !kingdoms.contains(captor) {
                issues.push(ValidationIssue::UnknownCaptor {
                    general: general.id.clone(),
                    captor: captor.clone(),
                });
            }
        }
        if general.hp > general.max_hp {
            issues.push(ValidationIssue::GeneralHpOverflow {
                id: general.id.clone(),
                hp: general.hp,
                max_hp: general.max_hp,
            });
        }
    }

    issues
}

/// Validate the snapshot stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, or
/// [`WarlordError::InvalidSnapshot`] listing every issue found.
pub fn validate_snapshot_file(path: &Path) -> Result<()> {
    let world = load_snapshot(path)?;
    let issues = validate_snapshot(&world);
    if issues.is_empty() {
        tracing::info!(path = %path.display(), "snapshot is valid");
        return Ok(());
    }

    for issue in &issues {
        tracing::warn!(path = %path.display(), "{issue}");
    }
    Err(WarlordError::InvalidSnapshot(
        issues.iter().map(ToString::to_string).collect(),
    ))
}
