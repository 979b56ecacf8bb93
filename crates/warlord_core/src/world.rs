//! World snapshot model.
//!
//! Kingdoms, generals and provinces are plain data read from an externally
//! owned snapshot. The engine only ever sees the world through the
//! read-only [`WorldView`] trait; nothing here is mutated during a turn.
//!
//! All collections keep snapshot order. That order is the scan order used
//! by every query, which keeps decisions deterministic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarlordError};
use crate::ids::{GeneralId, KingdomId, ProvinceId};
use crate::roster::Roster;

/// Who issues orders for a kingdom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Controller {
    /// Orders come from a human player. Never processed by the engine.
    Player,
    /// Orders come from the decision engine.
    #[default]
    Ai,
}

impl Controller {
    /// Check if this kingdom is driven by the engine.
    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, Self::Ai)
    }
}

/// A kingdom (faction).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kingdom {
    /// Unique id.
    pub id: KingdomId,
    /// Display name. Its first word drives lost-province detection.
    pub name: String,
    /// Who controls this kingdom.
    #[serde(default)]
    pub controller: Controller,
}

impl Kingdom {
    /// Create an AI-controlled kingdom.
    #[must_use]
    pub fn new(id: impl Into<KingdomId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            controller: Controller::Ai,
        }
    }

    /// Set the controller.
    #[must_use]
    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self
    }

    /// First whitespace-separated word of the name, lowercased.
    ///
    /// Returns `None` for a blank name.
    #[must_use]
    pub fn name_stem(&self) -> Option<String> {
        self.name.split_whitespace().next().map(str::to_lowercase)
    }
}

/// A general (unit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct General {
    /// Unique id.
    pub id: GeneralId,
    /// Display name.
    pub name: String,
    /// Kingdom this general serves.
    pub kingdom: KingdomId,
    /// Current hit points (0..=max_hp).
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Combat strength.
    pub strength: u32,
    /// Affinity towards a captor. Drives capture disposition.
    #[serde(default)]
    pub love: i32,
    /// Province the general stands in, if deployed.
    #[serde(default)]
    pub location: Option<ProvinceId>,
    /// Kingdom holding this general captive, if any.
    #[serde(default)]
    pub captured_by: Option<KingdomId>,
}

impl General {
    /// Create a deployed-nowhere general at full health (100/100).
    #[must_use]
    pub fn new(
        id: impl Into<GeneralId>,
        name: impl Into<String>,
        kingdom: impl Into<KingdomId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kingdom: kingdom.into(),
            hp: 100,
            max_hp: 100,
            strength: 10,
            love: 0,
            location: None,
            captured_by: None,
        }
    }

    /// Set current and maximum hit points.
    #[must_use]
    pub fn with_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self
    }

    /// Set strength.
    #[must_use]
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }

    /// Set love.
    #[must_use]
    pub fn with_love(mut self, love: i32) -> Self {
        self.love = love;
        self
    }

    /// Place the general in a province.
    #[must_use]
    pub fn at(mut self, province: impl Into<ProvinceId>) -> Self {
        self.location = Some(province.into());
        self
    }

    /// Mark the general as held by another kingdom.
    #[must_use]
    pub fn captured_by(mut self, captor: impl Into<KingdomId>) -> Self {
        self.captured_by = Some(captor.into());
        self
    }

    /// Check if the general is held captive.
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured_by.is_some()
    }
}

/// A province (territory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Province {
    /// Unique id.
    pub id: ProvinceId,
    /// Display name.
    pub name: String,
    /// Owning kingdom.
    pub owner: KingdomId,
    /// Current defensive hit points (0..=max_hp).
    pub hp: u32,
    /// Maximum defensive hit points.
    pub max_hp: u32,
    /// Whether this is its owner's capital.
    #[serde(default)]
    pub is_capital: bool,
}

impl Province {
    /// Create an undamaged (100/100) non-capital province.
    #[must_use]
    pub fn new(
        id: impl Into<ProvinceId>,
        name: impl Into<String>,
        owner: impl Into<KingdomId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            hp: 100,
            max_hp: 100,
            is_capital: false,
        }
    }

    /// Set current and maximum hit points.
    #[must_use]
    pub fn with_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self
    }

    /// Mark as capital.
    #[must_use]
    pub fn capital(mut self) -> Self {
        self.is_capital = true;
        self
    }

    /// Check if the province has taken damage.
    #[must_use]
    pub const fn is_damaged(&self) -> bool {
        self.hp < self.max_hp
    }
}

/// Read-only access to world state.
///
/// This is the engine's whole input contract. Implementors must return
/// collections in a stable order; the engine never asks for mutation.
pub trait WorldView {
    /// Look up a kingdom by id.
    fn kingdom(&self, id: &KingdomId) -> Option<&Kingdom>;

    /// All kingdoms, in snapshot order.
    fn kingdoms(&self) -> &[Kingdom];

    /// All generals, in snapshot order.
    fn generals(&self) -> &[General];

    /// All provinces, in snapshot order.
    fn provinces(&self) -> &[Province];

    /// Look up a province by id.
    fn province(&self, id: &ProvinceId) -> Option<&Province> {
        self.provinces().iter().find(|p| &p.id == id)
    }

    /// Look up a general by id.
    fn general(&self, id: &GeneralId) -> Option<&General> {
        self.generals().iter().find(|g| &g.id == id)
    }

    /// The generals serving a kingdom.
    fn roster(&self, kingdom: &KingdomId) -> Roster<'_> {
        Roster::of(kingdom, self.generals())
    }

    /// AI-controlled kingdoms, in snapshot order.
    fn ai_kingdoms(&self) -> Vec<&Kingdom> {
        self.kingdoms()
            .iter()
            .filter(|k| k.controller.is_ai())
            .collect()
    }

    /// Provinces owned by a kingdom, in snapshot order.
    fn provinces_of(&self, kingdom: &KingdomId) -> Vec<&Province> {
        self.provinces()
            .iter()
            .filter(|p| &p.owner == kingdom)
            .collect()
    }
}

/// A complete, owned world snapshot.
///
/// # Example RON
///
/// ```ron
/// WorldSnapshot(
///     kingdoms: [(id: "wei", name: "Wei Kingdom", controller: Ai)],
///     generals: [(id: "cao_ren", name: "Cao Ren", kingdom: "wei",
///                 hp: 80, max_hp: 100, strength: 22, location: Some("xuchang"))],
///     provinces: [(id: "xuchang", name: "Xuchang", owner: "wei",
///                  hp: 100, max_hp: 100, is_capital: true)],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// All kingdoms.
    #[serde(default)]
    pub kingdoms: Vec<Kingdom>,
    /// All generals.
    #[serde(default)]
    pub generals: Vec<General>,
    /// All provinces.
    #[serde(default)]
    pub provinces: Vec<Province>,
}

impl WorldSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| WarlordError::SnapshotParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a snapshot from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| WarlordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&contents).map_err(|e| WarlordError::SnapshotParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Encode the snapshot in compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WarlordError::Encoding(format!("Failed to serialize snapshot: {e}")))
    }

    /// Decode a snapshot from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        bincode::deserialize(data)
            .map_err(|e| WarlordError::Encoding(format!("Failed to deserialize snapshot: {e}")))
    }
}

impl WorldView for WorldSnapshot {
    fn kingdom(&self, id: &KingdomId) -> Option<&Kingdom> {
        self.kingdoms.iter().find(|k| &k.id == id)
    }

    fn kingdoms(&self) -> &[Kingdom] {
        &self.kingdoms
    }

    fn generals(&self) -> &[General] {
        &self.generals
    }

    fn provinces(&self) -> &[Province] {
        &self.provinces
    }
}
