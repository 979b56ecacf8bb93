//! Test fixtures and helpers.
//!
//! Pre-built worlds and a small builder for consistent testing.

use warlord_core::ids::KingdomId;
use warlord_core::world::{Controller, General, Kingdom, Province, WorldSnapshot};

/// Fluent builder for [`WorldSnapshot`]s.
///
/// Entities keep insertion order, which is the scan order the engine uses.
#[derive(Debug, Clone, Default)]
pub struct WorldBuilder {
    world: WorldSnapshot,
}

impl WorldBuilder {
    /// Start an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an AI-controlled kingdom.
    #[must_use]
    pub fn ai_kingdom(mut self, id: &str, name: &str) -> Self {
        self.world.kingdoms.push(Kingdom::new(id, name));
        self
    }

    /// Add a player-controlled kingdom.
    #[must_use]
    pub fn player_kingdom(mut self, id: &str, name: &str) -> Self {
        self.world
            .kingdoms
            .push(Kingdom::new(id, name).with_controller(Controller::Player));
        self
    }

    /// Add a general.
    #[must_use]
    pub fn general(mut self, general: General) -> Self {
        self.world.generals.push(general);
        self
    }

    /// Add a province.
    #[must_use]
    pub fn province(mut self, province: Province) -> Self {
        self.world.provinces.push(province);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> WorldSnapshot {
        self.world
    }
}

/// Shorthand for a general with explicit hp and strength.
#[must_use]
pub fn general(id: &str, kingdom: &str, hp: u32, strength: u32) -> General {
    General::new(id, id, kingdom)
        .with_hp(hp, 100)
        .with_strength(strength)
}

/// The reference two-kingdom skirmish.
///
/// Kingdom `f` (AI) fields `a` (hp 100, str 20) and `b` (hp 40, str 5) and
/// owns `f_keep` at hp 1 plus the undamaged border province `p1`. Kingdom
/// `g` owns nothing and has one capturable general raiding `p1`, so there
/// are no conquest or reconquest targets.
/// Expected orders for `f`: `a` attacks `p1` (capture), `b` defends `f_keep`.
#[must_use]
pub fn skirmish() -> WorldSnapshot {
    WorldBuilder::new()
        .ai_kingdom("f", "Falcon Realm")
        .ai_kingdom("g", "Griffin Realm")
        .general(general("a", "f", 100, 20))
        .general(general("b", "f", 40, 5))
        .general(general("g1", "g", 60, 18).at("p1"))
        .province(Province::new("f_keep", "Keep of Falcons", "f").with_hp(1, 100))
        .province(Province::new("p1", "Border Pass", "f").with_hp(100, 100))
        .build()
}

/// A busy world: `kingdoms` AI kingdoms with `per_kingdom` generals and
/// provinces each, varied deterministically.
#[must_use]
pub fn crowded_world(kingdoms: u32, per_kingdom: u32) -> WorldSnapshot {
    let mut builder = WorldBuilder::new();
    for k in 0..kingdoms {
        let kid = format!("k{k}");
        builder = builder.ai_kingdom(&kid, &format!("K{k} Dominion"));
        for i in 0..per_kingdom {
            let seed = k * 31 + i * 17;
            let province = format!("{kid}_p{i}");
            builder = builder
                .general(
                    General::new(format!("{kid}_g{i}"), format!("General {k}-{i}"), kid.as_str())
                        .with_hp(seed % 101, 100)
                        .with_strength(seed % 40)
                        .with_love(i32::try_from(seed % 61).unwrap_or_default())
                        .at(province.as_str()),
                )
                .province(
                    Province::new(province.as_str(), format!("K{} Outpost {i}", (k + 1) % kingdoms), kid.as_str())
                        .with_hp((seed * 7) % 101, 100),
                );
        }
    }
    builder.build()
}

/// Id helper for tests.
#[must_use]
pub fn kid(id: &str) -> KingdomId {
    KingdomId::new(id)
}
