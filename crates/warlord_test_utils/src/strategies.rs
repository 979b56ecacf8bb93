//! Proptest strategies for property-based testing.
//!
//! Generated worlds are referentially sound: every general's kingdom,
//! location and captor resolve, and every province has an existing owner.

use proptest::prelude::*;
use warlord_core::world::{Controller, General, Kingdom, Province, WorldSnapshot};

/// Word pool for kingdom and province names, so lost-province matches occur.
const NAME_WORDS: [&str; 6] = ["Wei", "Shu", "Wu", "Jin", "Han", "Yan"];

/// Raw knobs for one general before ids are resolved.
#[derive(Debug, Clone)]
struct GeneralSeed {
    kingdom: usize,
    hp: u32,
    max_hp: u32,
    strength: u32,
    love: i32,
    location: Option<usize>,
    captor: Option<usize>,
}

fn arb_general_seed() -> impl Strategy<Value = GeneralSeed> {
    (
        any::<usize>(),
        1u32..=200,
        0u32..=60,
        -100i32..=100,
        proptest::option::of(any::<usize>()),
        proptest::option::weighted(0.15, any::<usize>()),
        0u32..=100,
    )
        .prop_map(|(kingdom, max_hp, strength, love, location, captor, hp_pct)| GeneralSeed {
            kingdom,
            hp: max_hp * hp_pct / 100,
            max_hp,
            strength,
            love,
            location,
            captor,
        })
}

/// Generate a controller, mostly AI.
pub fn arb_controller() -> impl Strategy<Value = Controller> {
    prop_oneof![4 => Just(Controller::Ai), 1 => Just(Controller::Player)]
}

/// Generate a sound world with 1..=`max_kingdoms` kingdoms and up to
/// `max_generals` generals and `max_provinces` provinces.
pub fn arb_world(
    max_kingdoms: usize,
    max_generals: usize,
    max_provinces: usize,
) -> impl Strategy<Value = WorldSnapshot> {
    let kingdoms = proptest::collection::vec(
        (arb_controller(), 0..NAME_WORDS.len()),
        1..=max_kingdoms.max(1),
    );
    let provinces = proptest::collection::vec(
        (any::<usize>(), 0..NAME_WORDS.len(), 1u32..=150, 0u32..=100, any::<bool>()),
        0..=max_provinces,
    );
    let generals = proptest::collection::vec(arb_general_seed(), 0..=max_generals);

    (kingdoms, provinces, generals).prop_map(|(kingdoms, provinces, generals)| {
        let kingdoms: Vec<Kingdom> = kingdoms
            .into_iter()
            .enumerate()
            .map(|(i, (controller, word))| {
                Kingdom::new(format!("k{i}"), format!("{} Kingdom {i}", NAME_WORDS[word]))
                    .with_controller(controller)
            })
            .collect();

        let provinces: Vec<Province> = provinces
            .into_iter()
            .enumerate()
            .map(|(i, (owner, word, max_hp, hp_pct, capital))| {
                let owner = &kingdoms[owner % kingdoms.len()].id;
                let mut province =
                    Province::new(format!("p{i}"), format!("{} Pass {i}", NAME_WORDS[word]), owner.clone())
                        .with_hp(max_hp * hp_pct / 100, max_hp);
                province.is_capital = capital;
                province
            })
            .collect();

        let generals: Vec<General> = generals
            .into_iter()
            .enumerate()
            .map(|(i, seed)| {
                let kingdom = &kingdoms[seed.kingdom % kingdoms.len()].id;
                let mut general = General::new(format!("g{i}"), format!("General {i}"), kingdom.clone())
                    .with_hp(seed.hp, seed.max_hp)
                    .with_strength(seed.strength)
                    .with_love(seed.love);
                if !provinces.is_empty() {
                    general.location = seed
                        .location
                        .map(|l| provinces[l % provinces.len()].id.clone());
                }
                general.captured_by = seed
                    .captor
                    .map(|c| kingdoms[c % kingdoms.len()].id.clone())
                    .filter(|captor| captor != kingdom);
                general
            })
            .collect();

        WorldSnapshot {
            kingdoms,
            generals,
            provinces,
        }
    })
}

/// Generate a world together with the id of one of its kingdoms.
pub fn arb_world_and_kingdom() -> impl Strategy<Value = (WorldSnapshot, warlord_core::ids::KingdomId)> {
    (arb_world(4, 16, 12), any::<usize>()).prop_map(|(world, pick)| {
        let kingdom = world.kingdoms[pick % world.kingdoms.len()].id.clone();
        (world, kingdom)
    })
}
