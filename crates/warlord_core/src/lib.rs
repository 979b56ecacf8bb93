//! # Warlord Core
//!
//! Deterministic AI turn-decision engine for Warlord.
//!
//! Given a read-only snapshot of the world, the engine produces a
//! conflict-free list of orders (attack, defend, rest, train) for every
//! available general of one AI-controlled kingdom.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO inside the decision pass (loading helpers live at the edges)
//! - No randomness
//! - No floating-point math (scores use fixed-point)
//!
//! This separation enables:
//! - Reproducible turns and turn records
//! - Computing many kingdoms' turns in parallel
//! - Determinism testing
//!
//! ## Crate Structure
//!
//! - [`world`] - World snapshot model and the read-only [`world::WorldView`] trait
//! - [`roster`] - Availability predicate, rosters and the per-turn unit pool
//! - [`scanner`] - Ranked target queries for each objective
//! - [`scheduler`] - The priority-ordered action scheduler
//! - [`disposition`] - Captured-general disposition classifier
//! - [`planner`] - Whole-world turn plans across AI kingdoms
//! - [`record`] - Turn records for replay verification
//! - [`math`] - Fixed-point scoring utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod assignment;
pub mod config;
pub mod disposition;
pub mod error;
pub mod ids;
pub mod math;
pub mod planner;
pub mod record;
pub mod roster;
pub mod scanner;
pub mod scheduler;
pub mod world;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::assignment::{ActionType, Assignment, Objective};
    pub use crate::config::DecisionConfig;
    pub use crate::disposition::{classify_disposition, Disposition};
    pub use crate::error::{Result, WarlordError};
    pub use crate::ids::{GeneralId, KingdomId, ProvinceId};
    pub use crate::math::Fixed;
    pub use crate::planner::{plan_turns, TurnPlan};
    pub use crate::record::TurnRecord;
    pub use crate::roster::{is_available, Roster, UnitPool};
    pub use crate::scheduler::{decide_turn, DecisionEngine};
    pub use crate::world::{Controller, General, Kingdom, Province, WorldSnapshot, WorldView};
}
