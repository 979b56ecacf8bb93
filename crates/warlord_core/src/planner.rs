//! Whole-world turn plans.
//!
//! A [`TurnPlan`] holds the orders of every AI kingdom for one turn, in
//! snapshot order. Kingdoms are independent, so callers may compute them in
//! any order (or in parallel) and assemble the plan with
//! [`TurnPlan::from_turns`]; the result must hash identically to
//! [`plan_turns`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::ids::KingdomId;
use crate::scheduler::DecisionEngine;
use crate::world::WorldView;

/// Orders for one kingdom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KingdomTurn {
    /// Kingdom the orders belong to.
    pub kingdom: KingdomId,
    /// Orders in priority order.
    pub orders: Vec<Assignment>,
}

/// Every AI kingdom's orders for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnPlan {
    turns: Vec<KingdomTurn>,
}

impl TurnPlan {
    /// Assemble a plan from per-kingdom results.
    ///
    /// `turns` must already be in snapshot order.
    #[must_use]
    pub fn from_turns(turns: Vec<KingdomTurn>) -> Self {
        Self { turns }
    }

    /// Per-kingdom turns, in snapshot order.
    #[must_use]
    pub fn turns(&self) -> &[KingdomTurn] {
        &self.turns
    }

    /// Orders for one kingdom, if it was planned.
    #[must_use]
    pub fn orders_for(&self, kingdom: &KingdomId) -> Option<&[Assignment]> {
        self.turns
            .iter()
            .find(|t| &t.kingdom == kingdom)
            .map(|t| t.orders.as_slice())
    }

    /// Total number of orders across all kingdoms.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.turns.iter().map(|t| t.orders.len()).sum()
    }

    /// Stable hash of the whole plan, for replay and cross-run comparison.
    #[must_use]
    pub fn plan_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Stable hash of one kingdom's orders.
#[must_use]
pub fn orders_hash(orders: &[Assignment]) -> u64 {
    let mut hasher = DefaultHasher::new();
    orders.hash(&mut hasher);
    hasher.finish()
}

/// Ids of AI-controlled kingdoms, in snapshot order.
pub fn ai_kingdom_ids<W>(world: &W) -> Vec<KingdomId>
where
    W: WorldView + ?Sized,
{
    world
        .ai_kingdoms()
        .into_iter()
        .map(|k| k.id.clone())
        .collect()
}

/// Plan every AI kingdom's turn, one after another.
pub fn plan_turns<W>(world: &W, engine: &DecisionEngine) -> TurnPlan
where
    W: WorldView + ?Sized,
{
    let turns = ai_kingdom_ids(world)
        .into_iter()
        .map(|kingdom| {
            let orders = engine.decide(world, &kingdom);
            KingdomTurn { kingdom, orders }
        })
        .collect();
    let plan = TurnPlan::from_turns(turns);
    tracing::debug!(
        kingdoms = plan.turns().len(),
        orders = plan.order_count(),
        "world turn planned"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Controller, General, Kingdom, Province, WorldSnapshot};

    fn world() -> WorldSnapshot {
        WorldSnapshot {
            kingdoms: vec![
                Kingdom::new("wei", "Wei"),
                Kingdom::new("shu", "Shu").with_controller(Controller::Player),
                Kingdom::new("wu", "Wu"),
            ],
            generals: vec![
                General::new("cao", "Cao", "wei").with_strength(30),
                General::new("liu", "Liu", "shu").with_hp(30, 100).at("chengdu"),
                General::new("sun", "Sun", "wu").with_strength(5),
            ],
            provinces: vec![
                Province::new("xuchang", "Xuchang", "wei"),
                Province::new("chengdu", "Chengdu", "shu"),
                Province::new("jianye", "Jianye", "wu"),
            ],
        }
    }

    #[test]
    fn test_plan_covers_ai_kingdoms_in_order() {
        let plan = plan_turns(&world(), &DecisionEngine::default());
        let kingdoms: Vec<_> = plan.turns().iter().map(|t| t.kingdom.as_str()).collect();
        assert_eq!(kingdoms, vec!["wei", "wu"]);
        assert!(plan.orders_for(&"shu".into()).is_none());
    }

    #[test]
    fn test_plan_matches_single_decisions() {
        let world = world();
        let engine = DecisionEngine::default();
        let plan = plan_turns(&world, &engine);
        for turn in plan.turns() {
            assert_eq!(turn.orders, engine.decide(&world, &turn.kingdom));
        }
    }

    #[test]
    fn test_plan_hash_is_stable() {
        let world = world();
        let engine = DecisionEngine::default();
        let a = plan_turns(&world, &engine);
        let b = plan_turns(&world, &engine);
        assert_eq!(a.plan_hash(), b.plan_hash());
        assert_ne!(a.plan_hash(), TurnPlan::default().plan_hash());
    }
}
