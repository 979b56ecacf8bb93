//! The action scheduler.
//!
//! One call to [`DecisionEngine::decide`] plans one kingdom's turn:
//!
//! 1. **Capture** - best capture-scored general strikes each weakened enemy
//!    general's province.
//! 2. **Conquer** - best combat-scored general attacks each vulnerable
//!    enemy province.
//! 3. **Reconquer** - same, for provinces that used to be ours.
//! 4. **Defend** - same, reinforcing our damaged provinces.
//! 5. **Maintain** - leftover generals rest if badly hurt, train if weak,
//!    otherwise stay idle and get no order.
//!
//! Each tier takes the [`UnitPool`] by value and returns what is left, so a
//! general can only ever be handed one order. There is no backtracking: a
//! general taken by an early tier is never reconsidered.

use crate::assignment::{ActionType, Assignment, Objective};
use crate::config::DecisionConfig;
use crate::ids::{KingdomId, ProvinceId};
use crate::math::{below_percent, ScoreRule};
use crate::roster::UnitPool;
use crate::scanner;
use crate::world::{General, WorldView};

/// A province to act on, with the text used to explain the order.
#[derive(Debug, Clone)]
struct TierTarget {
    province: ProvinceId,
    label: String,
}

/// Stateless turn planner.
///
/// Holds only configuration; every call reads the world afresh, so one
/// engine can serve any number of kingdoms, sequentially or in parallel.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Plan one turn for `kingdom`.
    ///
    /// Returns an empty list for unknown or player-controlled kingdoms and
    /// for kingdoms with no available generals. Orders come out grouped by
    /// objective, in priority order.
    pub fn decide<W>(&self, world: &W, kingdom: &KingdomId) -> Vec<Assignment>
    where
        W: WorldView + ?Sized,
    {
        let Some(record) = world.kingdom(kingdom) else {
            tracing::debug!(%kingdom, "unknown kingdom, no orders");
            return Vec::new();
        };
        if !record.controller.is_ai() {
            tracing::debug!(%kingdom, "kingdom is player controlled, no orders");
            return Vec::new();
        }

        let pool = world.roster(kingdom).into_pool();
        if pool.is_exhausted() {
            tracing::debug!(%kingdom, "no available generals");
            return Vec::new();
        }
        let available = pool.remaining();

        let mut orders = Vec::new();
        let mut pool = pool;
        for objective in Objective::COMBAT {
            let targets = self.targets_for(objective, world, kingdom);
            let (rest, mut issued) = assign_tier(pool, objective, targets);
            tracing::debug!(
                %kingdom,
                ?objective,
                issued = issued.len(),
                remaining = rest.remaining(),
                "tier scheduled"
            );
            orders.append(&mut issued);
            pool = rest;
        }
        orders.extend(self.maintain(pool));

        tracing::debug!(%kingdom, available, orders = orders.len(), "turn planned");
        orders
    }

    /// Ranked targets for one combat objective.
    fn targets_for<W>(&self, objective: Objective, world: &W, kingdom: &KingdomId) -> Vec<TierTarget>
    where
        W: WorldView + ?Sized,
    {
        let config = &self.config;
        match objective {
            Objective::Capture => scanner::vulnerable_generals(world, kingdom, config)
                .into_iter()
                .filter_map(|target| {
                    // Undeployed generals have nowhere to strike.
                    let Some(location) = target.general.location.clone() else {
                        tracing::trace!(general = %target.general.id, "capture target not deployed");
                        return None;
                    };
                    let place = world
                        .province(&location)
                        .map_or_else(|| location.to_string(), |p| p.name.clone());
                    Some(TierTarget {
                        label: format!("weakened {} at {}", target.general.name, place),
                        province: location,
                    })
                })
                .collect(),
            Objective::Conquer => scanner::vulnerable_provinces(world, kingdom, config)
                .into_iter()
                .map(|target| TierTarget {
                    province: target.province.id.clone(),
                    label: if target.province.is_capital {
                        format!("the capital {}", target.province.name)
                    } else {
                        format!("{} (hp {})", target.province.name, target.province.hp)
                    },
                })
                .collect(),
            Objective::Reconquer => scanner::lost_provinces(world, kingdom, config)
                .into_iter()
                .map(|province| TierTarget {
                    province: province.id.clone(),
                    label: province.name.clone(),
                })
                .collect(),
            Objective::Defend => scanner::threatened_provinces(world, kingdom, config)
                .into_iter()
                .map(|province| TierTarget {
                    province: province.id.clone(),
                    label: format!("{} (hp {}/{})", province.name, province.hp, province.max_hp),
                })
                .collect(),
            Objective::Maintain => Vec::new(),
        }
    }

    /// Rest or train whoever is left.
    fn maintain(&self, pool: UnitPool<'_>) -> Vec<Assignment> {
        pool.into_remaining()
            .filter_map(|general| {
                let (action, reason) = if below_percent(
                    general.hp,
                    general.max_hp,
                    self.config.rest_hp_percent,
                ) {
                    (
                        ActionType::Rest,
                        format!(
                            "{} rests to recover (hp {}/{})",
                            general.name, general.hp, general.max_hp
                        ),
                    )
                } else if general.strength < self.config.train_strength_below {
                    (
                        ActionType::Train,
                        format!(
                            "{} trains to build strength ({})",
                            general.name, general.strength
                        ),
                    )
                } else {
                    tracing::trace!(general = %general.id, "idle this turn");
                    return None;
                };
                Some(order(general, action, None, Objective::Maintain, reason))
            })
            .collect()
    }
}

/// Hand each target, in order, to the best general still in the pool.
///
/// Stops as soon as no general with `hp > 0` is left.
fn assign_tier(
    mut pool: UnitPool<'_>,
    objective: Objective,
    targets: Vec<TierTarget>,
) -> (UnitPool<'_>, Vec<Assignment>) {
    let rule = score_rule(objective);

    let mut issued = Vec::with_capacity(targets.len().min(pool.remaining()));
    for target in targets {
        let Some(general) = pool
            .best_by(|general| rule.key(general))
            .and_then(|handle| pool.take(handle))
        else {
            break;
        };
        tracing::trace!(
            general = %general.id,
            ?rule,
            score = %rule.score(general),
            "unit selected"
        );
        let reason = match objective {
            Objective::Capture => format!("{} moves to capture {}", general.name, target.label),
            Objective::Conquer => format!("{} attacks vulnerable {}", general.name, target.label),
            Objective::Reconquer => format!("{} marches to reclaim {}", general.name, target.label),
            Objective::Defend | Objective::Maintain => {
                format!("{} reinforces threatened {}", general.name, target.label)
            }
        };
        issued.push(order(
            general,
            objective.combat_action(),
            Some(target.province),
            objective,
            reason,
        ));
    }
    (pool, issued)
}

/// Unit scoring rule for a tier.
const fn score_rule(objective: Objective) -> ScoreRule {
    match objective {
        Objective::Capture => ScoreRule::Capture,
        _ => ScoreRule::Combat,
    }
}

fn order(
    general: &General,
    action_type: ActionType,
    target_id: Option<ProvinceId>,
    objective: Objective,
    reason: String,
) -> Assignment {
    tracing::trace!(
        general = %general.id,
        action = %action_type,
        target = ?target_id,
        priority = objective.priority(),
        "order issued"
    );
    Assignment {
        unit_id: general.id.clone(),
        action_type,
        target_id,
        priority: objective.priority(),
        reason,
    }
}

/// Plan one turn with the default configuration.
pub fn decide_turn<W>(world: &W, kingdom: &KingdomId) -> Vec<Assignment>
where
    W: WorldView + ?Sized,
{
    DecisionEngine::default().decide(world, kingdom)
}
