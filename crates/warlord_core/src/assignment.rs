//! Orders produced by the decision engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{GeneralId, ProvinceId};

/// What a general is ordered to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Attack a province (capture, conquest or reconquest).
    Attack,
    /// Reinforce an own province.
    Defend,
    /// Recover hit points.
    Rest,
    /// Build strength.
    Train,
}

impl ActionType {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Rest => "rest",
            Self::Train => "train",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The objective class that produced an order, in scheduling order.
///
/// Objectives are processed strictly in declaration order; each one only
/// sees the generals left over by the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Strike a weakened enemy general where it stands.
    Capture,
    /// Take a vulnerable enemy province.
    Conquer,
    /// Retake a province that used to be ours.
    Reconquer,
    /// Reinforce a damaged own province.
    Defend,
    /// Rest or train an idle general.
    Maintain,
}

impl Objective {
    /// Combat objectives, in scheduling order.
    pub const COMBAT: [Self; 4] = [Self::Capture, Self::Conquer, Self::Reconquer, Self::Defend];

    /// Reported priority (lower = more urgent).
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Capture => 1,
            Self::Conquer => 2,
            Self::Reconquer => 3,
            Self::Defend => 4,
            Self::Maintain => 5,
        }
    }

    /// Action issued for a combat objective.
    #[must_use]
    pub const fn combat_action(self) -> ActionType {
        match self {
            Self::Defend => ActionType::Defend,
            _ => ActionType::Attack,
        }
    }
}

/// A single order for one general.
///
/// Serialized with camelCase keys for the game's debugging UIs:
/// `{"unitId", "actionType", "targetId", "priority", "reason"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// General receiving the order.
    pub unit_id: GeneralId,
    /// What to do.
    pub action_type: ActionType,
    /// Province to act on; `None` for rest and train.
    pub target_id: Option<ProvinceId>,
    /// Objective priority, 1..=5 (lower = more urgent).
    pub priority: u8,
    /// Human-readable justification.
    pub reason: String,
}

impl Assignment {
    /// Check if this order sends the general into combat.
    #[must_use]
    pub const fn is_combat(&self) -> bool {
        matches!(self.action_type, ActionType::Attack | ActionType::Defend)
    }
}
