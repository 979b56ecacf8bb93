//! Scoring utilities.
//!
//! Unit-selection scores mix strength with a tenth of hit points. Selection
//! compares an exact integer key (the score times a fixed scale), which
//! cannot overflow for `u32` inputs, so equal scores compare equal and
//! larger scores always win. The fixed-point value is only for reporting.

use fixed::types::I32F32;

use crate::world::General;

/// Fixed-point number type for reported scores.
///
/// Uses 32 bits for integer part and 32 bits for fractional part.
pub type Fixed = I32F32;

/// Exact `numerator / denominator` in fixed-point, saturating on overflow.
#[must_use]
pub fn ratio(numerator: u64, denominator: u64) -> Fixed {
    Fixed::saturating_from_num(numerator) / Fixed::from_num(denominator.max(1))
}

/// How a tier ranks its candidate generals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreRule {
    /// `strength + hp / 10`, used to pick capture strikers.
    Capture,
    /// `0.6 * strength + 0.4 * (hp / 10)`, used by every other combat tier.
    Combat,
}

impl ScoreRule {
    /// Denominator the key is scaled by.
    #[must_use]
    pub const fn scale(self) -> u64 {
        match self {
            Self::Capture => 10,
            Self::Combat => 100,
        }
    }

    /// Exact score times [`scale`](Self::scale). Use this for comparisons.
    #[must_use]
    pub fn key(self, general: &General) -> u64 {
        let strength = u64::from(general.strength);
        let hp = u64::from(general.hp);
        match self {
            Self::Capture => strength * 10 + hp,
            Self::Combat => strength * 60 + hp * 4,
        }
    }

    /// Score in fixed-point, saturating for very strong generals.
    #[must_use]
    pub fn score(self, general: &General) -> Fixed {
        ratio(self.key(general), self.scale())
    }
}

/// Capture-tier unit score: `strength + hp / 10`.
#[must_use]
pub fn capture_score(general: &General) -> Fixed {
    ScoreRule::Capture.score(general)
}

/// Combat unit score for every other tier: `0.6 * strength + 0.4 * (hp / 10)`.
#[must_use]
pub fn combat_score(general: &General) -> Fixed {
    ScoreRule::Combat.score(general)
}

/// Check `value < max * percent / 100` without rounding.
#[must_use]
pub fn below_percent(value: u32, max: u32, percent: u32) -> bool {
    u64::from(value) * 100 < u64::from(max) * u64::from(percent)
}
