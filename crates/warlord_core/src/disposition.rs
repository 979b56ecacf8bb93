//! What happens to a general after a successful capture.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DecisionConfig;
use crate::ids::KingdomId;
use crate::world::General;

/// Fate of a captured general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Pressed into the captor's service.
    Enslavement,
    /// Locked away.
    Isolation,
}

impl Disposition {
    /// Wire name of the disposition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enslavement => "enslavement",
            Self::Isolation => "isolation",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a captive with the default threshold (love above 30 enslaves).
#[must_use]
pub fn classify_disposition(captive: &General, captor: &KingdomId) -> Disposition {
    classify_disposition_with(captive, captor, &DecisionConfig::default())
}

/// Classify a captive: enslavement iff `love > enslavement_love_above`.
#[must_use]
pub fn classify_disposition_with(
    captive: &General,
    captor: &KingdomId,
    config: &DecisionConfig,
) -> Disposition {
    let disposition = if captive.love > config.enslavement_love_above {
        Disposition::Enslavement
    } else {
        Disposition::Isolation
    };
    tracing::trace!(
        general = %captive.id,
        captor = %captor,
        love = captive.love,
        %disposition,
        "classified captive"
    );
    disposition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captive(love: i32) -> General {
        General::new("lu_bu", "Lu Bu", "lu").with_love(love)
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let captor = KingdomId::new("wei");
        assert_eq!(classify_disposition(&captive(31), &captor), Disposition::Enslavement);
        assert_eq!(classify_disposition(&captive(30), &captor), Disposition::Isolation);
    }

    #[test]
    fn test_negative_love_isolates() {
        let captor = KingdomId::new("wei");
        assert_eq!(classify_disposition(&captive(-50), &captor), Disposition::Isolation);
    }

    #[test]
    fn test_custom_threshold() {
        let config = DecisionConfig {
            enslavement_love_above: 0,
            ..DecisionConfig::default()
        };
        let captor = KingdomId::new("wei");
        assert_eq!(
            classify_disposition_with(&captive(1), &captor, &config),
            Disposition::Enslavement
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(Disposition::Enslavement.to_string(), "enslavement");
        assert_eq!(Disposition::Isolation.as_str(), "isolation");
    }
}
