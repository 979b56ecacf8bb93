//! Identifier newtypes for kingdoms, generals and provinces.
//!
//! Content tables key everything by string id, so ids stay strings but are
//! kept apart at the type level.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a kingdom (faction).
    KingdomId
);

string_id!(
    /// Unique identifier for a general (unit).
    GeneralId
);

string_id!(
    /// Unique identifier for a province (territory).
    ProvinceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_raw_value() {
        assert_eq!(KingdomId::new("wei").to_string(), "wei");
        assert_eq!(ProvinceId::from("xuchang").as_str(), "xuchang");
    }

    #[test]
    fn test_ids_order_lexically() {
        let mut ids = vec![GeneralId::new("b"), GeneralId::new("a")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "a");
    }
}
