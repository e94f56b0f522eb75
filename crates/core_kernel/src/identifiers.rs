//! Strongly-typed identifiers for bordereaux entities
//!
//! Bordereaux rows reference policies and members by the opaque string codes
//! the ceding insurer assigns. Newtype wrappers keep the different code kinds
//! from being mixed up while preserving the upstream representation verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_code {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from the upstream code
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the upstream code is empty
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

define_code!(PolicyHolderId, "Identifier of the policy holder on a bordereaux row");
define_code!(MemberId, "Identifier of the covered member a claim was paid for");
define_code!(PolicyId, "Police identifier on a premium bordereaux row");
