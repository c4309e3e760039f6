//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied token refers to this ID
            ///
            /// Accepts the full UUID or any unambiguous prefix of it, with or
            /// without the display prefix.
            pub fn matches(&self, token: &str) -> bool {
                let token = token.strip_prefix($display_prefix).unwrap_or(token);
                if token.is_empty() {
                    return false;
                }
                self.0.to_string().starts_with(&token.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(BillId, "bill-");
define_id!(SubscriptionId, "sub-");
define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");
define_id!(RecurringExpenseId, "rec-");
define_id!(SavingsGoalId, "goal-");
define_id!(LoanId, "loan-");
define_id!(PaymentId, "pay-");
define_id!(AssetId, "ast-");
define_id!(LiabilityId, "lia-");
