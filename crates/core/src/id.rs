//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are allocated by the store (serial integer keys), so a freshly
//! built entity carries the `UNASSIGNED` sentinel until it is persisted.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product record.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

macro_rules! impl_serial_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Sentinel for "not yet assigned by the store".
            pub const UNASSIGNED: Self = Self(0);

            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }

            pub fn is_assigned(&self) -> bool {
                self.0 > 0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        /// Parses an unsigned decimal (no sign, no whitespace).
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> DomainResult<Self> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::invalid_id(format!("{}: not an unsigned integer", $name)));
                }
                let raw = s
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                let value = i64::try_from(raw)
                    .map_err(|_| DomainError::invalid_id(format!("{}: out of range", $name)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_serial_newtype!(ProductId, "ProductId");
