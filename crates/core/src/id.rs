//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are validated strings rather than raw UUIDs: callers may
//! supply their own ids, and the same id string under two different tenants
//! names two different logical entities. `generate()` mints UUIDv7 strings
//! for the common case.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

const MAX_ID_LEN: usize = 64;

/// Identifier of a tenant (the multi-tenant boundary).
///
/// Named after the `master` account that owns a school's data; every record a
/// caller can see belongs to exactly one `MasterId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasterId(String);

/// Identifier of a domain entity, unique only within its tenant partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Generate a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing ids explicitly in
            /// tests for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Parse and validate an externally supplied identifier.
            ///
            /// Accepts 1..=64 characters from `[A-Za-z0-9._-]`.
            pub fn parse(s: &str) -> Result<Self, DomainError> {
                if s.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, " cannot be empty")));
                }
                if s.len() > MAX_ID_LEN {
                    return Err(DomainError::invalid_id(format!(
                        "{} exceeds {} characters",
                        $name, MAX_ID_LEN
                    )));
                }
                if !s
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
                {
                    return Err(DomainError::invalid_id(format!(
                        "{} contains invalid characters: {s}",
                        $name
                    )));
                }
                Ok(Self(s.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_string_id!(MasterId, "MasterId");
impl_string_id!(EntityId, "EntityId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_ids() {
        let id = EntityId::parse("S1").unwrap();
        assert_eq!(id.as_str(), "S1");

        let id = MasterId::parse("school-01.main").unwrap();
        assert_eq!(id.as_str(), "school-01.main");
    }

    #[test]
    fn parse_rejects_empty_and_oversized() {
        assert!(matches!(
            EntityId::parse(""),
            Err(DomainError::InvalidId(_))
        ));

        let long = "a".repeat(MAX_ID_LEN + 1);
        assert!(matches!(
            EntityId::parse(&long),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        for bad in ["has space", "semi;colon", "sla/sh", "tab\tchar"] {
            assert!(matches!(
                EntityId::parse(bad),
                Err(DomainError::InvalidId(_))
            ));
        }
    }

    #[test]
    fn generated_ids_round_trip_through_parse() {
        let id = EntityId::generate();
        let reparsed = EntityId::parse(id.as_str()).unwrap();
        assert_eq!(id, reparsed);
    }
}
