use core::str::FromStr;

use serde::{Deserialize, Serialize};

use classhub_core::DomainError;

/// Role identifier used for RBAC.
///
/// The role set is closed: the policy table is enumerated over it, and an
/// unknown role in a token must fail at the parse boundary rather than
/// silently default-deny deep inside a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    Administrator,
    Teacher,
    Student,
    Worker,
}

impl Role {
    /// Every role, for exhaustive policy enumeration.
    pub const ALL: [Role; 5] = [
        Role::Master,
        Role::Administrator,
        Role::Teacher,
        Role::Student,
        Role::Worker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Administrator => "administrator",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Worker => "worker",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(Role::Master),
            "administrator" => Ok(Role::Administrator),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            "worker" => Ok(Role::Worker),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_strings() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_fails_to_parse() {
        assert!(matches!(
            "principal".parse::<Role>(),
            Err(DomainError::Validation(_))
        ));
    }
}
