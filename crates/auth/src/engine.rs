//! Access decision engine.
//!
//! One engine instance is shared by every use case so no module can forget
//! the check. The engine is a pure policy lookup: on allow it returns with no
//! observable side effect — no caching, no logging (those are collaborator
//! concerns) — and it never reads `master_id`; tenant scoping is enforced by
//! the store, not here.

use thiserror::Error;

use crate::{Action, Module, PolicyMatrix, Role, TokenData};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessDeniedError {
    /// The request carried no identity token; every action requires one.
    #[error("access denied: missing token")]
    MissingToken,

    /// The policy table denied (role, module, action).
    #[error("access denied: role '{role}' may not perform {action:?} on {module:?}")]
    Forbidden {
        role: Role,
        module: Module,
        action: Action,
    },
}

/// Policy decision point shared by every use case.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    matrix: PolicyMatrix,
}

impl PolicyEngine {
    pub fn new(matrix: PolicyMatrix) -> Self {
        Self { matrix }
    }

    /// Engine loaded with [`PolicyMatrix::school_defaults`].
    pub fn with_school_defaults() -> Self {
        Self::new(PolicyMatrix::school_defaults())
    }

    pub fn matrix(&self) -> &PolicyMatrix {
        &self.matrix
    }

    /// Decide whether the caller may perform `action` on `module`.
    ///
    /// Fails closed: a missing token or an unlisted (role, module, action)
    /// triple both deny.
    pub fn verify(
        &self,
        module: Module,
        action: Action,
        token: Option<&TokenData>,
    ) -> Result<(), AccessDeniedError> {
        let token = token.ok_or(AccessDeniedError::MissingToken)?;

        if self.matrix.is_allowed(token.role(), module, action) {
            Ok(())
        } else {
            Err(AccessDeniedError::Forbidden {
                role: token.role(),
                module,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classhub_core::MasterId;

    fn token(role: Role) -> TokenData {
        TokenData::new("staff@school.example", role, MasterId::parse("m1").unwrap())
    }

    #[test]
    fn missing_token_is_denied_for_every_action() {
        let engine = PolicyEngine::with_school_defaults();
        for module in Module::ALL {
            for action in Action::ALL {
                assert_eq!(
                    engine.verify(module, action, None),
                    Err(AccessDeniedError::MissingToken)
                );
            }
        }
    }

    #[test]
    fn verify_matches_the_matrix_over_the_full_cross_product() {
        let engine = PolicyEngine::with_school_defaults();
        for role in Role::ALL {
            let tok = token(role);
            for module in Module::ALL {
                for action in Action::ALL {
                    let decision = engine.verify(module, action, Some(&tok));
                    if engine.matrix().is_allowed(role, module, action) {
                        assert_eq!(decision, Ok(()));
                    } else {
                        assert_eq!(
                            decision,
                            Err(AccessDeniedError::Forbidden {
                                role,
                                module,
                                action
                            })
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn allow_has_no_observable_side_effect() {
        let engine = PolicyEngine::with_school_defaults();
        let tok = token(Role::Master);

        let before = engine.matrix().clone();
        engine
            .verify(Module::Lesson, Action::Create, Some(&tok))
            .unwrap();
        assert_eq!(engine.matrix(), &before);
    }

    #[test]
    fn custom_matrix_swaps_without_engine_changes() {
        let matrix = PolicyMatrix::new().allow(Role::Worker, Module::Note, Action::Create);
        let engine = PolicyEngine::new(matrix);

        assert!(
            engine
                .verify(Module::Note, Action::Create, Some(&token(Role::Worker)))
                .is_ok()
        );
        assert!(
            engine
                .verify(Module::Note, Action::Create, Some(&token(Role::Master)))
                .is_err()
        );
    }
}
