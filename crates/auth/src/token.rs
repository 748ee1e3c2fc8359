use serde::{Deserialize, Serialize};

use classhub_core::MasterId;

use crate::Role;

/// Caller identity attached to every request after authentication.
///
/// This is the minimal claim set the core expects once a token has been
/// decoded/verified by whatever transport/security layer is in use.
/// `master_id` is immutable for the lifetime of the token (no mutator), and
/// `email` is carried for audit/display only — authorization never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    email: String,
    role: Role,
    master_id: MasterId,
}

impl TokenData {
    pub fn new(email: impl Into<String>, role: Role, master_id: MasterId) -> Self {
        Self {
            email: email.into(),
            role,
            master_id,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn master_id(&self) -> &MasterId {
        &self.master_id
    }
}
