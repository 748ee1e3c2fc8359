use serde::{Deserialize, Serialize};

use classhub_core::{
    DomainError, DomainResult, Entity, EntityId, EntityLifecycle, LifecycleState, ValueObject,
};

/// Validated email address.
///
/// Deliberately shallow validation (shape, not deliverability): the
/// authoritative check happens when the out-of-scope mailer verifies the
/// account, which is what flips the lifecycle's `verified` flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(DomainError::validation(format!("invalid email: {s}")));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::validation(format!("invalid email: {s}")));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Email {}

/// User account subtype, one per policy-table user module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Master,
    Administrator,
    Teacher,
    Student,
    Worker,
}

/// A user account within one tenant.
///
/// New accounts start in `Pending` until the verification flow calls
/// [`User::mark_verified`]; masters bootstrap a tenant and therefore start
/// `Active` and verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: EntityId,
    name: String,
    email: Email,
    kind: UserKind,
    lifecycle: EntityLifecycle,
}

impl User {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: Email,
        kind: UserKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be empty"));
        }

        let mut lifecycle = EntityLifecycle::with_state(LifecycleState::Pending);
        if kind == UserKind::Master {
            lifecycle.mark_verified();
        }

        Ok(Self {
            id,
            name,
            email,
            kind,
            lifecycle,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn kind(&self) -> UserKind {
        self.kind
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be empty"));
        }
        self.name = name;
        Ok(())
    }

    /// Changing the address voids any previous verification.
    pub fn change_email(&mut self, email: Email) {
        if self.email != email {
            self.email = email;
            self.lifecycle = EntityLifecycle::with_state(self.lifecycle.state());
        }
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }

    /// Reactivate the account; unverified accounts park in `Pending`.
    pub fn activate(&mut self) {
        self.lifecycle.activate(true);
    }

    pub fn mark_verified(&mut self) {
        self.lifecycle.mark_verified();
    }
}

impl Entity for User {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }
}
