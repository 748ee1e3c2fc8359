//! Entity lifecycle state machine.
//!
//! Every domain entity carries an [`EntityLifecycle`]: an
//! active/pending/inactive state plus an orthogonal `verified` flag. State
//! only ever changes through the transition methods below; there are no
//! terminal states, so an inactive record can always come back.

use serde::{Deserialize, Serialize};

/// Closed set of lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Active,
    Pending,
    Inactive,
}

/// Lifecycle status attached to a domain entity.
///
/// `verified` is only ever set through [`EntityLifecycle::mark_verified`];
/// no direct setter exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLifecycle {
    state: LifecycleState,
    verified: bool,
}

impl EntityLifecycle {
    /// New lifecycle: `Active`, unverified.
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Active,
            verified: false,
        }
    }

    /// New lifecycle starting in an explicit state, unverified.
    pub fn with_state(state: LifecycleState) -> Self {
        Self {
            state,
            verified: false,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn is_active(&self) -> bool {
        self.state == LifecycleState::Active
    }

    /// Any state → `Inactive`. Always succeeds; idempotent.
    pub fn deactivate(&mut self) {
        self.state = LifecycleState::Inactive;
    }

    /// `Inactive`/`Pending` → `Active`, unless verification is required and
    /// the entity is unverified, in which case the entity parks in `Pending`.
    /// No-op when already `Active`.
    pub fn activate(&mut self, require_verification: bool) {
        if self.state == LifecycleState::Active {
            return;
        }
        self.state = if require_verification && !self.verified {
            LifecycleState::Pending
        } else {
            LifecycleState::Active
        };
    }

    /// Sets `verified`; a `Pending` entity is promoted to `Active`.
    pub fn mark_verified(&mut self) {
        self.verified = true;
        if self.state == LifecycleState::Pending {
            self.state = LifecycleState::Active;
        }
    }
}

impl Default for EntityLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lifecycle_is_active_and_unverified() {
        let lc = EntityLifecycle::new();
        assert_eq!(lc.state(), LifecycleState::Active);
        assert!(!lc.verified());
    }

    #[test]
    fn deactivate_always_yields_inactive() {
        for start in [
            LifecycleState::Active,
            LifecycleState::Pending,
            LifecycleState::Inactive,
        ] {
            let mut lc = EntityLifecycle::with_state(start);
            lc.deactivate();
            assert_eq!(lc.state(), LifecycleState::Inactive);

            // Idempotent.
            lc.deactivate();
            assert_eq!(lc.state(), LifecycleState::Inactive);
        }
    }

    #[test]
    fn activate_with_verification_parks_unverified_in_pending() {
        let mut lc = EntityLifecycle::with_state(LifecycleState::Inactive);
        lc.activate(true);
        assert_eq!(lc.state(), LifecycleState::Pending);
        assert!(!lc.verified());
    }

    #[test]
    fn activate_without_verification_goes_straight_to_active() {
        let mut lc = EntityLifecycle::with_state(LifecycleState::Inactive);
        lc.activate(false);
        assert_eq!(lc.state(), LifecycleState::Active);
    }

    #[test]
    fn activate_is_a_noop_when_already_active() {
        let mut lc = EntityLifecycle::new();
        lc.activate(true);
        assert_eq!(lc.state(), LifecycleState::Active);
    }

    #[test]
    fn mark_verified_promotes_pending_to_active() {
        let mut lc = EntityLifecycle::with_state(LifecycleState::Inactive);
        lc.activate(true);
        assert_eq!(lc.state(), LifecycleState::Pending);

        lc.mark_verified();
        assert_eq!(lc.state(), LifecycleState::Active);
        assert!(lc.verified());
    }

    #[test]
    fn mark_verified_does_not_touch_inactive_state() {
        let mut lc = EntityLifecycle::with_state(LifecycleState::Inactive);
        lc.mark_verified();
        assert_eq!(lc.state(), LifecycleState::Inactive);
        assert!(lc.verified());

        // A verified inactive entity activates directly even when
        // verification is required.
        lc.activate(true);
        assert_eq!(lc.state(), LifecycleState::Active);
    }
}
