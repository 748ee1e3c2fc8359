//! Policy table: (role, module, action) → allow/deny.
//!
//! The matrix is pure data — no code per rule — so a deployment can swap the
//! table without touching the engine, and tests can enumerate the full
//! role × module × action cross-product.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Functional area used as a policy-table axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    UserMaster,
    UserAdministrator,
    UserTeacher,
    UserStudent,
    UserWorker,
    Curriculum,
    Lesson,
    Schedule,
    Event,
    Attendance,
    Note,
}

impl Module {
    /// Every module, for exhaustive policy enumeration.
    pub const ALL: [Module; 11] = [
        Module::UserMaster,
        Module::UserAdministrator,
        Module::UserTeacher,
        Module::UserStudent,
        Module::UserWorker,
        Module::Curriculum,
        Module::Lesson,
        Module::Schedule,
        Module::Event,
        Module::Attendance,
        Module::Note,
    ];
}

/// Operation kind used as a policy-table axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Find,
    FindAll,
    Update,
    Delete,
    Add,
    Remove,
}

impl Action {
    /// Every action, for exhaustive policy enumeration.
    pub const ALL: [Action; 7] = [
        Action::Create,
        Action::Find,
        Action::FindAll,
        Action::Update,
        Action::Delete,
        Action::Add,
        Action::Remove,
    ];
}

/// Allow-list policy matrix.
///
/// Lookup is total: any triple not present in the table is **deny**.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMatrix {
    rules: HashSet<(Role, Module, Action)>,
}

impl PolicyMatrix {
    /// Empty matrix: everything denied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant one (role, module, action) triple.
    pub fn allow(mut self, role: Role, module: Module, action: Action) -> Self {
        self.rules.insert((role, module, action));
        self
    }

    /// Grant every action on a module to a role.
    pub fn allow_module(mut self, role: Role, module: Module) -> Self {
        for action in Action::ALL {
            self.rules.insert((role, module, action));
        }
        self
    }

    /// Grant the read actions (`Find`, `FindAll`) on a module to a role.
    pub fn allow_read(mut self, role: Role, module: Module) -> Self {
        self.rules.insert((role, module, Action::Find));
        self.rules.insert((role, module, Action::FindAll));
        self
    }

    pub fn is_allowed(&self, role: Role, module: Module, action: Action) -> bool {
        self.rules.contains(&(role, module, action))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Default school policy.
    ///
    /// - `master` — every action on every module (tenant owner).
    /// - `administrator` — every action on every module except `UserMaster`.
    /// - `teacher` — reads lessons, schedules, curricula, events and student
    ///   accounts; full write on attendance and notes; `Add`/`Remove` on
    ///   lesson rosters.
    /// - `student` — reads lessons, schedules, curricula and events.
    /// - `worker` — reads schedules and events.
    pub fn school_defaults() -> Self {
        let mut matrix = Self::new();

        for module in Module::ALL {
            matrix = matrix.allow_module(Role::Master, module);
            if module != Module::UserMaster {
                matrix = matrix.allow_module(Role::Administrator, module);
            }
        }

        matrix = matrix
            .allow_read(Role::Teacher, Module::Lesson)
            .allow(Role::Teacher, Module::Lesson, Action::Add)
            .allow(Role::Teacher, Module::Lesson, Action::Remove)
            .allow_read(Role::Teacher, Module::Schedule)
            .allow_read(Role::Teacher, Module::Curriculum)
            .allow_read(Role::Teacher, Module::Event)
            .allow_read(Role::Teacher, Module::UserStudent)
            .allow_module(Role::Teacher, Module::Attendance)
            .allow_module(Role::Teacher, Module::Note);

        matrix = matrix
            .allow_read(Role::Student, Module::Lesson)
            .allow_read(Role::Student, Module::Schedule)
            .allow_read(Role::Student, Module::Curriculum)
            .allow_read(Role::Student, Module::Event);

        matrix
            .allow_read(Role::Worker, Module::Schedule)
            .allow_read(Role::Worker, Module::Event)
    }
}
