use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle, ValueObject};

const MAX_SUBJECT_LEN: usize = 80;

/// A subject name within a curriculum, trimmed and bounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn parse(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("subject cannot be empty"));
        }
        if trimmed.len() > MAX_SUBJECT_LEN {
            return Err(DomainError::validation(format!(
                "subject exceeds {MAX_SUBJECT_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Subject {}

/// A curriculum: the set of subjects taught to a grade/class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    id: EntityId,
    name: String,
    subjects: Vec<Subject>,
    lifecycle: EntityLifecycle,
}

impl Curriculum {
    pub fn new(id: EntityId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("curriculum name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            subjects: Vec::new(),
            lifecycle: EntityLifecycle::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn add_subject(&mut self, subject: Subject) -> DomainResult<()> {
        if self.subjects.contains(&subject) {
            return Err(DomainError::conflict(format!(
                "subject {subject} is already on the list"
            )));
        }
        self.subjects.push(subject);
        Ok(())
    }

    pub fn remove_subject(&mut self, subject: &Subject) -> DomainResult<()> {
        match self.subjects.iter().position(|s| s == subject) {
            Some(idx) => {
                self.subjects.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "subject {subject} is not included in the list"
            ))),
        }
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }

    pub fn activate(&mut self) {
        self.lifecycle.activate(false);
    }
}

impl Entity for Curriculum {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }
}
