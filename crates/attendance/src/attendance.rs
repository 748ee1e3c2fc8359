use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle, SchoolDate};

/// Attendance sheet for one lesson on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    id: EntityId,
    lesson_id: EntityId,
    date: SchoolDate,
    students_present: Vec<EntityId>,
    lifecycle: EntityLifecycle,
}

impl Attendance {
    pub fn new(id: EntityId, lesson_id: EntityId, date: SchoolDate) -> Self {
        Self {
            id,
            lesson_id,
            date,
            students_present: Vec::new(),
            lifecycle: EntityLifecycle::new(),
        }
    }

    pub fn lesson_id(&self) -> &EntityId {
        &self.lesson_id
    }

    pub fn date(&self) -> SchoolDate {
        self.date
    }

    pub fn students_present(&self) -> &[EntityId] {
        &self.students_present
    }

    /// Record a student as present.
    pub fn register_student(&mut self, student: EntityId) -> DomainResult<()> {
        if self.students_present.contains(&student) {
            return Err(DomainError::conflict(format!(
                "student {student} is already on the list"
            )));
        }
        self.students_present.push(student);
        Ok(())
    }

    /// Strike a student from the sheet.
    pub fn unregister_student(&mut self, student: &EntityId) -> DomainResult<()> {
        match self.students_present.iter().position(|s| s == student) {
            Some(idx) => {
                self.students_present.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "student {student} is not included in the list"
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

impl Entity for Attendance {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }
}
