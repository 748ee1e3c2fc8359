use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle, SchoolDate};

/// A dated staff note about a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: EntityId,
    student_id: EntityId,
    title: String,
    text: String,
    date: SchoolDate,
    lifecycle: EntityLifecycle,
}

impl Note {
    pub fn new(
        id: EntityId,
        student_id: EntityId,
        title: impl Into<String>,
        text: impl Into<String>,
        date: SchoolDate,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("note title cannot be empty"));
        }
        Ok(Self {
            id,
            student_id,
            title,
            text: text.into(),
            date,
            lifecycle: EntityLifecycle::new(),
        })
    }

    pub fn student_id(&self) -> &EntityId {
        &self.student_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> SchoolDate {
        self.date
    }

    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn retitle(&mut self, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("note title cannot be empty"));
        }
        self.title = title;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }

    pub fn activate(&mut self) {
        self.lifecycle.activate(false);
    }
}

impl Entity for Note {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn lifecycle(&self) -> &EntityLifecycle {
        &self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_requires_a_title() {
        let result = Note::new(
            EntityId::parse("N1").unwrap(),
            EntityId::parse("S1").unwrap(),
            "",
            "Forgot homework twice this week",
            SchoolDate::parse("10/03/2026").unwrap(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn edit_text_replaces_the_body() {
        let mut note = Note::new(
            EntityId::parse("N1").unwrap(),
            EntityId::parse("S1").unwrap(),
            "Behaviour",
            "Forgot homework twice this week",
            SchoolDate::parse("10/03/2026").unwrap(),
        )
        .unwrap();

        note.edit_text("Caught up on all homework");
        assert_eq!(note.text(), "Caught up on all homework");
    }
}
