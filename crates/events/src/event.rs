use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle, SchoolDate};

/// A dated entry on the school calendar: holiday, meeting, exam, trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolEvent {
    id: EntityId,
    title: String,
    date: SchoolDate,
    description: String,
    lifecycle: EntityLifecycle,
}

impl SchoolEvent {
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        date: SchoolDate,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("event title cannot be empty"));
        }
        Ok(Self {
            id,
            title,
            date,
            description: description.into(),
            lifecycle: EntityLifecycle::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> SchoolDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reschedule(&mut self, date: SchoolDate) {
        self.date = date;
    }

    pub fn retitle(&mut self, title: impl Into<String>) -> DomainResult<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("event title cannot be empty"));
        }
        self.title = title;
        Ok(())
    }

    pub fn describe(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }

    pub fn activate(&mut self) {
        self.lifecycle.activate(false);
    }
}

impl Entity for SchoolEvent {
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

    fn event() -> SchoolEvent {
        SchoolEvent::new(
            EntityId::parse("E1").unwrap(),
            "Parents meeting",
            SchoolDate::parse("15/04/2026").unwrap(),
            "Term report handout",
        )
        .unwrap()
    }

    #[test]
    fn title_must_not_be_empty() {
        assert!(matches!(
            SchoolEvent::new(
                EntityId::parse("E1").unwrap(),
                " ",
                SchoolDate::parse("15/04/2026").unwrap(),
                "",
            ),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn reschedule_replaces_the_date() {
        let mut event = event();
        let new_date = SchoolDate::parse("22/04/2026").unwrap();
        event.reschedule(new_date);
        assert_eq!(event.date(), new_date);
    }
}
