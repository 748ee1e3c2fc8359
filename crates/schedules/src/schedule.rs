use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle};

/// A named collection of lessons (e.g. "3rd grade, morning shift").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    id: EntityId,
    name: String,
    lessons: Vec<EntityId>,
    lifecycle: EntityLifecycle,
}

impl Schedule {
    pub fn new(id: EntityId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("schedule name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            lessons: Vec::new(),
            lifecycle: EntityLifecycle::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lessons(&self) -> &[EntityId] {
        &self.lessons
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("schedule name cannot be empty"));
        }
        self.name = name;
        Ok(())
    }

    pub fn add_lesson(&mut self, lesson: EntityId) -> DomainResult<()> {
        if self.lessons.contains(&lesson) {
            return Err(DomainError::conflict(format!(
                "lesson {lesson} is already on the list"
            )));
        }
        self.lessons.push(lesson);
        Ok(())
    }

    pub fn remove_lesson(&mut self, lesson: &EntityId) -> DomainResult<()> {
        match self.lessons.iter().position(|l| l == lesson) {
            Some(idx) => {
                self.lessons.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "lesson {lesson} is not included in the list"
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

impl Entity for Schedule {
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

    fn schedule() -> Schedule {
        Schedule::new(EntityId::parse("SCH1").unwrap(), "Morning shift").unwrap()
    }

    #[test]
    fn lessons_keep_insertion_order() {
        let mut schedule = schedule();
        for id in ["L1", "L2", "L3"] {
            schedule.add_lesson(EntityId::parse(id).unwrap()).unwrap();
        }
        let listed: Vec<&str> = schedule.lessons().iter().map(|l| l.as_str()).collect();
        assert_eq!(listed, vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn duplicate_lesson_conflicts() {
        let mut schedule = schedule();
        let l1 = EntityId::parse("L1").unwrap();
        schedule.add_lesson(l1.clone()).unwrap();
        assert!(matches!(
            schedule.add_lesson(l1),
            Err(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn removing_an_absent_lesson_conflicts() {
        let mut schedule = schedule();
        assert!(matches!(
            schedule.remove_lesson(&EntityId::parse("L9").unwrap()),
            Err(DomainError::Conflict(_))
        ));
    }
}
