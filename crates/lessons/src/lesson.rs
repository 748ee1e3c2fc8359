use core::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use classhub_core::{DomainError, DomainResult, Entity, EntityId, EntityLifecycle, ValueObject};

/// Day of the week a lesson takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            other => Err(DomainError::validation(format!("invalid day: {other}"))),
        }
    }
}

impl ValueObject for Weekday {}

/// Time of day a lesson starts, `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonTime(NaiveTime);

impl LessonTime {
    pub fn parse(s: &str) -> DomainResult<Self> {
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| DomainError::validation(format!("invalid time (expected HH:MM): {s}")))?;
        Ok(Self(time))
    }
}

impl core::fmt::Display for LessonTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl ValueObject for LessonTime {}

/// A lesson: a subject taught to a roster of students on given days/times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    id: EntityId,
    name: String,
    students: Vec<EntityId>,
    days: Vec<Weekday>,
    times: Vec<LessonTime>,
    lifecycle: EntityLifecycle,
}

impl Lesson {
    pub fn new(id: EntityId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("lesson name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            students: Vec::new(),
            days: Vec::new(),
            times: Vec::new(),
            lifecycle: EntityLifecycle::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn students(&self) -> &[EntityId] {
        &self.students
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn times(&self) -> &[LessonTime] {
        &self.times
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("lesson name cannot be empty"));
        }
        self.name = name;
        Ok(())
    }

    pub fn add_student(&mut self, student: EntityId) -> DomainResult<()> {
        if self.students.contains(&student) {
            return Err(DomainError::conflict(format!(
                "student {student} is already on the list"
            )));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn remove_student(&mut self, student: &EntityId) -> DomainResult<()> {
        match self.students.iter().position(|s| s == student) {
            Some(idx) => {
                self.students.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "student {student} is not included in the list"
            ))),
        }
    }

    pub fn add_day(&mut self, day: Weekday) -> DomainResult<()> {
        if self.days.contains(&day) {
            return Err(DomainError::conflict(format!(
                "day {day} is already on the list"
            )));
        }
        self.days.push(day);
        Ok(())
    }

    pub fn remove_day(&mut self, day: Weekday) -> DomainResult<()> {
        match self.days.iter().position(|d| *d == day) {
            Some(idx) => {
                self.days.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "day {day} is not included in the list"
            ))),
        }
    }

    pub fn add_time(&mut self, time: LessonTime) -> DomainResult<()> {
        if self.times.contains(&time) {
            return Err(DomainError::conflict(format!(
                "time {time} is already on the list"
            )));
        }
        self.times.push(time);
        Ok(())
    }

    pub fn remove_time(&mut self, time: LessonTime) -> DomainResult<()> {
        match self.times.iter().position(|t| *t == time) {
            Some(idx) => {
                self.times.remove(idx);
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "time {time} is not included in the list"
            ))),
        }
    }

    pub fn deactivate(&mut self) {
        self.lifecycle.deactivate();
    }

    pub fn activate(&mut self) {
        // Lessons carry no verification requirement.
        self.lifecycle.activate(false);
    }
}

impl Entity for Lesson {
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
    use proptest::prelude::*;

    fn lesson() -> Lesson {
        Lesson::new(EntityId::parse("L1").unwrap(), "Algebra").unwrap()
    }

    fn student(id: &str) -> EntityId {
        EntityId::parse(id).unwrap()
    }

    #[test]
    fn new_lesson_starts_active_with_empty_lists() {
        let lesson = lesson();
        assert!(lesson.lifecycle().is_active());
        assert!(lesson.students().is_empty());
        assert!(lesson.days().is_empty());
        assert!(lesson.times().is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Lesson::new(EntityId::parse("L1").unwrap(), "   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn adding_a_student_twice_conflicts() {
        let mut lesson = lesson();
        lesson.add_student(student("S1")).unwrap();

        let err = lesson.add_student(student("S1")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("already on the list")));
        assert_eq!(lesson.students(), &[student("S1")]);
    }

    #[test]
    fn removing_an_absent_student_conflicts() {
        let mut lesson = lesson();
        let err = lesson.remove_student(&student("S9")).unwrap_err();
        assert!(
            matches!(err, DomainError::Conflict(msg) if msg.contains("not included in the list"))
        );
    }

    #[test]
    fn days_and_times_share_the_set_semantics() {
        let mut lesson = lesson();

        lesson.add_day(Weekday::Monday).unwrap();
        assert!(lesson.add_day(Weekday::Monday).is_err());
        lesson.remove_day(Weekday::Monday).unwrap();
        assert!(lesson.remove_day(Weekday::Monday).is_err());

        let eight = LessonTime::parse("08:00").unwrap();
        lesson.add_time(eight).unwrap();
        assert!(lesson.add_time(eight).is_err());
        lesson.remove_time(eight).unwrap();
        assert!(lesson.remove_time(eight).is_err());
    }

    #[test]
    fn weekday_parses_case_insensitively() {
        assert_eq!("Friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn lesson_time_validates_format() {
        assert!(LessonTime::parse("07:30").is_ok());
        for bad in ["25:00", "12:61", "noon", "12h30"] {
            assert!(LessonTime::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adding distinct ids succeeds in order; re-adding any of
        /// them conflicts and leaves the roster unchanged.
        #[test]
        fn distinct_ids_add_once_and_only_once(
            ids in prop::collection::hash_set("[a-z0-9]{1,8}", 1..20)
        ) {
            let mut lesson = lesson();
            let ids: Vec<EntityId> =
                ids.into_iter().map(|s| EntityId::parse(&s).unwrap()).collect();

            for id in &ids {
                lesson.add_student(id.clone()).unwrap();
            }
            prop_assert_eq!(lesson.students(), ids.as_slice());

            for id in &ids {
                prop_assert!(lesson.add_student(id.clone()).is_err());
            }
            prop_assert_eq!(lesson.students(), ids.as_slice());
        }

        /// Property: removing everything that was added leaves an empty roster.
        #[test]
        fn add_then_remove_round_trips(
            ids in prop::collection::hash_set("[a-z0-9]{1,8}", 1..20)
        ) {
            let mut lesson = lesson();
            let ids: Vec<EntityId> =
                ids.into_iter().map(|s| EntityId::parse(&s).unwrap()).collect();

            for id in &ids {
                lesson.add_student(id.clone()).unwrap();
            }
            for id in &ids {
                lesson.remove_student(id).unwrap();
            }
            prop_assert!(lesson.students().is_empty());
        }
    }
}
