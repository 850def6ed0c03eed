//! Lesson and lesson-pair data structures

use serde::{Deserialize, Serialize};

/// A single lesson slot as supplied by the external schedule system.
///
/// `is_canceled` only affects display: a canceled lesson is still rendered,
/// flagged with a marker, and never removed from its pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub time: String,
    pub name: String,
    pub teacher: String,
    pub classroom: String,

    #[serde(default, rename = "is-canceled")]
    pub is_canceled: bool,
}

impl Lesson {
    pub fn new(
        time: impl Into<String>,
        name: impl Into<String>,
        teacher: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            name: name.into(),
            teacher: teacher.into(),
            classroom: classroom.into(),
            is_canceled: false,
        }
    }

    pub fn canceled(mut self) -> Self {
        self.is_canceled = true;
        self
    }
}

/// One row of the report: a previous-schedule lesson aligned with its
/// corresponding new-schedule lesson. Either slot may be empty; a pair with
/// both slots empty is permitted and renders two placeholders.
///
/// The wire names `lesson-1`/`lesson-2` match the documents produced by the
/// upstream comparison tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPair {
    #[serde(default, rename = "lesson-1", skip_serializing_if = "Option::is_none")]
    pub previous: Option<Lesson>,

    #[serde(default, rename = "lesson-2", skip_serializing_if = "Option::is_none")]
    pub new: Option<Lesson>,
}

impl LessonPair {
    pub fn new(previous: Option<Lesson>, new: Option<Lesson>) -> Self {
        Self { previous, new }
    }

    /// True when neither slot holds a lesson.
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.new.is_none()
    }
}
