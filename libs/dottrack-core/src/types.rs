//! Core types for practice tracking.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a practice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Unattempted,
    Correct,
    Incorrect,
}

impl Default for QuestionStatus {
    fn default() -> Self {
        Self::Unattempted
    }
}

impl QuestionStatus {
    /// Next status in the practice cycle:
    /// unattempted -> correct -> incorrect -> unattempted.
    pub fn advanced(self) -> Self {
        match self {
            Self::Unattempted => Self::Correct,
            Self::Correct => Self::Incorrect,
            Self::Incorrect => Self::Unattempted,
        }
    }

    pub fn is_attempted(self) -> bool {
        self != Self::Unattempted
    }
}

/// Identity of a question within a project: unit plus 1-based index.
///
/// A composite key rather than a formatted string, so unit ids containing
/// the display separator cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionKey {
    pub unit_id: String,
    pub question_index: u32,
}

impl QuestionKey {
    pub fn new(unit_id: impl Into<String>, question_index: u32) -> Self {
        Self {
            unit_id: unit_id.into(),
            question_index,
        }
    }
}

impl fmt::Display for QuestionKey {
    /// Legacy `"<unit>-<index>"` label form, for display only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.unit_id, self.question_index)
    }
}

/// Immutable record of a status assignment to one question.
///
/// Attempts are append-only; the latest timestamp per question decides its
/// current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub project_id: String,
    pub unit_id: String,
    pub question_index: u32,
    pub status: QuestionStatus,
    /// Wall-clock milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Calendar date in the project's local zone.
    pub date: NaiveDate,
}

impl Attempt {
    pub fn key(&self) -> QuestionKey {
        QuestionKey::new(self.unit_id.clone(), self.question_index)
    }
}

/// A scheduled future re-presentation of a previously incorrect question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub project_id: String,
    pub unit_id: String,
    pub question_index: u32,
    pub due_date: NaiveDate,
    /// Days between the last evaluation and the next due date. At least 1.
    pub interval: i64,
    pub last_review_date: NaiveDate,
}

impl ReviewItem {
    pub fn key(&self) -> QuestionKey {
        QuestionKey::new(self.unit_id.clone(), self.question_index)
    }
}

/// A named grouping of sequentially indexed questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUnit {
    pub id: String,
    pub name: String,
    /// Number of questions in this unit. Indices run 1..=count.
    pub count: u32,
}

/// A practice project: the owner of all attempts and review items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: i64,
    pub units: Vec<ProjectUnit>,
}

impl Project {
    pub fn new(name: impl Into<String>, units: Vec<ProjectUnit>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
            units,
        }
    }

    /// Generate the default setup structure: units `u1..uN` named `"1".."N"`,
    /// each with the same question count.
    pub fn with_uniform_units(
        name: impl Into<String>,
        unit_count: u32,
        questions_per_unit: u32,
    ) -> Self {
        let units = (1..=unit_count)
            .map(|i| ProjectUnit {
                id: format!("u{i}"),
                name: i.to_string(),
                count: questions_per_unit,
            })
            .collect();
        Self::new(name, units)
    }

    pub fn unit(&self, unit_id: &str) -> Option<&ProjectUnit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn total_questions(&self) -> u32 {
        self.units.iter().map(|u| u.count).sum()
    }
}
