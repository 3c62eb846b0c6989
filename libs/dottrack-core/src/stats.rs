//! Data-level aggregations for the calendar and dashboard.

use crate::resolver::StatusMap;
use crate::types::{Attempt, ProjectUnit, QuestionKey, QuestionStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Attempt counts for one calendar day.
///
/// Every logged attempt counts, including resets: `total` is activity, not
/// distinct questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
}

impl DayStats {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total: 0,
            correct: 0,
            incorrect: 0,
        }
    }

    fn count(&mut self, status: QuestionStatus) {
        self.total += 1;
        match status {
            QuestionStatus::Correct => self.correct += 1,
            QuestionStatus::Incorrect => self.incorrect += 1,
            QuestionStatus::Unattempted => {}
        }
    }

    /// Fraction of the day's attempts marked correct, if any were made.
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// Counts for a single day.
pub fn stats_for_day(attempts: &[Attempt], date: NaiveDate) -> DayStats {
    let mut stats = DayStats::empty(date);
    for attempt in attempts.iter().filter(|a| a.date == date) {
        stats.count(attempt.status);
    }
    stats
}

/// Per-day counts for every day with activity, ascending by date.
pub fn day_stats(attempts: &[Attempt]) -> Vec<DayStats> {
    let mut by_day: BTreeMap<NaiveDate, DayStats> = BTreeMap::new();
    for attempt in attempts {
        by_day
            .entry(attempt.date)
            .or_insert_with(|| DayStats::empty(attempt.date))
            .count(attempt.status);
    }
    by_day.into_values().collect()
}

/// Overall completion numbers derived from current statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Questions whose current status is correct or incorrect.
    pub answered: usize,
    pub correct: usize,
}

impl Summary {
    /// Share of answered questions currently correct.
    pub fn accuracy(&self) -> Option<f64> {
        (self.answered > 0).then(|| self.correct as f64 / self.answered as f64)
    }
}

pub fn summarize(map: &StatusMap) -> Summary {
    let answered = map.values().filter(|s| s.is_attempted()).count();
    let correct = map
        .values()
        .filter(|&&s| s == QuestionStatus::Correct)
        .count();
    Summary { answered, correct }
}

/// Practice-view filter over a unit's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Incorrect,
    Unattempted,
}

impl StatusFilter {
    pub fn matches(self, status: QuestionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Incorrect => status == QuestionStatus::Incorrect,
            Self::Unattempted => status == QuestionStatus::Unattempted,
        }
    }
}

/// Question indices in a unit whose current status passes the filter.
pub fn matching_questions(unit: &ProjectUnit, map: &StatusMap, filter: StatusFilter) -> Vec<u32> {
    (1..=unit.count)
        .filter(|&index| {
            let key = QuestionKey::new(unit.id.clone(), index);
            filter.matches(crate::resolver::status_of(map, &key))
        })
        .collect()
}
