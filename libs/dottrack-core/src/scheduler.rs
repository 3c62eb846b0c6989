//! Review scheduling policy.
//!
//! A deliberately simple forgetting-curve heuristic, not a full spaced
//! repetition system: only incorrect answers are scheduled, and repeated
//! failure keeps the question surfacing daily instead of growing the
//! interval.

use crate::dates::add_days;
use crate::types::{QuestionStatus, ReviewItem};
use chrono::NaiveDate;

/// Interval for a question missed while not pending review.
pub const FIRST_MISS_INTERVAL_DAYS: i64 = 2;

/// Interval for a question missed again while already pending review.
pub const REPEAT_MISS_INTERVAL_DAYS: i64 = 1;

/// Scheduling outcome before question identity is stamped on.
///
/// The scheduler never inspects project or unit identifiers; the caller
/// attaches them when building the stored [`ReviewItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSchedule {
    pub due_date: NaiveDate,
    pub interval: i64,
    pub last_review_date: NaiveDate,
}

/// Compute the next review for a question that just changed status.
///
/// * `Correct` answers come off the schedule: the caller removes any
///   existing entry for the question.
/// * `Incorrect` answers are scheduled: 2 days out on the first miss,
///   reset to 1 day when the question was already pending review.
/// * `Unattempted` resets are handled by the caller, which clears the
///   entry without consulting the scheduler.
pub fn next_review(
    status: QuestionStatus,
    previous: Option<&ReviewItem>,
    today: NaiveDate,
) -> Option<ReviewSchedule> {
    match status {
        QuestionStatus::Correct | QuestionStatus::Unattempted => None,
        QuestionStatus::Incorrect => {
            let interval = if previous.is_some() {
                REPEAT_MISS_INTERVAL_DAYS
            } else {
                FIRST_MISS_INTERVAL_DAYS
            };
            Some(ReviewSchedule {
                due_date: add_days(today, interval),
                interval,
                last_review_date: today,
            })
        }
    }
}
