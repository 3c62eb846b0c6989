//! Owned-state orchestrator tying the log, scheduler, and queue together.

use crate::error::Result;
use crate::queue::ReviewQueue;
use crate::resolver::{self, StatusMap};
use crate::scheduler::{next_review, ReviewSchedule};
use crate::storage::Storage;
use crate::types::{Attempt, Project, QuestionKey, QuestionStatus, ReviewItem};
use chrono::Utc;
use tracing::debug;

/// Tracks one project's practice state.
///
/// Owns the append-only attempt log and the review queue, and pushes both
/// to the persistence collaborator synchronously after every mutation.
/// Current status is always derived from the log, never stored.
///
/// Persistence is best-effort: if a save fails the in-memory state has
/// already advanced and is not rolled back; the error is returned to the
/// caller.
pub struct Tracker<S: Storage> {
    project: Project,
    attempts: Vec<Attempt>,
    queue: ReviewQueue,
    storage: S,
}

impl<S: Storage> Tracker<S> {
    /// Load a project's state through the collaborator.
    pub fn open(project: Project, storage: S) -> Result<Self> {
        let attempts = storage.load_attempts()?;
        let queue = ReviewQueue::from_items(storage.load_reviews()?);
        Ok(Self {
            project,
            attempts,
            queue,
            storage,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn queue(&self) -> &ReviewQueue {
        &self.queue
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Current status of every attempted question, derived from the log.
    pub fn status_map(&self) -> StatusMap {
        resolver::resolve(&self.attempts)
    }

    /// Current status of one question.
    pub fn status_of(&self, key: &QuestionKey) -> QuestionStatus {
        resolver::status_of(&self.status_map(), key)
    }

    /// Review items due today or earlier, most overdue first.
    pub fn due_today(&self) -> Vec<ReviewItem> {
        self.queue.due_on(self.storage.today())
    }

    /// Advance a question through the practice cycle
    /// (unattempted -> correct -> incorrect -> unattempted) and return the
    /// new status.
    pub fn advance(&mut self, unit_id: &str, question_index: u32) -> Result<QuestionStatus> {
        let key = QuestionKey::new(unit_id, question_index);
        let next = self.status_of(&key).advanced();
        self.record(&key, next)?;
        Ok(next)
    }

    /// Re-affirm a pending review as still wrong: schedules it again
    /// through the normal incorrect path.
    pub fn mark_still_wrong(&mut self, key: &QuestionKey) -> Result<()> {
        self.record(key, QuestionStatus::Incorrect)
    }

    /// Force a question correct and drop its pending review. Safe to call
    /// repeatedly; the queue ends up without the entry either way.
    pub fn mark_resolved(&mut self, key: &QuestionKey) -> Result<()> {
        self.record(key, QuestionStatus::Correct)
    }

    /// Append one attempt, update the review queue, persist.
    fn record(&mut self, key: &QuestionKey, status: QuestionStatus) -> Result<()> {
        let today = self.storage.today();
        self.attempts.push(Attempt {
            project_id: self.project.id.clone(),
            unit_id: key.unit_id.clone(),
            question_index: key.question_index,
            status,
            timestamp: Utc::now().timestamp_millis(),
            date: today,
        });
        debug!(key = %key, status = ?status, "attempt recorded");

        // Resetting a question clears its review state entirely; the
        // scheduler is not consulted and no interval history survives.
        let next = match status {
            QuestionStatus::Unattempted => None,
            _ => next_review(status, self.queue.get(key), today)
                .map(|schedule| self.stamp(key, schedule)),
        };
        match &next {
            Some(item) => {
                debug!(key = %key, due = %item.due_date, interval = item.interval, "review scheduled")
            }
            None if self.queue.get(key).is_some() => {
                debug!(key = %key, "review cleared")
            }
            None => {}
        }
        self.queue.apply(key, next);

        self.persist()
    }

    /// Attach question identity to a scheduling outcome.
    fn stamp(&self, key: &QuestionKey, schedule: ReviewSchedule) -> ReviewItem {
        ReviewItem {
            project_id: self.project.id.clone(),
            unit_id: key.unit_id.clone(),
            question_index: key.question_index,
            due_date: schedule.due_date,
            interval: schedule.interval,
            last_review_date: schedule.last_review_date,
        }
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save_attempts(&self.attempts)?;
        self.storage.save_reviews(&self.queue.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tracker_on(day: &str) -> Tracker<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set_today(date(day));
        let project = Project::with_uniform_units("test", 2, 10);
        Tracker::open(project, storage).unwrap()
    }

    #[test]
    fn advance_cycles_through_all_states() {
        let mut tracker = tracker_on("2024-01-01");
        assert_eq!(tracker.advance("u1", 3).unwrap(), QuestionStatus::Correct);
        assert_eq!(tracker.advance("u1", 3).unwrap(), QuestionStatus::Incorrect);
        assert_eq!(
            tracker.advance("u1", 3).unwrap(),
            QuestionStatus::Unattempted
        );
        assert_eq!(tracker.attempts().len(), 3);
        assert!(tracker.queue().is_empty());
    }

    #[test]
    fn incorrect_answer_enters_review_queue() {
        let mut tracker = tracker_on("2024-01-01");
        tracker.advance("u1", 3).unwrap(); // correct
        tracker.advance("u1", 3).unwrap(); // incorrect
        let key = QuestionKey::new("u1", 3);
        let item = tracker.queue().get(&key).unwrap();
        assert_eq!(item.interval, 2);
        assert_eq!(item.due_date, date("2024-01-03"));
        assert_eq!(item.last_review_date, date("2024-01-01"));
        assert_eq!(item.project_id, tracker.project().id);
    }

    #[test]
    fn reset_clears_review_state() {
        let mut tracker = tracker_on("2024-01-01");
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect, scheduled
        assert_eq!(tracker.queue().len(), 1);
        tracker.advance("u1", 3).unwrap(); // back to unattempted
        assert!(tracker.queue().is_empty());
        assert_eq!(
            tracker.status_of(&QuestionKey::new("u1", 3)),
            QuestionStatus::Unattempted
        );
    }

    #[test]
    fn reset_forgets_interval_history() {
        let mut tracker = tracker_on("2024-01-01");
        let key = QuestionKey::new("u1", 3);
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect, interval 2
        tracker.mark_still_wrong(&key).unwrap(); // interval resets to 1
        assert_eq!(tracker.queue().get(&key).unwrap().interval, 1);
        tracker.advance("u1", 3).unwrap(); // reset to unattempted

        // A fresh miss schedules like a first miss again.
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap();
        assert_eq!(tracker.queue().get(&key).unwrap().interval, 2);
    }

    #[test]
    fn still_wrong_keeps_one_entry_and_resets_interval() {
        let mut tracker = tracker_on("2024-01-01");
        let key = QuestionKey::new("u1", 3);
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect
        tracker.storage_mut().set_today(date("2024-01-03"));
        tracker.mark_still_wrong(&key).unwrap();
        assert_eq!(tracker.queue().len(), 1);
        let item = tracker.queue().get(&key).unwrap();
        assert_eq!(item.interval, 1);
        assert_eq!(item.due_date, date("2024-01-04"));
    }

    #[test]
    fn mark_resolved_is_idempotent_for_the_queue() {
        let mut tracker = tracker_on("2024-01-01");
        let key = QuestionKey::new("u1", 3);
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect
        tracker.mark_resolved(&key).unwrap();
        assert!(tracker.queue().is_empty());
        assert_eq!(tracker.status_of(&key), QuestionStatus::Correct);

        tracker.mark_resolved(&key).unwrap();
        assert!(tracker.queue().is_empty());
        assert_eq!(tracker.status_of(&key), QuestionStatus::Correct);
    }

    #[test]
    fn mutations_persist_through_the_collaborator() {
        let mut tracker = tracker_on("2024-01-01");
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect
        assert_eq!(tracker.storage().attempts().len(), 2);
        assert_eq!(tracker.storage().reviews().len(), 1);
    }

    #[test]
    fn reopen_restores_state_from_storage() {
        let mut tracker = tracker_on("2024-01-01");
        let project = tracker.project().clone();
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect

        let storage = tracker.storage().clone();
        let reopened = Tracker::open(project, storage).unwrap();
        assert_eq!(reopened.attempts().len(), 2);
        assert_eq!(reopened.queue().len(), 1);
        assert_eq!(
            reopened.status_of(&QuestionKey::new("u1", 3)),
            QuestionStatus::Incorrect
        );
    }

    #[test]
    fn due_today_uses_collaborator_clock() {
        let mut tracker = tracker_on("2024-01-01");
        tracker.advance("u1", 3).unwrap();
        tracker.advance("u1", 3).unwrap(); // incorrect, due 2024-01-03
        assert!(tracker.due_today().is_empty());
        tracker.storage_mut().set_today(date("2024-01-03"));
        assert_eq!(tracker.due_today().len(), 1);
    }
}
