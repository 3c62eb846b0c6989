//! Persistence collaborator contract.

use crate::dates;
use crate::error::Result;
use crate::types::{Attempt, ReviewItem};
use chrono::NaiveDate;

/// Read/write contract between the core and whatever persists its state.
///
/// Implementations own serialization and durability. Corrupt or missing
/// records are their burden to absorb: a load that cannot be decoded should
/// return empty collections rather than an error where recovery is
/// possible, and the core tolerates starting from empty.
pub trait Storage {
    fn load_attempts(&self) -> Result<Vec<Attempt>>;
    fn save_attempts(&mut self, attempts: &[Attempt]) -> Result<()>;
    fn load_reviews(&self) -> Result<Vec<ReviewItem>>;
    fn save_reviews(&mut self, reviews: &[ReviewItem]) -> Result<()>;

    /// Today's calendar date in the project's local zone.
    fn today(&self) -> NaiveDate {
        dates::today_local()
    }
}

/// In-memory storage: no durability, never fails.
///
/// Used by tests and by embedders that handle persistence elsewhere. The
/// clock can be pinned for deterministic scheduling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    attempts: Vec<Attempt>,
    reviews: Vec<ReviewItem>,
    today: Option<NaiveDate>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `today()` to a fixed date.
    pub fn set_today(&mut self, date: NaiveDate) {
        self.today = Some(date);
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn reviews(&self) -> &[ReviewItem] {
        &self.reviews
    }
}

impl Storage for MemoryStorage {
    fn load_attempts(&self) -> Result<Vec<Attempt>> {
        Ok(self.attempts.clone())
    }

    fn save_attempts(&mut self, attempts: &[Attempt]) -> Result<()> {
        self.attempts = attempts.to_vec();
        Ok(())
    }

    fn load_reviews(&self) -> Result<Vec<ReviewItem>> {
        Ok(self.reviews.clone())
    }

    fn save_reviews(&mut self, reviews: &[ReviewItem]) -> Result<()> {
        self.reviews = reviews.to_vec();
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(dates::today_local)
    }
}
