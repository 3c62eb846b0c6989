//! The pending review queue.

use crate::types::{QuestionKey, ReviewItem};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Pending review entries, at most one per question.
///
/// Keying by [`QuestionKey`] makes duplicate entries unrepresentable; the
/// original list-shaped storage format is accepted on load and reproduced
/// on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewQueue {
    items: BTreeMap<QuestionKey, ReviewItem>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from stored entries. If a key appears more than once,
    /// the later record wins.
    pub fn from_items(items: Vec<ReviewItem>) -> Self {
        Self {
            items: items.into_iter().map(|r| (r.key(), r)).collect(),
        }
    }

    /// Entries in key order, for persistence.
    pub fn to_vec(&self) -> Vec<ReviewItem> {
        self.items.values().cloned().collect()
    }

    pub fn get(&self, key: &QuestionKey) -> Option<&ReviewItem> {
        self.items.get(key)
    }

    pub fn remove(&mut self, key: &QuestionKey) -> Option<ReviewItem> {
        self.items.remove(key)
    }

    /// Replace the entry for a question: the previous entry (if any) is
    /// dropped, then the new one (if any) is inserted. Callers never observe
    /// a state holding both.
    pub fn apply(&mut self, key: &QuestionKey, next: Option<ReviewItem>) {
        self.items.remove(key);
        if let Some(item) = next {
            self.items.insert(item.key(), item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReviewItem> {
        self.items.values()
    }

    /// Entries due on or before `today`, most overdue first.
    ///
    /// A pure projection recomputed on every call.
    pub fn due_on(&self, today: NaiveDate) -> Vec<ReviewItem> {
        let mut due: Vec<ReviewItem> = self
            .items
            .values()
            .filter(|r| r.due_date <= today)
            .cloned()
            .collect();
        due.sort_by_key(|r| r.due_date);
        due
    }
}
