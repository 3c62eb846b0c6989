//! Derives current per-question status from the attempt log.

use crate::types::{Attempt, QuestionKey, QuestionStatus};
use std::collections::HashMap;

/// Current status per question, keyed by question identity.
pub type StatusMap = HashMap<QuestionKey, QuestionStatus>;

/// Fold the attempt log into the current status of every question.
///
/// Attempts are ordered by ascending timestamp (stable, so ties resolve in
/// log order) and applied left to right; the last write per key wins. The
/// result depends only on timestamps, not on the order attempts are passed
/// in. Questions with no attempts are absent from the map.
pub fn resolve(attempts: &[Attempt]) -> StatusMap {
    let mut ordered: Vec<&Attempt> = attempts.iter().collect();
    ordered.sort_by_key(|a| a.timestamp);

    let mut map = StatusMap::new();
    for attempt in ordered {
        map.insert(attempt.key(), attempt.status);
    }
    map
}

/// Status of a single question; absent means unattempted.
pub fn status_of(map: &StatusMap, key: &QuestionKey) -> QuestionStatus {
    map.get(key).copied().unwrap_or_default()
}
