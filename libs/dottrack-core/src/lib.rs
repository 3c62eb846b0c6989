//! Core practice-tracking library for DotTrack.
//!
//! Provides:
//! - Append-only attempt log with derived per-question status
//! - Spaced review scheduling for incorrectly answered questions
//! - Review queue maintenance and due-today selection
//! - Per-day and overall practice statistics
//! - Persistence collaborator contract (storage stays outside the core)

pub mod dates;
pub mod error;
pub mod queue;
pub mod resolver;
pub mod scheduler;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod types;

pub use error::{Result, StorageError};
pub use queue::ReviewQueue;
pub use resolver::{resolve, status_of, StatusMap};
pub use scheduler::{
    next_review, ReviewSchedule, FIRST_MISS_INTERVAL_DAYS, REPEAT_MISS_INTERVAL_DAYS,
};
pub use stats::{day_stats, matching_questions, stats_for_day, summarize, DayStats, StatusFilter, Summary};
pub use storage::{MemoryStorage, Storage};
pub use tracker::Tracker;
pub use types::{Attempt, Project, ProjectUnit, QuestionKey, QuestionStatus, ReviewItem};
