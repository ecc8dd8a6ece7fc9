//! Copy Status State
//!
//! The transient status shown on the copy button ("Copied!" / "Failed to
//! copy!") and its automatic revert. State changes go through a small
//! reducer; the revert is a single optional deadline, so a copy issued
//! while a status is still showing pushes the deadline back instead of
//! scheduling a second revert.

use std::time::{Duration, Instant};

/// Default time a copy result stays visible
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(2000);

/// What the copy button currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CopyStatus {
    /// Waiting for the user to copy
    #[default]
    Idle,
    /// Last copy reached the clipboard
    Copied,
    /// Last copy was rejected, with the reason
    Failed(String),
}

impl CopyStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, CopyStatus::Failed(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, CopyStatus::Idle)
    }
}

/// Events driving the copy status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    Succeeded,
    Failed(String),
}

/// Button captions for each status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLabels {
    pub idle: String,
    pub success: String,
    pub failure: String,
}

impl Default for CopyLabels {
    fn default() -> Self {
        Self {
            idle: "Copy text as Discord formatted".to_string(),
            success: "Copied!".to_string(),
            failure: "Failed to copy!".to_string(),
        }
    }
}

/// Copy status with its single-slot revert deadline
#[derive(Debug, Clone)]
pub struct CopyStatusStore {
    status: CopyStatus,
    revert_at: Option<Instant>,
    duration: Duration,
}

impl CopyStatusStore {
    pub fn new(duration: Duration) -> Self {
        Self {
            status: CopyStatus::Idle,
            revert_at: None,
            duration,
        }
    }

    pub fn status(&self) -> &CopyStatus {
        &self.status
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Pending revert deadline, if a status is showing
    pub fn revert_at(&self) -> Option<Instant> {
        self.revert_at
    }

    /// Apply an event at time `now`
    ///
    /// Any earlier deadline is replaced by `now + duration`.
    pub fn dispatch(&mut self, event: CopyEvent, now: Instant) {
        self.status = match event {
            CopyEvent::Succeeded => CopyStatus::Copied,
            CopyEvent::Failed(reason) => CopyStatus::Failed(reason),
        };
        self.revert_at = Some(now + self.duration);
    }

    /// Revert to idle once the deadline has passed
    ///
    /// Returns true when this call performed the revert.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.status = CopyStatus::Idle;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the revert, if one is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.revert_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Caption for the current status
    pub fn label<'a>(&self, labels: &'a CopyLabels) -> &'a str {
        match self.status {
            CopyStatus::Idle => &labels.idle,
            CopyStatus::Copied => &labels.success,
            CopyStatus::Failed(_) => &labels.failure,
        }
    }
}

impl Default for CopyStatusStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION)
    }
}
