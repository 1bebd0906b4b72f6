//! Injectable wall-clock abstraction.
//!
//! The time tool is the only place in the crate that reads ambient state; it
//! goes through [`Clock`] so tests can pin the instant and stay deterministic.

use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
///
/// **Interaction**: [`TimeTool`](crate::tools::TimeTool) holds an
/// `Arc<dyn Clock>`; production code uses [`SystemClock`], tests use
/// [`FixedClock`].
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real clock: reads `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests: always returns the instant given at construction.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
