//! Completion statistics domain rules: reporting periods and their
//! time windows.
//!
//! Pure logic. The caller fetches rows from the DB and supplies `now`;
//! nothing here reads the clock.

use chrono::Duration;

use crate::types::Timestamp;

/// Reporting window for grouped completion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// No lower bound.
    All,
}

impl StatsPeriod {
    /// Canonical string form, echoed back in stats responses.
    pub fn as_str(self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
            StatsPeriod::All => "all",
        }
    }

    /// Parse a query-string period value.
    ///
    /// Unrecognized values fall back to `All`. The permissive default is
    /// the documented contract (same policy as invalid sort parameters),
    /// not an error.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "week" => StatsPeriod::Week,
            "month" => StatsPeriod::Month,
            _ => StatsPeriod::All,
        }
    }

    /// Inclusive lower bound of the window ending at `now`, or `None`
    /// when the period is unbounded.
    pub fn window_start(self, now: Timestamp) -> Option<Timestamp> {
        match self {
            StatsPeriod::Week => Some(now - Duration::days(7)),
            StatsPeriod::Month => Some(now - Duration::days(30)),
            StatsPeriod::All => None,
        }
    }
}
