//! Worked-shift entry model.
//!
//! Shift entries are owned by the external entry store; the engine only
//! reads aggregates over date ranges. The type is defined here so the
//! in-memory store and tests can materialize a shift log.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

/// The shift board a worked entry was dispatched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// Day shift.
    Day,
    /// Afternoon shift.
    Afternoon,
    /// Graveyard shift.
    Graveyard,
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftCategory::Day => write!(f, "day"),
            ShiftCategory::Afternoon => write!(f, "afternoon"),
            ShiftCategory::Graveyard => write!(f, "graveyard"),
        }
    }
}

/// A single logged shift.
///
/// Hours are decimal and non-negative; earnings are optional because a shift
/// may be logged before the paystub arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// The calendar date the shift was worked.
    pub date: NaiveDate,
    /// The shift board.
    pub category: ShiftCategory,
    /// Hours worked (decimal, >= 0).
    pub hours: Decimal,
    /// Earnings for the shift, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<Decimal>,
}
