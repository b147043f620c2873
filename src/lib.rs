//! Work-rules engine for BC longshore workers.
//!
//! This crate turns a calendar date, a table of statutory holidays, and a log
//! of worked shifts into three derived judgments: statutory holiday pay
//! qualification under the 28-day rolling window, progress toward the
//! half-year average-hours target used for board moves, and an estimated tax
//! burden projected from partial-year earnings.

#![warn(missing_docs)]

pub mod accrual;
pub mod calendar;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod store;
pub mod tax;
