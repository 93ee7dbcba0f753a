//! Position and applicant tracking core.
//!
//! The [`tracker`] module owns the record stores and the rules that keep them
//! consistent. Everything else in this crate (configuration, telemetry, JSON
//! storage) is plumbing that feeds data into, or reads data out of, a
//! [`tracker::TrackerModel`].

pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;
pub mod tracker;
