//! Rule-based fraud screening for free-text job postings.
//!
//! [`analysis`] holds the deterministic scoring pipeline, [`company`] the reputation lookup
//! used as secondary evidence, and [`api`] the HTTP surface that exposes both.

pub mod analysis;
pub mod api;
pub mod company;
pub mod config;
pub mod error;
pub mod telemetry;
