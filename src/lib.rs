//! `curious-fractions` library crate.
//!
//! The binary (`curious`) is a thin wrapper around this library so the search,
//! the product and the report formatting are testable without spawning a process.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod math;
pub mod report;
pub mod search;
