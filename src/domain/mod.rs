//! Domain types used throughout the search.
//!
//! This module defines:
//!
//! - fractions and the curious pairs found by the search (`Fraction`, `CuriousPair`)
//! - the exact product of those pairs (`Product`)
//! - run configuration (`RunConfig`, `OutputFormat`)

pub mod types;

pub use types::*;
