//! Curious-fraction search: the per-fraction predicate and the candidate enumeration.

pub mod enumerate;
pub mod predicate;

pub use enumerate::{candidate_numerators, find_curious_fractions};
pub use predicate::{find_cancellation, is_curious};
