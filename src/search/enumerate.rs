//! Candidate generation over the two-digit domain.
//!
//! Rather than testing all ordered pairs, each denominator only gets numerators
//! built around one of its non-zero digits: "c g" and "g c" for every digit `g`
//! in 1–9. Pairs whose only shared digit is `0` are never generated, even though
//! the predicate would accept `0` as a cancelling digit.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::domain::CuriousPair;
use crate::error::InvalidArgument;
use crate::math::{digit_set, join_digits};
use crate::search::predicate::{DENOMINATOR_RANGE, find_cancellation};

/// Numerators worth testing against `denominator`, ascending and all `< denominator`.
pub fn candidate_numerators(denominator: u32) -> BTreeSet<u32> {
    let mut out = BTreeSet::new();
    for c in digit_set(denominator).into_iter().filter(|&c| c != 0) {
        for g in 1..=9 {
            out.insert(join_digits(c, g));
            out.insert(join_digits(g, c));
        }
    }
    out.retain(|&n| n < denominator);
    out
}

/// Every curious fraction reachable by the candidate search.
///
/// The result is ordered by denominator, then numerator.
pub fn find_curious_fractions() -> Result<Vec<CuriousPair>, InvalidArgument> {
    // Keyed by (denominator, numerator) for the output order.
    let mut found: BTreeMap<(u32, u32), CuriousPair> = BTreeMap::new();
    let mut tested = 0usize;

    for denominator in DENOMINATOR_RANGE {
        for numerator in candidate_numerators(denominator) {
            tested += 1;
            if let Some(pair) = find_cancellation(numerator, denominator)? {
                debug!(
                    numerator,
                    denominator,
                    digit = pair.cancelled_digit,
                    "found curious fraction"
                );
                found.insert((denominator, numerator), pair);
            }
        }
    }

    info!(tested, found = found.len(), "candidate search complete");
    Ok(found.into_values().collect())
}
