//! The digit-cancelling test for a single fraction.
//!
//! A fraction `n/d` is curious when some decimal digit occurs in both parts and
//! deleting its first occurrence from each leaves a fraction of the same value.
//! Cases like 30/50 pass too; nothing here filters "trivial" cancellations.

use tracing::trace;

use crate::domain::{CuriousPair, Fraction};
use crate::error::InvalidArgument;
use crate::math::{common_digits, remove_first_digit};

pub const NUMERATOR_RANGE: std::ops::RangeInclusive<u32> = 10..=99;
pub const DENOMINATOR_RANGE: std::ops::RangeInclusive<u32> = 11..=99;

/// Check the two-digit, proper-fraction preconditions.
pub fn check_arguments(numerator: u32, denominator: u32) -> Result<(), InvalidArgument> {
    if !NUMERATOR_RANGE.contains(&numerator) {
        return Err(InvalidArgument::NumeratorOutOfRange { numerator });
    }
    if !DENOMINATOR_RANGE.contains(&denominator) {
        return Err(InvalidArgument::DenominatorOutOfRange { denominator });
    }
    if numerator >= denominator {
        return Err(InvalidArgument::NotProperFraction {
            numerator,
            denominator,
        });
    }
    Ok(())
}

/// Return the first cancellation (by ascending digit) that preserves the value.
pub fn find_cancellation(
    numerator: u32,
    denominator: u32,
) -> Result<Option<CuriousPair>, InvalidArgument> {
    check_arguments(numerator, denominator)?;
    let fraction = Fraction::new(numerator, denominator);

    for digit in common_digits(numerator, denominator) {
        // Both lookups succeed: `digit` came from each number's own digits.
        let (Some(n), Some(d)) = (
            remove_first_digit(numerator, digit),
            remove_first_digit(denominator, digit),
        ) else {
            continue;
        };

        let reduced = Fraction::new(n, d);
        trace!(%fraction, digit, %reduced, "cancel");
        if reduced.value_eq(&fraction) {
            return Ok(Some(CuriousPair {
                fraction,
                cancelled_digit: digit,
                reduced,
            }));
        }
    }

    Ok(None)
}

/// `true` iff `numerator/denominator` is a curious fraction.
///
/// # Errors
/// `InvalidArgument` if the numerator is outside `10..=99`, the denominator is
/// outside `11..=99`, or the numerator is not less than the denominator.
pub fn is_curious(numerator: u32, denominator: u32) -> Result<bool, InvalidArgument> {
    Ok(find_cancellation(numerator, denominator)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_nine_ninety_eighths_is_curious() {
        assert_eq!(is_curious(49, 98), Ok(true));
        let pair = find_cancellation(49, 98).unwrap().unwrap();
        assert_eq!(pair.cancelled_digit, 9);
        assert_eq!(pair.reduced, Fraction::new(4, 8));
    }

    #[test]
    fn trailing_zero_case_is_not_filtered() {
        assert_eq!(is_curious(30, 50), Ok(true));
        let pair = find_cancellation(30, 50).unwrap().unwrap();
        assert_eq!(pair.cancelled_digit, 0);
        assert_eq!(pair.reduced, Fraction::new(3, 5));
    }

    #[test]
    fn no_shared_digits_is_not_curious() {
        assert_eq!(is_curious(12, 34), Ok(false));
    }

    #[test]
    fn shared_digit_with_different_value_is_not_curious() {
        // 12/14 -> cancel 1 -> 2/4
        assert_eq!(is_curious(12, 14), Ok(false));
    }

    #[test]
    fn zero_remainder_is_handled() {
        // 12/20 -> cancel 2 -> 1/0; compares unequal without dividing.
        assert_eq!(is_curious(12, 20), Ok(false));
        // 10/20 -> cancel 0 -> 1/2
        assert_eq!(is_curious(10, 20), Ok(true));
    }

    #[test]
    fn predicate_is_deterministic() {
        for d in DENOMINATOR_RANGE {
            for n in NUMERATOR_RANGE.filter(|&n| n < d) {
                let first = is_curious(n, d).unwrap();
                let second = is_curious(n, d).unwrap();
                assert_eq!(first, second, "{n}/{d}");
            }
        }
    }

    #[test]
    fn out_of_range_arguments_fail_fast() {
        assert_eq!(
            is_curious(9, 50),
            Err(InvalidArgument::NumeratorOutOfRange { numerator: 9 })
        );
        assert_eq!(
            is_curious(10, 100),
            Err(InvalidArgument::DenominatorOutOfRange { denominator: 100 })
        );
        assert_eq!(
            is_curious(50, 30),
            Err(InvalidArgument::NotProperFraction {
                numerator: 50,
                denominator: 30
            })
        );
        assert_eq!(
            is_curious(44, 44),
            Err(InvalidArgument::NotProperFraction {
                numerator: 44,
                denominator: 44
            })
        );
    }
}
