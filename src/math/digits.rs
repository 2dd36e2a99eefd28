//! Decimal digit helpers.
//!
//! Digit cancelling is a textual operation on the decimal rendering of a
//! number, so everything here works on the digit sequence most-significant
//! first, the way the number is written.

use std::collections::BTreeSet;

/// Decimal digits of `n`, most significant first.
pub fn decimal_digits(n: u32) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Distinct decimal digits of `n`, in ascending order.
pub fn digit_set(n: u32) -> BTreeSet<u8> {
    decimal_digits(n).into_iter().collect()
}

/// Digits shared by `a` and `b`, in ascending order.
pub fn common_digits(a: u32, b: u32) -> BTreeSet<u8> {
    digit_set(a).intersection(&digit_set(b)).copied().collect()
}

/// Remove the first occurrence of `digit` from `n` and read what is left as a number.
///
/// Returns `None` when `digit` does not occur in `n` or nothing is left.
/// A leading zero in the remainder is dropped (`105` without `1` is `5`).
pub fn remove_first_digit(n: u32, digit: u8) -> Option<u32> {
    let mut digits = decimal_digits(n);
    let pos = digits.iter().position(|&d| d == digit)?;
    digits.remove(pos);
    if digits.is_empty() {
        return None;
    }
    Some(digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d)))
}

/// Two-digit number written as `tens` followed by `ones`.
pub fn join_digits(tens: u8, ones: u8) -> u32 {
    u32::from(tens) * 10 + u32::from(ones)
}
