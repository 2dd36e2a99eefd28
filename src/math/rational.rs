//! Exact rational products.
//!
//! Everything is kept in `BigRational`, which reduces by the gcd after every
//! operation, so the product never touches floating point.

use num_rational::BigRational;
use num_traits::One;

use crate::domain::{Fraction, Product};

/// Multiply `fractions` together exactly.
///
/// Returns `None` for an empty input or if any denominator is zero.
pub fn product_of<'a, I>(fractions: I) -> Option<Product>
where
    I: IntoIterator<Item = &'a Fraction>,
{
    let mut iter = fractions.into_iter().peekable();
    iter.peek()?;

    let mut acc = BigRational::one();
    for f in iter {
        acc *= f.to_rational()?;
    }
    Some(Product::new(acc))
}
