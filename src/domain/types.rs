//! Shared domain types.
//!
//! These are plain values: computed once per run, never mutated, and
//! serializable so the JSON report can emit them directly.

use clap::ValueEnum;
use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

/// A numerator/denominator pair, not necessarily in lowest terms.
///
/// Either part may be zero when the pair is the result of cancelling a digit
/// (e.g. `20` with its `2` removed leaves `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Value equality by cross-multiplication.
    pub fn value_eq(&self, other: &Fraction) -> bool {
        u64::from(self.numerator) * u64::from(other.denominator)
            == u64::from(other.numerator) * u64::from(self.denominator)
    }

    /// Exact rational value. Returns `None` for a zero denominator.
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.denominator == 0 {
            return None;
        }
        Some(BigRational::new(
            BigInt::from(self.numerator),
            BigInt::from(self.denominator),
        ))
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

/// A two-digit fraction that survives digit cancelling with its value intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuriousPair {
    #[serde(flatten)]
    pub fraction: Fraction,
    /// The decimal digit removed from both parts.
    pub cancelled_digit: u8,
    /// What is left after removing `cancelled_digit` from each part.
    pub reduced: Fraction,
}

impl CuriousPair {
    pub fn numerator(&self) -> u32 {
        self.fraction.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.fraction.denominator
    }

    /// Re-derive the reduced pair from the cancelled digit and re-check it.
    pub fn verify(&self) -> bool {
        let digit = self.cancelled_digit;
        let n = crate::math::remove_first_digit(self.numerator(), digit);
        let d = crate::math::remove_first_digit(self.denominator(), digit);
        match (n, d) {
            (Some(n), Some(d)) => {
                let reduced = Fraction::new(n, d);
                reduced == self.reduced && reduced.value_eq(&self.fraction)
            }
            _ => false,
        }
    }
}

/// Exact product of a set of fractions, always in lowest terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    value: BigRational,
}

impl Product {
    pub fn new(value: BigRational) -> Self {
        Self {
            value: value.reduced(),
        }
    }

    pub fn value(&self) -> &BigRational {
        &self.value
    }

    pub fn numerator(&self) -> &BigInt {
        self.value.numer()
    }

    /// Denominator of the reduced product.
    pub fn denominator(&self) -> &BigInt {
        self.value.denom()
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Per-run settings assembled from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub format: OutputFormat,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}
