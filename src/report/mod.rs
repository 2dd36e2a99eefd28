//! Reporting: the serializable report value and its text/JSON renderings.

use serde::Serialize;

use crate::domain::{CuriousPair, Product};

pub mod format;

pub use format::*;

/// JSON shape of a finished run.
///
/// Product values are unbounded integers, so they are written as decimal strings.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFile {
    pub fractions: Vec<CuriousPair>,
    pub product: String,
    pub denominator: String,
}

impl ReportFile {
    pub fn new(pairs: &[CuriousPair], product: &Product) -> Self {
        Self {
            fractions: pairs.to_vec(),
            product: product.to_string(),
            denominator: product.denominator().to_string(),
        }
    }
}
