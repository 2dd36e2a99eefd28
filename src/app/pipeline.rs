//! The search pipeline: enumerate -> multiply -> reduce.
//!
//! Kept separate from `app::run` so the whole computation can be tested
//! without touching stdout or the global logger.

use tracing::info;

use crate::domain::{CuriousPair, Fraction, Product};
use crate::error::AppError;
use crate::math::product_of;
use crate::search::find_curious_fractions;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Ordered by denominator, then numerator.
    pub pairs: Vec<CuriousPair>,
    pub product: Product,
}

impl RunOutput {
    /// Fractions as plain numerator/denominator pairs.
    pub fn fractions(&self) -> Vec<Fraction> {
        self.pairs.iter().map(|p| p.fraction).collect()
    }
}

/// Run the full search and compute the reduced product.
pub fn run_search() -> Result<RunOutput, AppError> {
    let pairs = find_curious_fractions()?;

    let fractions: Vec<Fraction> = pairs.iter().map(|p| p.fraction).collect();
    let product = product_of(&fractions)
        .ok_or_else(|| AppError::new(3, "No curious fractions found; the product is undefined."))?;

    info!(%product, denominator = %product.denominator(), "reduced product");

    Ok(RunOutput { pairs, product })
}
