//! Mathematical utilities: decimal digit manipulation and exact products.

pub mod digits;
pub mod rational;

pub use digits::*;
pub use rational::*;
