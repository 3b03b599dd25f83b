//! Least-squares estimation.

mod ols;

pub use ols::fit;
