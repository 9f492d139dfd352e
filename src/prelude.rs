//! Prelude for dense_matrix
//!
//! Re-exports the matrix type, its error types and comparison configuration.

pub use crate::numerics::config::ComparisonConfig;
pub use crate::numerics::types::error::{ConfigError, MatrixError};
pub use crate::numerics::types::matrix::Matrix;
