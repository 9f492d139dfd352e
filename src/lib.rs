//! # dense-matrix
//!
//! A dense, row-major matrix of `f64` values with bounds-checked element access
//! and dimension-validated addition, subtraction and multiplication.
//!
//! Every fallible operation returns a [`MatrixError`] instead of panicking, and
//! leaves its operands untouched on failure.
//!
//! ```rust
//! use dense_matrix::prelude::*;
//!
//! # fn main() -> Result<(), MatrixError> {
//! let mut a = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]])?;
//! let b = Matrix::from_grid(&[[5.0, 6.0], [7.0, 8.0]])?;
//!
//! let product = a.multiply(&b)?;
//! assert_eq!(product.to_grid(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//!
//! a.add(&b)?;
//! assert_eq!(a.to_grid(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
//!
//! // Shapes are checked before anything is touched.
//! let wide = Matrix::new(2, 3)?;
//! assert!(matches!(wide.multiply(&wide), Err(MatrixError::DimensionMismatch { .. })));
//! # Ok(())
//! # }
//! ```

pub mod numerics;
pub mod prelude;

pub use numerics::config::{parse_parameters, ComparisonConfig};
pub use numerics::types::error::{ConfigError, MatrixError, Result, Shape};
pub use numerics::types::matrix::Matrix;
