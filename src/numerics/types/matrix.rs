// src/numerics/types/matrix.rs
// Dense row-major matrix of f64 values with dimension-checked arithmetic.

use std::fmt;
use std::slice::Chunks;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::numerics::config::ComparisonConfig;
use crate::numerics::types::error::{MatrixError, Result, Shape};

// A Vec<f64> holds at most isize::MAX bytes.
const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// A fixed-size two-dimensional matrix of `f64` values.
///
/// Elements are stored row-major. Both dimensions are at least one for the
/// lifetime of the value, and every `(row, column)` with `row < rows` and
/// `column < columns` addresses exactly one element.
///
/// # Examples
///
/// ```
/// use dense_matrix::Matrix;
///
/// let mut a = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_grid(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
///
/// let product = a.multiply(&b).unwrap();
/// assert_eq!(product.get(1, 1).unwrap(), 50.0);
///
/// a.add(&b).unwrap();
/// assert_eq!(a.get(0, 0).unwrap(), 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

// Construction
impl Matrix {
    /// Create a `rows` x `columns` matrix with every element set to `0.0`.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when either dimension is zero or the
    /// element count does not fit in memory.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = check_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: vec![0.0; len],
        })
    }

    /// Create a matrix by copying a rectangular grid of rows.
    ///
    /// Any row type that can be viewed as `&[f64]` works: arrays, vectors or
    /// slices. The matrix owns its own copy; later changes to `grid` are not
    /// observed.
    ///
    /// # Errors
    /// * [`MatrixError::NullInput`] when the grid has no rows.
    /// * [`MatrixError::InvalidDimension`] when the rows are empty or differ in length.
    pub fn from_grid<R: AsRef<[f64]>>(grid: &[R]) -> Result<Self> {
        let Some(first) = grid.first() else {
            debug!("rejected grid with no rows");
            return Err(MatrixError::NullInput { operand: "grid" });
        };

        let rows = grid.len();
        let columns = first.as_ref().len();
        let len = check_dimensions(rows, columns)?;

        let mut data = Vec::with_capacity(len);
        for (index, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                debug!(row = index, expected = columns, actual = row.len(), "rejected ragged grid");
                return Err(MatrixError::InvalidDimension(format!(
                    "row {} has {} columns, expected {}",
                    index,
                    row.len(),
                    columns
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { rows, columns, data })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// [`MatrixError::InvalidDimension`] when a dimension is zero or
    /// `data.len() != rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dimensions(rows, columns)?;
        if data.len() != len {
            debug!(rows, columns, len = data.len(), "rejected data length");
            return Err(MatrixError::InvalidDimension(format!(
                "{}x{} matrix needs {} values, got {}",
                rows,
                columns,
                len,
                data.len()
            )));
        }
        Ok(Self { rows, columns, data })
    }

    /// The `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        matrix.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(matrix)
    }
}

// Shape and element access
impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the shape as `(rows, columns)`.
    pub fn shape(&self) -> Shape {
        (self.rows, self.columns)
    }

    /// Read the element at `(row, column)`.
    ///
    /// # Errors
    /// [`MatrixError::IndexOutOfRange`] unless `row < rows` and `column < columns`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        let offset = self.offset(row, column)?;
        Ok(self.data[offset])
    }

    /// Overwrite the element at `(row, column)`. Out-of-range writes leave the
    /// matrix untouched.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        let offset = self.offset(row, column)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        self.offset(row, 0)?;
        let start = row * self.columns;
        Ok(self.data[start..start + self.columns].to_vec())
    }

    /// Copy of column `column`.
    pub fn column(&self, column: usize) -> Result<Vec<f64>> {
        self.offset(0, column)?;
        Ok(self.iter_rows().map(|row| row[column]).collect())
    }

    /// Iterator over the rows, each a contiguous slice of `columns` values.
    pub fn iter_rows(&self) -> Chunks<'_, f64> {
        self.data.chunks(self.columns)
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Deep copy of the elements as a grid of rows.
    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            debug!(row, column, rows = self.rows, columns = self.columns, "index out of range");
            return Err(MatrixError::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }
}

// Arithmetic
impl Matrix {
    /// Add `other` to this matrix element by element, in place.
    ///
    /// Accepts `&Matrix` or `Option<&Matrix>`; `other` is never modified.
    ///
    /// # Errors
    /// * [`MatrixError::NullInput`] when `other` is `None`.
    /// * [`MatrixError::DimensionMismatch`] when the shapes differ.
    ///
    /// On error this matrix is unchanged.
    pub fn add<'a>(&mut self, other: impl Into<Option<&'a Matrix>>) -> Result<()> {
        self.combine("add", other.into(), |a, b| *a += b)
    }

    /// Subtract `other` from this matrix element by element, in place.
    ///
    /// Same contract as [`Matrix::add`].
    pub fn subtract<'a>(&mut self, other: impl Into<Option<&'a Matrix>>) -> Result<()> {
        self.combine("subtract", other.into(), |a, b| *a -= b)
    }

    /// Matrix product `self * other` as a new matrix of shape
    /// `(self.rows, other.columns)`. Neither operand is modified.
    ///
    /// Each element is accumulated from `0.0` over the inner dimension in
    /// ascending order, so results are reproducible bit for bit.
    ///
    /// # Errors
    /// * [`MatrixError::NullInput`] when `other` is `None`.
    /// * [`MatrixError::DimensionMismatch`] when `self.columns != other.rows`.
    pub fn multiply<'a>(&self, other: impl Into<Option<&'a Matrix>>) -> Result<Matrix> {
        let other = require_operand("multiply", other.into())?;
        if self.columns != other.rows {
            return Err(self.mismatch("multiply", other));
        }

        let (rows, inner, columns) = (self.rows, self.columns, other.columns);
        let mut data = vec![0.0; check_dimensions(rows, columns)?];
        for i in 0..rows {
            for j in 0..columns {
                let mut sum = 0.0;
                for k in 0..inner {
                    sum += self.data[i * inner + k] * other.data[k * columns + j];
                }
                data[i * columns + j] = sum;
            }
        }

        trace!(left = ?self.shape(), right = ?other.shape(), "multiplied matrices");
        Ok(Self { rows, columns, data })
    }

    /// Whether `other` has the same shape and every element pair is equal
    /// under `config`.
    pub fn approx_eq(&self, other: &Matrix, config: &ComparisonConfig) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| config.within(a, b))
    }

    fn combine(
        &mut self,
        operation: &'static str,
        other: Option<&Matrix>,
        op: impl Fn(&mut f64, f64),
    ) -> Result<()> {
        let other = require_operand(operation, other)?;
        if self.shape() != other.shape() {
            return Err(self.mismatch(operation, other));
        }

        self.data.iter_mut().zip(&other.data).for_each(|(a, &b)| op(a, b));
        trace!(operation, shape = ?self.shape(), "applied element-wise operation");
        Ok(())
    }

    fn mismatch(&self, operation: &'static str, other: &Matrix) -> MatrixError {
        debug!(operation, left = ?self.shape(), right = ?other.shape(), "dimension mismatch");
        MatrixError::DimensionMismatch {
            operation,
            left: self.shape(),
            right: other.shape(),
        }
    }
}

fn require_operand<'a>(operation: &'static str, other: Option<&'a Matrix>) -> Result<&'a Matrix> {
    other.ok_or_else(|| {
        debug!(operation, "missing operand");
        MatrixError::NullInput { operand: "matrix" }
    })
}

/// Validate a shape and return its element count.
///
/// Both dimensions must be non-zero and `rows * columns` values must fit in a
/// single allocation.
fn check_dimensions(rows: usize, columns: usize) -> Result<usize> {
    if rows == 0 || columns == 0 {
        debug!(rows, columns, "rejected zero dimension");
        return Err(MatrixError::InvalidDimension(format!(
            "rows and columns must be positive (got {}x{})",
            rows, columns
        )));
    }
    match rows.checked_mul(columns) {
        Some(len) if len <= MAX_ELEMENTS => Ok(len),
        _ => {
            debug!(rows, columns, "rejected oversized shape");
            Err(MatrixError::InvalidDimension(format!(
                "{}x{} matrix exceeds the addressable element count",
                rows, columns
            )))
        }
    }
}

impl fmt::Display for Matrix {
    /// Rows are bracketed and printed one per line. A precision such as
    /// `{:.2}` applies to every element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// Serde: encode as { rows, columns, data } and re-check the shape on decode.

#[derive(Serialize)]
#[serde(rename = "Matrix")]
struct MatrixRef<'a> {
    rows: usize,
    columns: usize,
    data: &'a [f64],
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixOwned {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MatrixRef {
            rows: self.rows,
            columns: self.columns,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let MatrixOwned { rows, columns, data } = MatrixOwned::deserialize(deserializer)?;
        Matrix::from_vec(rows, columns, data).map_err(serde::de::Error::custom)
    }
}
