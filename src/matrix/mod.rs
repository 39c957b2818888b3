//! The matrix data model: an owned row-major `i32` buffer with factories
//! for random fill, zero fill, and literal rows, plus aligned debug printing.

pub mod buffer;
pub mod transpose;

use std::fmt;
use std::fmt::Write as _;

use rand::Rng;

use crate::error::MatrixError;
use crate::matrix::buffer::AlignedBuf;

/// Upper bound (exclusive) for randomly generated elements.
///
/// Debug builds keep values single-digit so printed matrices stay readable;
/// release builds draw from the full non-negative range.
#[cfg(debug_assertions)]
pub const RANDOM_BOUND: i32 = 10;
#[cfg(not(debug_assertions))]
pub const RANDOM_BOUND: i32 = i32::MAX;

/// A dense row-major matrix of `i32` values.
///
/// Element `(i, j)` lives at linear offset `i * cols + j`. The shape is fixed
/// at construction; only element values may change in place. The backing
/// buffer is 16-byte aligned (see [`buffer::AlignedBuf`]) and released when
/// the matrix is dropped.
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: AlignedBuf,
}

impl Matrix {
    /// Allocates a zero-filled `rows × cols` matrix.
    ///
    /// This is what the multiply strategies use for their accumulators.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let data = AlignedBuf::zeroed(rows * cols)?;
        Ok(Matrix { rows, cols, data })
    }

    /// Allocates a `rows × cols` matrix filled with uniform values from
    /// `[0, RANDOM_BOUND)`.
    pub fn random(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::random_from(&mut rand::thread_rng(), rows, cols)
    }

    /// Like [`Matrix::random`], but drawing from a caller-provided generator.
    ///
    /// Useful with a seeded `StdRng` when reproducibility matters.
    pub fn random_from<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(rows, cols)?;
        for v in m.as_mut_slice() {
            *v = rng.gen_range(0..RANDOM_BOUND);
        }
        Ok(m)
    }

    /// Builds an `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.as_mut_slice()[i * n + i] = 1;
        }
        Ok(m)
    }

    /// Builds a matrix from literal rows.
    ///
    /// ```
    /// use intmatmul::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.rows(), 2);
    /// assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Self::zeros(nrows, ncols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), ncols, "row {i} has length {}", row.len());
            m.as_mut_slice()[i * ncols..(i + 1) * ncols].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Assembles a matrix from a buffer the loader has already filled.
    ///
    /// The buffer may be larger than `rows * cols` (growth happens in
    /// doubling steps); the matrix only ever exposes the leading
    /// `rows * cols` elements.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: AlignedBuf) -> Self {
        debug_assert!(data.len() >= rows * cols);
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data.as_slice()[..self.rows * self.cols]
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data.as_mut_slice()[..self.rows * self.cols]
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.rows && col < self.cols);
        self.as_slice()[row * self.cols + col]
    }

    /// Renders the matrix as aligned rows of decimal integers.
    ///
    /// Columns are padded to the widest rendered value (sign included). With
    /// a label, the first row is prefixed `label: ` and continuation rows are
    /// indented to match, the way the debug driver prints operands.
    pub fn format(&self, label: Option<&str>) -> String {
        let width = self
            .as_slice()
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        let indent = label.map_or(0, |l| l.len() + 2);

        let mut out = String::new();
        for i in 0..self.rows {
            if i == 0 {
                if let Some(label) = label {
                    let _ = write!(out, "{label}: ");
                }
            } else {
                let _ = write!(out, "{:indent$}", "");
            }
            for j in 0..self.cols {
                if j > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{:>width$}", self.get(i, j));
            }
            out.push('\n');
        }
        out
    }

    /// Prints the matrix to stdout. Debug aid; never mutates.
    pub fn print(&self, label: Option<&str>) {
        print!("{}", self.format(label));
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.as_slice() == other.as_slice()
    }
}

impl Eq for Matrix {}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix {}x{} {:?}", self.rows, self.cols, self.as_slice())
    }
}
