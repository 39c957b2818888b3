//! Streaming text loader.
//!
//! Reads a file in fixed-size chunks and incrementally parses whitespace- or
//! newline-delimited (optionally signed) integers into a growable aligned
//! buffer, inferring the matrix shape from newline and value counts. The
//! whole file is never held in memory, so input size is unbounded.
//!
//! The parser is complete but not sound: any byte that is not a digit or a
//! `-` separates numbers, and nothing checks that every line carries the
//! same number of values. A ragged file yields a matrix whose declared
//! column count (taken from the last delimited row) does not describe every
//! row that was read. That permissiveness is deliberate and kept; existing
//! inputs rely on it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::matrix::buffer::AlignedBuf;

/// Size of the file-read buffer, in bytes.
const CHUNK_SIZE: usize = 4096;

/// Starting capacity (in elements) of the parsed-value buffer.
const INITIAL_CAPACITY: usize = 1024;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between numbers.
    Idle,
    /// Saw `-`, waiting for the first digit.
    Sign,
    /// Accumulating digits of a literal.
    InNumber,
}

/// Incremental parser state, persisted across read chunks.
struct Parser {
    values: AlignedBuf,
    pos: usize,
    rows: usize,
    /// Column count of the most recently closed row; the last one wins.
    cols: usize,
    row_width: usize,
    state: State,
    value: i32,
    negative: bool,
}

impl Parser {
    fn new() -> Result<Self, MatrixError> {
        Ok(Parser {
            values: AlignedBuf::zeroed(INITIAL_CAPACITY)?,
            pos: 0,
            rows: 0,
            cols: 0,
            row_width: 0,
            state: State::Idle,
            value: 0,
            negative: false,
        })
    }

    fn feed(&mut self, chunk: &[u8]) -> Result<(), MatrixError> {
        for &byte in chunk {
            self.step(byte)?;
        }
        Ok(())
    }

    fn step(&mut self, byte: u8) -> Result<(), MatrixError> {
        match byte {
            b'0'..=b'9' => {
                let digit = i32::from(byte - b'0');
                match self.state {
                    State::InNumber => {
                        self.value = self.value.wrapping_mul(10).wrapping_add(digit);
                    }
                    State::Sign => {
                        self.value = digit;
                        self.state = State::InNumber;
                    }
                    State::Idle => {
                        self.value = digit;
                        self.negative = false;
                        self.state = State::InNumber;
                    }
                }
            }
            b'-' => {
                // A sign mid-number ends the current literal and starts a
                // negative one, so "3-4" reads as 3 and -4.
                if self.state == State::InNumber {
                    self.commit()?;
                }
                self.negative = true;
                self.state = State::Sign;
            }
            b'\n' => {
                if self.state == State::InNumber {
                    self.commit()?;
                }
                self.state = State::Idle;
                self.close_row();
            }
            _ => {
                // Any other byte separates numbers. A dangling sign with no
                // digit after it commits nothing.
                if self.state == State::InNumber {
                    self.commit()?;
                }
                self.state = State::Idle;
            }
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), MatrixError> {
        if self.pos == self.values.len() {
            let doubled = (self.values.len() * 2).max(INITIAL_CAPACITY);
            self.values.grow(doubled)?;
        }
        let v = if self.negative {
            self.value.wrapping_neg()
        } else {
            self.value
        };
        self.values.as_mut_slice()[self.pos] = v;
        self.pos += 1;
        self.row_width += 1;
        self.value = 0;
        self.negative = false;
        Ok(())
    }

    fn close_row(&mut self) {
        self.rows += 1;
        self.cols = self.row_width;
        self.row_width = 0;
    }

    fn finish(mut self) -> Result<Matrix, MatrixError> {
        // A literal still pending at end of stream completes one final row.
        if self.state == State::InNumber {
            self.commit()?;
            self.close_row();
        }
        // A ragged file can declare more slots than were committed; the
        // uncommitted tail reads as zero.
        let declared = self.rows * self.cols;
        if declared > self.values.len() {
            self.values.grow(declared)?;
        }
        Ok(Matrix::from_parts(self.rows, self.cols, self.values))
    }
}

/// Parses a matrix from a plain-text file.
///
/// Rows are separated by newlines; within a row any non-digit, non-`-` byte
/// (spaces, tabs, commas) separates integers. A trailing row without a final
/// newline is accepted as a complete row. Fails only when the file cannot be
/// opened or read; malformed numeric content is never an error.
///
/// ```no_run
/// use intmatmul::loader::load_from_text;
///
/// let m = load_from_text("operand.txt")?;
/// println!("{}x{}", m.rows(), m.cols());
/// # Ok::<(), intmatmul::MatrixError>(())
/// ```
pub fn load_from_text<P: AsRef<Path>>(path: P) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    let io_err = |source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut parser = Parser::new()?;
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let nread = file.read(&mut chunk).map_err(io_err)?;
        if nread == 0 {
            break;
        }
        parser.feed(&chunk[..nread])?;
    }

    parser.finish()
}
