//! Square boolean pixel grids
//!
//! The bitmap is the shared pixel representation for tiles, merged
//! composites, and their transformed copies. Reads outside the grid
//! return off and writes outside the grid are ignored, so window-based
//! scans can probe positions without pre-clamping.

use crate::io::error::{AssemblyError, Result};
use crate::spatial::transform::Transform;
use ndarray::Array2;
use std::fmt;

/// Square grid of on/off pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    cells: Array2<bool>,
}

impl Bitmap {
    /// Build a bitmap from pixel rows
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NonSquareBitmap` when the rows do not form
    /// a square grid.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != size) {
            return Err(AssemblyError::NonSquareBitmap { rows: size, cols });
        }
        let mut cells = Array2::from_elem((size, size), false);
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, &pixel) in row.iter().enumerate() {
                if let Some(cell) = cells.get_mut((row_index, col_index)) {
                    *cell = pixel;
                }
            }
        }
        Ok(Self { cells })
    }

    /// Build a bitmap by sampling a generator for every pixel
    pub fn from_fn<F>(size: usize, generator: F) -> Self
    where
        F: Fn(usize, usize) -> bool,
    {
        Self {
            cells: Array2::from_shape_fn((size, size), |(row, col)| generator(row, col)),
        }
    }

    /// Width (and height) in pixels
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Read a pixel, treating out-of-range coordinates as off
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Write a pixel; out-of-range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = value;
        }
    }

    /// Count the on pixels
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&pixel| pixel).count()
    }

    /// Produce a new bitmap with the transform's coordinate remap applied
    pub fn transformed(&self, transform: Transform) -> Self {
        let size = self.size();
        Self::from_fn(size, |row, col| {
            let (source_row, source_col) = transform.source(size, row, col);
            self.get(source_row, source_col)
        })
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.outer_iter() {
            for &pixel in row.iter() {
                write!(f, "{}", if pixel { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
