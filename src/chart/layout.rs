//! Grid layout and score normalization for the ring chart

use crate::metrics::Score;

/// Fixed number of grid columns
pub const COLUMNS: usize = 3;

/// Full-ring value on the API scale
const SCALE: f64 = 100.0;

/// Row-major grid with a fixed column count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    count: usize,
}

impl GridLayout {
    /// Layout with enough rows for `count` charts
    pub fn for_count(count: usize) -> Self {
        Self {
            rows: count.div_ceil(COLUMNS),
            cols: COLUMNS,
            count,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of charts placed in the grid
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total cells, used or not
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Trailing cells left blank
    pub fn unused_cells(&self) -> usize {
        self.cells() - self.count
    }

    /// (row, column) of chart `index`, or `None` past the last chart
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.count {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }
}

/// Map each score to the filled fraction of its ring
///
/// Present scores become `value / 100` clamped to `[0, 1]`; absent
/// scores become 0 (an empty ring).
pub fn normalize(scores: &[Score]) -> Vec<f64> {
    scores
        .iter()
        .map(|score| match score {
            Some(value) => (f64::from(*value) / SCALE).clamp(0.0, 1.0),
            None => 0.0,
        })
        .collect()
}
