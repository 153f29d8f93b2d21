//! Piecewise-linear interpolation over an irregular grid
//!
//! The grid must be strictly increasing. Each query point is bracketed by
//! binary search, so lookup costs O(log n) per point regardless of spacing.
//!
//! Query points outside `[grid[0], grid[last]]` are extrapolated linearly
//! along the first or last segment; there is no clamping.

use core::ops::{Add, Div, Mul, Sub};

use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum InterpolationError {
    /// Grid has no points
    #[snafu(display("Interpolation grid is empty"))]
    EmptyGrid,

    /// Grid and value lengths differ
    #[snafu(display("Grid has {grid} points but {values} values were supplied"))]
    LengthMismatch { grid: usize, values: usize },

    /// Grid is not strictly increasing
    #[snafu(display("Grid is not strictly increasing at index {index}"))]
    NonIncreasingGrid { index: usize },
}

/// Values that can be linearly interpolated: real or complex samples.
pub trait Interpolable:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
}

impl<T> Interpolable for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>
{
}

/// Validated grid/value pairs ready for repeated lookups
#[derive(Debug, Clone)]
pub struct Interpolator<'a, T> {
    grid: &'a [f64],
    values: &'a [T],
}

impl<'a, T: Interpolable> Interpolator<'a, T> {
    /// Check the grid and pair it with its values.
    ///
    /// # Errors
    /// * `EmptyGrid` - no grid points
    /// * `LengthMismatch` - `grid.len() != values.len()`
    /// * `NonIncreasingGrid` - `grid[i] >= grid[i+1]` (or NaN) somewhere
    pub fn new(grid: &'a [f64], values: &'a [T]) -> Result<Self, InterpolationError> {
        if grid.is_empty() {
            return Err(InterpolationError::EmptyGrid);
        }
        if grid.len() != values.len() {
            return Err(InterpolationError::LengthMismatch {
                grid: grid.len(),
                values: values.len(),
            });
        }
        if let Some(index) = grid.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(InterpolationError::NonIncreasingGrid { index });
        }
        Ok(Self { grid, values })
    }

    /// Indices `(lo, hi)` of the grid segment used for `x`, with `hi == lo + 1`.
    fn bracket(&self, x: f64) -> (usize, usize) {
        let mut lo = 0;
        let mut hi = self.grid.len() - 1;
        while hi - lo > 1 {
            // round((lo + hi) / 2), halves rounded up
            let mid = (lo + hi + 1) / 2;
            if x >= self.grid[mid] {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo, hi)
    }

    /// Interpolated value at `x`
    pub fn at(&self, x: f64) -> T {
        // A single point cannot define a slope
        if self.grid.len() == 1 {
            return self.values[0];
        }

        let (lo, hi) = self.bracket(x);
        let (x0, x1) = (self.grid[lo], self.grid[hi]);
        let (y0, y1) = (self.values[lo], self.values[hi]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Interpolated values at every point of `xs`
    pub fn interpolate(&self, xs: &[f64]) -> Vec<T> {
        xs.iter().map(|&x| self.at(x)).collect()
    }
}

/// Interpolate `values` sampled at `grid` onto the query points `xs`.
///
/// # Example
/// ```
/// use cellscan_dsp::interp::interp1;
///
/// let y = interp1(&[0.0, 10.0], &[0.0, 100.0], &[5.0, 20.0])?;
/// assert_eq!(y, vec![50.0, 200.0]);
/// # Ok::<(), cellscan_dsp::InterpolationError>(())
/// ```
pub fn interp1<T: Interpolable>(grid: &[f64], values: &[T], xs: &[f64]) -> Result<Vec<T>, InterpolationError> {
    Ok(Interpolator::new(grid, values)?.interpolate(xs))
}
