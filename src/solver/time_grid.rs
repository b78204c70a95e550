//! Uniform time grid
//!
//! `n` evenly spaced samples on `[t0, t1]`, both endpoints included, step
//! `h = (t1 - t0) / (n - 1)`.

use crate::error::{MhdError, Result};

/// Evenly spaced time samples, endpoints inclusive
///
/// # Example
///
/// ```rust
/// use mhd_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::new(0.0, 1.0, 2).unwrap();
/// assert_eq!(grid.points(), vec![0.0, 1.0]);
/// assert_eq!(grid.step(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    samples: usize,
}

impl TimeGrid {
    /// Create a grid of `samples` points on `[start, end]`
    ///
    /// # Errors
    ///
    /// - `InvalidGridSize` when `samples < 2`
    /// - `InvalidParameter("interval")` when an endpoint is not finite or `end < start`
    ///
    /// `start == end` is accepted: every sample sits at the same instant.
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self> {
        if samples < 2 {
            return Err(MhdError::InvalidGridSize(samples));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(MhdError::invalid("interval", "endpoints must be finite"));
        }
        if end < start {
            return Err(MhdError::invalid(
                "interval",
                format!("end ({}) must not precede start ({})", end, start),
            ));
        }
        Ok(Self { start, end, samples })
    }

    /// Create from a `[t0, t1]` slice
    pub fn from_interval(interval: &[f64], samples: usize) -> Result<Self> {
        match interval {
            [start, end] => Self::new(*start, *end, samples),
            _ => Err(MhdError::invalid(
                "interval",
                format!("expected exactly 2 endpoints, got {}", interval.len()),
            )),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of samples
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Fixed step h = (t1 - t0) / (n - 1)
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.samples - 1) as f64
    }

    /// Both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Time of sample `index`
    ///
    /// Computed from the index rather than by accumulating `h`, and the last
    /// sample is pinned to `end` exactly.
    pub fn time(&self, index: usize) -> f64 {
        if index + 1 >= self.samples {
            self.end
        } else {
            self.start + index as f64 * self.step()
        }
    }

    /// All sample times
    pub fn points(&self) -> Vec<f64> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples).map(move |i| self.time(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_samples_are_the_endpoints() {
        let grid = TimeGrid::new(0.0, 1.0, 2).unwrap();
        assert_eq!(grid.points(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_step_and_endpoints() {
        let grid = TimeGrid::new(2.0, 4.0, 5).unwrap();
        assert_relative_eq!(grid.step(), 0.5);
        let points = grid.points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], 2.0);
        assert_relative_eq!(points[2], 3.0);
        assert_eq!(*points.last().unwrap(), 4.0);
    }

    #[test]
    fn test_last_point_is_exact() {
        let grid = TimeGrid::new(0.0, 0.3, 1000).unwrap();
        assert_eq!(grid.time(999), 0.3);
    }

    #[test]
    fn test_rejects_small_grids() {
        assert!(matches!(TimeGrid::new(0.0, 1.0, 1), Err(MhdError::InvalidGridSize(1))));
        assert!(matches!(TimeGrid::new(0.0, 1.0, 0), Err(MhdError::InvalidGridSize(0))));
    }

    #[test]
    fn test_rejects_reversed_interval() {
        let error = TimeGrid::new(1.0, 0.0, 10).unwrap_err();
        assert_eq!(error.field(), Some("interval"));
    }

    #[test]
    fn test_rejects_non_finite_interval() {
        let error = TimeGrid::new(0.0, f64::INFINITY, 10).unwrap_err();
        assert_eq!(error.field(), Some("interval"));
    }

    #[test]
    fn test_degenerate_interval() {
        let grid = TimeGrid::new(1.5, 1.5, 4).unwrap();
        assert!(grid.is_degenerate());
        assert_eq!(grid.step(), 0.0);
        assert_eq!(grid.points(), vec![1.5; 4]);
    }

    #[test]
    fn test_from_interval_shape() {
        assert!(TimeGrid::from_interval(&[0.0, 1.0], 10).is_ok());

        let error = TimeGrid::from_interval(&[0.0, 1.0, 2.0], 10).unwrap_err();
        assert_eq!(error.field(), Some("interval"));

        let error = TimeGrid::from_interval(&[0.0], 10).unwrap_err();
        assert_eq!(error.field(), Some("interval"));
    }
}
