//! Projection selector and axis limits
//!
//! [`Projection`] is parsed from the selectors `"xy"`, `"xz"`, `"yz"` and
//! `"xyz"` (case-insensitive). [`Bounds`] computes padded axis limits of a
//! single series, so the limits of any projection are built from the same
//! routine whichever axes it selects.

use std::fmt;
use std::str::FromStr;

use crate::error::MhdError;
use crate::solver::{Axis, Trajectory};

/// 2-D projection plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    /// (horizontal, vertical) axes
    pub fn axes(&self) -> (Axis, Axis) {
        match self {
            Plane::XY => (Axis::X, Axis::Y),
            Plane::XZ => (Axis::X, Axis::Z),
            Plane::YZ => (Axis::Y, Axis::Z),
        }
    }
}

/// Selected view of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Plane(Plane),
    Space,
}

impl FromStr for Projection {
    type Err = MhdError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.to_ascii_lowercase().as_str() {
            "xy" => Ok(Projection::Plane(Plane::XY)),
            "xz" => Ok(Projection::Plane(Plane::XZ)),
            "yz" => Ok(Projection::Plane(Plane::YZ)),
            "xyz" => Ok(Projection::Space),
            _ => Err(MhdError::InvalidAxisSelector(selector.to_string())),
        }
    }
}

impl FromStr for Plane {
    type Err = MhdError;

    /// Like [`Projection`], but `"xyz"` is rejected
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector.parse::<Projection>()? {
            Projection::Plane(plane) => Ok(plane),
            Projection::Space => Err(MhdError::InvalidAxisSelector(selector.to_string())),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, v) = self.axes();
        write!(f, "{}{}", h.label().to_lowercase(), v.label().to_lowercase())
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Plane(plane) => plane.fmt(f),
            Projection::Space => f.write_str("xyz"),
        }
    }
}

/// Axis limits of one series, padded by 10% of its span on each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Fraction of the span added on each side
    pub const PADDING: f64 = 0.1;

    /// Padded limits of the finite values of `series`
    ///
    /// A constant series is padded by 10% of its magnitude, or by 1 around
    /// zero, so the range never collapses. An empty series gives [-1, 1].
    pub fn of(series: &[f64]) -> Self {
        let (min, max) = series
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if min > max {
            return Self { min: -1.0, max: 1.0 };
        }

        let span = max - min;
        let pad = if span > 0.0 {
            Self::PADDING * span
        } else if min != 0.0 {
            Self::PADDING * min.abs()
        } else {
            1.0
        };

        Self {
            min: min - pad,
            max: max + pad,
        }
    }

    pub fn range(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Padded limits of a projection, one [`Bounds`] per displayed axis
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    axes: Vec<(Axis, Bounds)>,
}

impl BoundingBox {
    /// Limits of every axis shown by `projection`
    pub fn new(trajectory: &Trajectory, projection: Projection) -> Self {
        let axes: Vec<Axis> = match projection {
            Projection::Plane(plane) => {
                let (h, v) = plane.axes();
                vec![h, v]
            }
            Projection::Space => vec![Axis::X, Axis::Y, Axis::Z],
        };

        Self {
            axes: axes
                .into_iter()
                .map(|axis| (axis, Bounds::of(trajectory.axis(axis))))
                .collect(),
        }
    }

    /// Limits along `axis`, when the projection displays it
    pub fn bounds(&self, axis: Axis) -> Option<Bounds> {
        self.axes.iter().find(|(a, _)| *a == axis).map(|(_, b)| *b)
    }

    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_selectors() {
        assert_eq!("xy".parse::<Projection>().unwrap(), Projection::Plane(Plane::XY));
        assert_eq!("XZ".parse::<Projection>().unwrap(), Projection::Plane(Plane::XZ));
        assert_eq!("yZ".parse::<Projection>().unwrap(), Projection::Plane(Plane::YZ));
        assert_eq!("xyz".parse::<Projection>().unwrap(), Projection::Space);
    }

    #[test]
    fn test_invalid_selectors() {
        for selector in ["ab", "", "yx", "x", "xyzz"] {
            match selector.parse::<Projection>() {
                Err(MhdError::InvalidAxisSelector(s)) => assert_eq!(s, selector),
                other => panic!("{:?} accepted as {:?}", selector, other),
            }
        }
        assert!(matches!("xyz".parse::<Plane>(), Err(MhdError::InvalidAxisSelector(_))));
    }

    #[test]
    fn test_display_roundtrip() {
        for selector in ["xy", "xz", "yz", "xyz"] {
            assert_eq!(selector.parse::<Projection>().unwrap().to_string(), selector);
        }
    }

    #[test]
    fn test_bounds_padding() {
        let bounds = Bounds::of(&[0.0, 10.0, 5.0]);
        assert_relative_eq!(bounds.min, -1.0);
        assert_relative_eq!(bounds.max, 11.0);
        assert!(bounds.contains(0.0) && bounds.contains(10.0));
    }

    #[test]
    fn test_bounds_degenerate() {
        assert_eq!(Bounds::of(&[0.0, 0.0]), Bounds { min: -1.0, max: 1.0 });

        let constant = Bounds::of(&[-2.0, -2.0]);
        assert_relative_eq!(constant.min, -2.2);
        assert_relative_eq!(constant.max, -1.8);

        assert_eq!(Bounds::of(&[]), Bounds { min: -1.0, max: 1.0 });
        assert_eq!(Bounds::of(&[f64::NAN, 1.0, 3.0]).min, 1.0 - 0.2);
    }

    #[test]
    fn test_bounding_box_axes() {
        let trajectory = Trajectory::from_positions(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 2.0],
            vec![0.0, 3.0],
        );

        let plane = BoundingBox::new(&trajectory, Projection::Plane(Plane::YZ));
        assert_eq!(plane.dimensions(), 2);
        assert!(plane.bounds(Axis::X).is_none());
        assert_relative_eq!(plane.bounds(Axis::Z).unwrap().max, 3.3);

        let space = BoundingBox::new(&trajectory, Projection::Space);
        assert_eq!(space.dimensions(), 3);
        assert_relative_eq!(space.bounds(Axis::Y).unwrap().min, -0.2);
    }
}
