//! Square

use serde::{Serialize, Deserialize};

use crate::error::{check_dimension, ShapeError};
use crate::{Point2D, Shape, Shape2D};

/// A square anchored at a reference point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    origin: Point2D,
    side: f64,
}

impl Square {
    /// Create a square from a reference point and side length
    #[inline]
    pub const fn new(origin: Point2D, side: f64) -> Self {
        Self { origin, side }
    }

    #[inline]
    pub const fn from_coords(x: f64, y: f64, side: f64) -> Self {
        Self::new(Point2D::new(x, y), side)
    }

    /// Create a square, rejecting a negative or non-finite side
    pub fn try_new(origin: Point2D, side: f64) -> Result<Self, ShapeError> {
        let side = check_dimension("square", "side", side)?;
        Ok(Self::new(origin, side))
    }

    #[inline]
    pub const fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
}

impl Shape2D for Square {
    fn reference_point(&self) -> Point2D {
        self.origin
    }
}
