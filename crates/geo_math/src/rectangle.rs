//! Rectangle

use serde::{Serialize, Deserialize};

use crate::error::{check_dimension, ShapeError};
use crate::{Point2D, Shape, Shape2D};

/// An axis-aligned rectangle anchored at a reference point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    origin: Point2D,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle from a reference point, width and height
    #[inline]
    pub const fn new(origin: Point2D, width: f64, height: f64) -> Self {
        Self { origin, width, height }
    }

    #[inline]
    pub const fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point2D::new(x, y), width, height)
    }

    /// Create a rectangle, rejecting negative or non-finite sides
    pub fn try_new(origin: Point2D, width: f64, height: f64) -> Result<Self, ShapeError> {
        let width = check_dimension("rectangle", "width", width)?;
        let height = check_dimension("rectangle", "height", height)?;
        Ok(Self::new(origin, width, height))
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape2D for Rectangle {
    fn reference_point(&self) -> Point2D {
        self.origin
    }
}
