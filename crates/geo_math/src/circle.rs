//! Circle

use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{check_dimension, ShapeError};
use crate::{Point2D, Shape, Shape2D};

/// A circle with a center point and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Point2D,
    radius: f64,
}

impl Circle {
    /// Create a circle from its center and radius
    ///
    /// Any radius is accepted, including negative or NaN values.
    /// Use [`Circle::try_new`] to reject those.
    #[inline]
    pub const fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create a circle from center coordinates and radius
    #[inline]
    pub const fn from_coords(x: f64, y: f64, radius: f64) -> Self {
        Self::new(Point2D::new(x, y), radius)
    }

    /// Create a circle, rejecting a negative or non-finite radius
    pub fn try_new(center: Point2D, radius: f64) -> Result<Self, ShapeError> {
        let radius = check_dimension("circle", "radius", radius)?;
        Ok(Self::new(center, radius))
    }

    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub const fn center(&self) -> Point2D {
        self.center
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    /// πr²
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference, 2πr
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Shape2D for Circle {
    fn reference_point(&self) -> Point2D {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(Point2D::ORIGIN, 2.0);
        assert!(approx_eq(circle.area(), 4.0 * PI));
    }

    #[test]
    fn test_circle_perimeter() {
        let circle = Circle::new(Point2D::ORIGIN, 2.0);
        assert!(approx_eq(circle.perimeter(), 4.0 * PI));
    }

    #[test]
    fn test_circle_demo_values() {
        let circle = Circle::new(Point2D::ORIGIN, 3.5);
        assert!((circle.area() - 38.4845).abs() < 1e-4);
        assert!((circle.perimeter() - 21.9911).abs() < 1e-4);
    }

    #[test]
    fn test_from_coords() {
        let circle = Circle::from_coords(1.0, 2.0, 3.0);
        assert_eq!(circle.center(), Point2D::new(1.0, 2.0));
        assert_eq!(circle.reference_point(), Point2D::new(1.0, 2.0));
        assert_eq!(circle.radius(), 3.0);
    }

    #[test]
    fn test_unchecked_negative_radius() {
        // Geometrically meaningless, arithmetically defined
        let circle = Circle::new(Point2D::ORIGIN, -1.0);
        assert!(approx_eq(circle.area(), PI));
        assert!(approx_eq(circle.perimeter(), -2.0 * PI));
    }

    #[test]
    fn test_try_new() {
        assert!(Circle::try_new(Point2D::ORIGIN, 1.0).is_ok());
        assert_eq!(Circle::try_new(Point2D::ORIGIN, 0.0).unwrap().area(), 0.0);
        match Circle::try_new(Point2D::ORIGIN, -1.0) {
            Err(ShapeError::InvalidDimension { shape, dimension, .. }) => {
                assert_eq!(shape, "circle");
                assert_eq!(dimension, "radius");
            }
            other => panic!("Expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_propagates() {
        let circle = Circle::new(Point2D::ORIGIN, f64::NAN);
        assert!(circle.area().is_nan());
        assert!(circle.perimeter().is_nan());
    }
}
