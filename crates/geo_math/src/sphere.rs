//! Sphere
//!
//! A sphere owns the [`Circle`] that shares its radius and lies in the XY
//! plane through its center. The circle provides the radius and the
//! circumference; surface area and volume use their own formulas.

use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::{check_dimension, ShapeError};
use crate::{Circle, Point3D, Shape, Shape3D};

/// A sphere with a center point and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Point3D,
    circle: Circle,
}

impl Sphere {
    /// Create a sphere from its center and radius
    ///
    /// The aggregated circle is centered at the center's X/Y coordinates.
    #[inline]
    pub const fn new(center: Point3D, radius: f64) -> Self {
        Self {
            center,
            circle: Circle::new(center.xy(), radius),
        }
    }

    /// Create a sphere, rejecting a negative or non-finite radius
    pub fn try_new(center: Point3D, radius: f64) -> Result<Self, ShapeError> {
        let radius = check_dimension("sphere", "radius", radius)?;
        Ok(Self::new(center, radius))
    }

    /// Radius, taken from the aggregated circle
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// The great circle in the XY plane
    #[inline]
    pub const fn circle(&self) -> &Circle {
        &self.circle
    }
}

impl Shape for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    /// Surface area, 4πr²
    fn area(&self) -> f64 {
        let r = self.radius();
        4.0 * PI * r * r
    }

    /// Circumference of the aggregated circle
    fn perimeter(&self) -> f64 {
        self.circle.perimeter()
    }
}

impl Shape3D for Sphere {
    fn reference_point(&self) -> Point3D {
        self.center
    }

    /// 4/3·πr³
    fn volume(&self) -> f64 {
        let r = self.radius();
        4.0 / 3.0 * PI * r * r * r
    }
}
