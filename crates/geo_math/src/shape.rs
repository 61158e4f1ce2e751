//! Shape traits
//!
//! The hierarchy is expressed as three traits:
//! - [`Shape`] - operations shared by every shape (area, perimeter)
//! - [`Shape2D`] - planar shapes anchored at a [`Point2D`]
//! - [`Shape3D`] - solids anchored at a [`Point3D`], adding volume
//!
//! The reference point is a plain field of each concrete shape. It positions
//! the shape but never enters the area, perimeter or volume formulas.

use std::fmt;

use crate::{Point2D, Point3D};

/// Perimeter reported by solids that do not define one
///
/// A perimeter is the length of the path surrounding a two dimensional shape,
/// so for solids the operation is kept in the interface but degraded to this
/// constant.
pub const SOLID_PERIMETER: f64 = 0.0;

/// Operations shared by all shapes
///
/// Shapes are immutable values: once constructed they are only read, so they
/// can be shared freely between threads.
pub trait Shape: fmt::Debug + Send + Sync {
    /// Human readable name of the shape kind, e.g. `"circle"`
    fn name(&self) -> &'static str;

    /// Area of the shape (surface area for solids)
    fn area(&self) -> f64;

    /// Perimeter of the shape
    fn perimeter(&self) -> f64;
}

/// A two dimensional shape anchored at a reference point
pub trait Shape2D: Shape {
    fn reference_point(&self) -> Point2D;
}

/// A three dimensional solid anchored at a reference point
///
/// Solids without a meaningful perimeter return [`SOLID_PERIMETER`] from
/// [`Shape::perimeter`].
pub trait Shape3D: Shape {
    fn reference_point(&self) -> Point3D;

    /// Enclosed volume
    fn volume(&self) -> f64;
}
