//! 2D/3D shape model
//!
//! This crate provides a small, fixed hierarchy of geometric shapes with
//! area, perimeter and volume computed through dynamic dispatch.
//!
//! ## Points
//!
//! - [`Point2D`] - (x, y) reference point
//! - [`Point3D`] - (x, y, z) reference point, projects onto [`Point2D`]
//!
//! ## Shape Traits
//!
//! - [`Shape`] - area and perimeter, shared by every shape
//! - [`Shape2D`] - planar shapes
//! - [`Shape3D`] - solids, adding volume
//!
//! ## Shape Types
//!
//! - [`Circle`], [`Rectangle`], [`Square`] - 2D shapes
//! - [`Sphere`] - owns a [`Circle`]
//! - [`Cube`] - owns a [`Square`]
//!
//! Constructors named `new` accept any value and apply the formulas as-is.
//! The `try_new` constructors reject negative and non-finite dimensions with
//! [`ShapeError::InvalidDimension`].

mod point;
mod error;
pub mod shape;
pub mod circle;
pub mod rectangle;
pub mod square;
pub mod sphere;
pub mod cube;

pub use point::{Point2D, Point3D};
pub use error::ShapeError;
pub use shape::{Shape, Shape2D, Shape3D, SOLID_PERIMETER};
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use sphere::Sphere;
pub use cube::Cube;
