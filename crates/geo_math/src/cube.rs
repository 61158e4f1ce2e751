//! Cube
//!
//! A cube owns the [`Square`] of one of its faces. The cube does not define a
//! perimeter: it is ambiguous whether it should be measured by edges alone or
//! by edges and face diagonals, so it reports [`SOLID_PERIMETER`].

use serde::{Serialize, Deserialize};

use crate::error::{check_dimension, ShapeError};
use crate::{Point3D, Shape, Shape3D, Square, SOLID_PERIMETER};

/// A cube anchored at a reference point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    origin: Point3D,
    face: Square,
}

impl Cube {
    /// Create a cube from a reference point and edge length
    #[inline]
    pub const fn new(origin: Point3D, edge: f64) -> Self {
        Self {
            origin,
            face: Square::new(origin.xy(), edge),
        }
    }

    /// Create a cube, rejecting a negative or non-finite edge
    pub fn try_new(origin: Point3D, edge: f64) -> Result<Self, ShapeError> {
        let edge = check_dimension("cube", "edge", edge)?;
        Ok(Self::new(origin, edge))
    }

    /// Edge length, taken from the aggregated square
    #[inline]
    pub const fn edge(&self) -> f64 {
        self.face.side()
    }

    #[inline]
    pub const fn square(&self) -> &Square {
        &self.face
    }
}

impl Shape for Cube {
    fn name(&self) -> &'static str {
        "cube"
    }

    /// Surface area: six square faces
    fn area(&self) -> f64 {
        self.face.area() * 6.0
    }

    fn perimeter(&self) -> f64 {
        SOLID_PERIMETER
    }
}

impl Shape3D for Cube {
    fn reference_point(&self) -> Point3D {
        self.origin
    }

    fn volume(&self) -> f64 {
        let a = self.edge();
        a * a * a
    }
}
