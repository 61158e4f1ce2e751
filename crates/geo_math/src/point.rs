//! 2D and 3D points
//!
//! Points are plain coordinate carriers. They are the reference points shapes
//! are anchored at and carry no behavior beyond accessors.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Point in two dimensional space
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from X and Y coordinates
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X coordinate
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as `[x, y]`
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        bytemuck::cast(self)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(coords: [f64; 2]) -> Self {
        bytemuck::cast(coords)
    }
}

/// Point in three dimensional space
///
/// A `Point3D` is a [`Point2D`] with an extra Z coordinate. Use [`Point3D::xy`]
/// (or `Point2D::from`) to get the planar part.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a point from X, Y and Z coordinates
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Projection onto the XY plane (Z is dropped)
    #[inline]
    pub const fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Coordinates as `[x, y, z]`
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        bytemuck::cast(self)
    }
}

impl From<Point3D> for Point2D {
    fn from(p: Point3D) -> Self {
        p.xy()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(coords: [f64; 3]) -> Self {
        bytemuck::cast(coords)
    }
}
