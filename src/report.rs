//! Demo report
//!
//! Builds one shape of each demonstrated kind and renders the labelled
//! description lines the `geoshapes` binary prints.

use geo_math::{Circle, Cube, Point2D, Point3D, Shape, Shape3D, ShapeError, Sphere, Square};

use crate::config::DemoConfig;
use crate::format::format_general;

/// The shapes described by the demo, in print order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoShapes {
    pub circle: Circle,
    pub square: Square,
    pub sphere: Sphere,
    pub cube: Cube,
}

impl DemoShapes {
    /// Build the demo shapes: 2D shapes at the planar origin, solids at the spatial origin
    ///
    /// With `strict_dimensions` set, negative or non-finite parameters are
    /// rejected. Otherwise they are used as given.
    pub fn from_config(config: &DemoConfig) -> Result<Self, ShapeError> {
        let p2d = Point2D::ORIGIN;
        let p3d = Point3D::ORIGIN;

        let shapes = if config.strict_dimensions {
            Self {
                circle: Circle::try_new(p2d, config.circle_radius)?,
                square: Square::try_new(p2d, config.square_side)?,
                sphere: Sphere::try_new(p3d, config.sphere_radius)?,
                cube: Cube::try_new(p3d, config.cube_edge)?,
            }
        } else {
            Self {
                circle: Circle::new(p2d, config.circle_radius),
                square: Square::new(p2d, config.square_side),
                sphere: Sphere::new(p3d, config.sphere_radius),
                cube: Cube::new(p3d, config.cube_edge),
            }
        };

        log::debug!("Built demo shapes: {:?}", shapes);
        Ok(shapes)
    }

    /// All shapes, for uniform treatment through the [`Shape`] interface
    pub fn as_shapes(&self) -> [&dyn Shape; 4] {
        [&self.circle, &self.square, &self.sphere, &self.cube]
    }

    /// Render the report, one line per entry
    pub fn report_lines(&self, digits: usize) -> Vec<String> {
        let n = |v: f64| format_general(v, digits);

        vec![
            format!("A circle with radius {}", n(self.circle.radius())),
            format!(" Circle's area is {}", n(self.circle.area())),
            format!(" Circle's circumference is {}", n(self.circle.perimeter())),
            format!("A square with side {}", n(self.square.side())),
            format!(" Square's area is {}", n(self.square.area())),
            format!(" Square's perimeter is {}", n(self.square.perimeter())),
            format!("A sphere with radius {}", n(self.sphere.radius())),
            format!(" Sphere's surface area is {}", n(self.sphere.area())),
            format!(" Sphere's circumference is {}", n(self.sphere.perimeter())),
            format!(" Sphere's volume is {}", n(self.sphere.volume())),
            format!("A cube with edge {}", n(self.cube.edge())),
            format!(" Cube's surface area is {}", n(self.cube.area())),
            format!(" Cube's perimeter is {}", n(self.cube.perimeter())),
            format!(" Cube's volume is {}", n(self.cube.volume())),
        ]
    }
}
