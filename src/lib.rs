//! geoshapes - shape hierarchy demo
//!
//! Loads the configuration, builds one circle, square, sphere and cube and
//! renders their measurements as a fixed textual report.

pub mod config;
pub mod format;
pub mod report;

use std::fmt;

use geo_math::ShapeError;

pub use config::AppConfig;
pub use report::DemoShapes;

/// Error running the demo
#[derive(Debug)]
pub enum DemoError {
    /// A configured dimension was rejected
    Shape(ShapeError),
}

impl From<ShapeError> for DemoError {
    fn from(e: ShapeError) -> Self {
        DemoError::Shape(e)
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Shape(e) => write!(f, "Shape error: {}", e),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Shape(e) => Some(e),
        }
    }
}

/// Build the demo shapes from `config` and render the report
pub fn run(config: &AppConfig) -> Result<Vec<String>, DemoError> {
    let shapes = DemoShapes::from_config(&config.demo)?;

    for shape in shapes.as_shapes() {
        log::info!(
            "{}: area = {}, perimeter = {}",
            shape.name(),
            shape.area(),
            shape.perimeter()
        );
    }

    Ok(shapes.report_lines(config.display.significant_digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_demo_error_display_and_source() {
        let err: DemoError = ShapeError::InvalidDimension {
            shape: "sphere",
            dimension: "radius",
            value: -1.0,
        }
        .into();
        assert!(err.to_string().contains("sphere radius"));
        assert!(err.source().is_some());
    }
}
