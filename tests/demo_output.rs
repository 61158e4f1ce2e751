//! Integration tests for the demo report
//!
//! The report must reproduce the fixed textual format line by line.

use geoshapes::config::AppConfig;
use geoshapes::DemoError;

const EXPECTED: [&str; 14] = [
    "A circle with radius 3.5",
    " Circle's area is 38.4845",
    " Circle's circumference is 21.9911",
    "A square with side 3",
    " Square's area is 9",
    " Square's perimeter is 12",
    "A sphere with radius 3.5",
    " Sphere's surface area is 153.938",
    " Sphere's circumference is 21.9911",
    " Sphere's volume is 179.594",
    "A cube with edge 3",
    " Cube's surface area is 54",
    " Cube's perimeter is 0",
    " Cube's volume is 27",
];

#[test]
fn test_default_report() {
    let lines = geoshapes::run(&AppConfig::default()).unwrap();
    assert_eq!(lines, EXPECTED);
}

#[test]
fn test_report_with_more_digits() {
    let mut config = AppConfig::default();
    config.display.significant_digits = 10;
    let lines = geoshapes::run(&config).unwrap();
    assert_eq!(lines[1], " Circle's area is 38.48451001");
    assert_eq!(lines[4], " Square's area is 9");
}

#[test]
fn test_report_with_custom_sizes() {
    let mut config = AppConfig::default();
    config.demo.circle_radius = 1.0;
    config.demo.cube_edge = 2.0;
    let lines = geoshapes::run(&config).unwrap();
    assert_eq!(lines[0], "A circle with radius 1");
    assert_eq!(lines[1], " Circle's area is 3.14159");
    assert_eq!(lines[11], " Cube's surface area is 24");
    assert_eq!(lines[13], " Cube's volume is 8");
}

#[test]
fn test_strict_run_fails_on_negative_dimension() {
    let mut config = AppConfig::default();
    config.demo.sphere_radius = -1.0;
    match geoshapes::run(&config) {
        Err(DemoError::Shape(e)) => assert!(e.to_string().contains("sphere")),
        Ok(lines) => panic!("Expected an error, got {:?}", lines),
    }
}

#[test]
fn test_lenient_run_computes_negative_dimension() {
    let mut config = AppConfig::default();
    config.demo.square_side = -3.0;
    config.demo.strict_dimensions = false;
    let lines = geoshapes::run(&config).unwrap();
    assert_eq!(lines[3], "A square with side -3");
    assert_eq!(lines[4], " Square's area is 9");
    assert_eq!(lines[5], " Square's perimeter is -12");
}
