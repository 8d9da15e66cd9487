//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Raster origin transforms

/// Width and height of a tile, in pixels
pub const TILE_DIMENSION_PIXELS: u32 = 256;

/// False easting and northing `(false_easting, false_northing)` for a world
/// raster with the given circumference in pixels.
pub fn false_offset(sphere_circumference_pixels: f64) -> (f64, f64) {
    let false_easting = -sphere_circumference_pixels / 2.0;
    let false_northing = sphere_circumference_pixels / 2.0;
    (false_easting, false_northing)
}

/// Mercator-projected pixel coordinates to raster pixel coordinates.
///
/// Projected coordinates have their origin at the equator and the prime
/// meridian, with y increasing northwards. Raster coordinates have their
/// origin at the north-west corner of the world raster (antimeridian,
/// slightly north of 85°), with y increasing southwards.
pub fn apply_raster_transform(x: f64, y: f64, sphere_circumference_pixels: f64) -> (f64, f64) {
    let (false_easting, false_northing) = false_offset(sphere_circumference_pixels);
    (x - false_easting, false_northing - y)
}

/// Raster pixel coordinates back to Mercator-projected pixel coordinates.
///
/// See [`apply_raster_transform`]. The y axis is a reflection, so the same
/// expression serves both directions.
pub fn inverse_raster_transform(x: f64, y: f64, sphere_circumference_pixels: f64) -> (f64, f64) {
    let (false_easting, false_northing) = false_offset(sphere_circumference_pixels);
    (x + false_easting, false_northing - y)
}

#[test]
fn test_false_offset() {
    assert_eq!(false_offset(256.0), (-128.0, 128.0));
    assert_eq!(false_offset(1024.0), (-512.0, 512.0));
}

#[test]
fn test_raster_transform() {
    // Projection origin lands in the middle of the raster
    assert_eq!(apply_raster_transform(0.0, 0.0, 256.0), (128.0, 128.0));
    // North-west corner
    assert_eq!(apply_raster_transform(-128.0, 128.0, 256.0), (0.0, 0.0));
    // South-east corner
    assert_eq!(apply_raster_transform(128.0, -128.0, 256.0), (256.0, 256.0));
    // y flips: north of the equator is above the raster centre
    let (_, y) = apply_raster_transform(0.0, 10.0, 512.0);
    assert_eq!(y, 246.0);

    assert_eq!(inverse_raster_transform(128.0, 128.0, 256.0), (0.0, 0.0));
    assert_eq!(inverse_raster_transform(0.0, 0.0, 256.0), (-128.0, 128.0));
}

#[test]
fn test_raster_transform_involution() {
    let points = [
        (0.0, 0.0),
        (-1234.5, 987.25),
        (1.0e6, -3.0e5),
        (0.001, -0.002),
    ];
    for &circumference in &[256.0, 512.0, 65536.0, 268435456.0] {
        for &(x, y) in &points {
            let (rx, ry) = apply_raster_transform(x, y, circumference);
            let (px, py) = inverse_raster_transform(rx, ry, circumference);
            assert!((px - x).abs() < 1e-6, "x: {} != {}", px, x);
            assert!((py - y).abs() < 1e-6, "y: {} != {}", py, y);
        }
    }
}
