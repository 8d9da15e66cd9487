//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Mercator projection onto the tile pyramid
//!
//! No range checks are done. Latitudes beyond ±85.0511° map outside the tile
//! grid, and a latitude of exactly ±90° projects to an infinite y which ends
//! up as a saturated tile index and a NaN offset.

use crate::raster::{apply_raster_transform, inverse_raster_transform, TILE_DIMENSION_PIXELS};
use std::f64::consts;

/// Tile address at a zoom level
pub type TileIndex = (i64, i64);
/// Pixel position within a tile
pub type PixelOffset = (f64, f64);

/// Circumference of the world raster in pixels (`2^zoom * 256`)
pub fn sphere_circumference_pixels(zoom: u8) -> f64 {
    let tiles_per_side = (zoom as f64).exp2();
    tiles_per_side * TILE_DIMENSION_PIXELS as f64
}

fn sphere_radius_pixels(sphere_circumference_pixels: f64) -> f64 {
    sphere_circumference_pixels / (2.0 * consts::PI)
}

/// Maps a lat/lon in decimal degrees to the pixel-Mercator tile pyramid at
/// the given zoom level.
///
/// Returns `((tile_x, tile_y), (offset_x, offset_y))`, where the offsets are
/// the pixel position from the north-west corner of the tile. The split uses
/// floor division and a non-negative remainder, so the offsets are in
/// `[0, 256)` for any point on the world raster.
pub fn ll_to_pixel_mercator(lat_deg: f64, lon_deg: f64, zoom: u8) -> (TileIndex, PixelOffset) {
    let circumference = sphere_circumference_pixels(zoom);
    let r = sphere_radius_pixels(circumference);

    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let projected_x = r * lon;
    let projected_y = (r / 2.0) * ((1.0 + lat.sin()) / (1.0 - lat.sin())).ln();

    let (zoomed_x, zoomed_y) = apply_raster_transform(projected_x, projected_y, circumference);

    let (tile_x, offset_x) = split_pixel(zoomed_x);
    let (tile_y, offset_y) = split_pixel(zoomed_y);
    ((tile_x, tile_y), (offset_x, offset_y))
}

/// Absolute raster pixel to (tile index, offset within tile)
fn split_pixel(coord: f64) -> (i64, f64) {
    let dim = TILE_DIMENSION_PIXELS as f64;
    (coord.div_euclid(dim) as i64, coord.rem_euclid(dim))
}

/// Maps a tile address and pixel offset at the given zoom level to
/// `(lat, lon)` **in radians**.
///
/// Note the asymmetry with [`ll_to_pixel_mercator`], which takes degrees.
/// Use [`pixel_mercator_to_ll_deg`] to get degrees back.
///
/// The inverse projection never diverges: every input yields a latitude in
/// `[-π/2, π/2]`.
pub fn pixel_mercator_to_ll(
    tile_x: i64,
    tile_y: i64,
    offset_x: f64,
    offset_y: f64,
    zoom: u8,
) -> (f64, f64) {
    let circumference = sphere_circumference_pixels(zoom);
    let r = sphere_radius_pixels(circumference);
    let dim = TILE_DIMENSION_PIXELS as f64;

    let zoomed_x = tile_x as f64 * dim + offset_x;
    let zoomed_y = tile_y as f64 * dim + offset_y;

    let (projected_x, projected_y) = inverse_raster_transform(zoomed_x, zoomed_y, circumference);

    let lat = consts::FRAC_PI_2 - 2.0 * (-projected_y / r).exp().atan();
    let lon = projected_x / r;
    (lat, lon)
}

/// Same as [`pixel_mercator_to_ll`], converted to decimal degrees
pub fn pixel_mercator_to_ll_deg(
    tile_x: i64,
    tile_y: i64,
    offset_x: f64,
    offset_y: f64,
    zoom: u8,
) -> (f64, f64) {
    let (lat, lon) = pixel_mercator_to_ll(tile_x, tile_y, offset_x, offset_y, zoom);
    (lat.to_degrees(), lon.to_degrees())
}

/// Geographic bounds of a tile, in radians
#[derive(PartialEq, Clone, Debug)]
pub struct TileBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Bounds of the tile `(tile_x, tile_y)` at `zoom`, in radians
pub fn tile_bounds(tile_x: i64, tile_y: i64, zoom: u8) -> TileBounds {
    let dim = TILE_DIMENSION_PIXELS as f64;
    let (north, west) = pixel_mercator_to_ll(tile_x, tile_y, 0.0, 0.0, zoom);
    let (south, east) = pixel_mercator_to_ll(tile_x, tile_y, dim, dim, zoom);
    TileBounds {
        north,
        south,
        east,
        west,
    }
}
