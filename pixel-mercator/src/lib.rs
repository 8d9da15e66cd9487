//! A library for pixel-Mercator tile coordinate calculations
//!
//! Tiles follow the Google Maps / OSM convention: 256x256 pixel tiles,
//! `2^zoom` tiles per side, origin at the north-west corner of the world
//! raster with y growing southwards.
//!
//! ## Lat/lon to tile and pixel offset
//!
//! ```rust
//! use pixel_mercator::ll_to_pixel_mercator;
//!
//! let ((tx, ty), (dx, dy)) = ll_to_pixel_mercator(0.0, 0.0, 0);
//! assert_eq!((tx, ty), (0, 0));
//! assert_eq!((dx, dy), (128.0, 128.0));
//! ```
//!
//! ## Tile and pixel offset to lat/lon
//!
//! The inverse mapping returns **radians**, while the forward mapping takes
//! degrees.
//!
//! ```rust
//! use pixel_mercator::{pixel_mercator_to_ll, pixel_mercator_to_ll_deg};
//!
//! let (lat, lon) = pixel_mercator_to_ll(0, 0, 0.0, 128.0, 0);
//! assert!(lat.abs() < 1e-12);
//! assert!((lon + std::f64::consts::PI).abs() < 1e-12);
//!
//! let (lat_deg, lon_deg) = pixel_mercator_to_ll_deg(1, 0, 0.0, 0.0, 1);
//! assert!(lat_deg > 85.05 && lat_deg < 85.06);
//! assert_eq!(lon_deg, 0.0);
//! ```
//!
//! ## Tiles covering a radius around a site
//!
//! ```rust
//! use pixel_mercator::{find_intersecting_tiles, Tile};
//!
//! let site = (38.9f64.to_radians(), (-77.0f64).to_radians());
//! let tiles = find_intersecting_tiles(Tile::new(0, 0, 0), site.0, site.1, 50_000.0, 3);
//! assert_eq!(tiles[0], Tile::new(0, 0, 0));
//! assert!(tiles.iter().all(|t| t.z <= 3));
//! ```

mod coverage;
pub mod geo_math;
mod mercator;
mod raster;

#[cfg(test)]
mod coverage_test;

pub use coverage::{find_intersecting_tiles, tile_intersects_circle, CoverageIterator, Tile};
pub use mercator::{
    ll_to_pixel_mercator, pixel_mercator_to_ll, pixel_mercator_to_ll_deg,
    sphere_circumference_pixels, tile_bounds, PixelOffset, TileBounds, TileIndex,
};
pub use raster::{
    apply_raster_transform, false_offset, inverse_raster_transform, TILE_DIMENSION_PIXELS,
};
