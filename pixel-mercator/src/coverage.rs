//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tiles covering a circle around a site

use crate::geo_math::great_circle_distance;
use crate::mercator::tile_bounds;
use std::fmt;

/// Tile address with zoom level
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

impl Tile {
    pub fn new(x: i64, y: i64, z: u8) -> Tile {
        Tile { x, y, z }
    }
    /// The four tiles covering this one at the next zoom level, in
    /// row-major order.
    pub fn children(&self) -> [Tile; 4] {
        let (x, y, z) = (self.x * 2, self.y * 2, self.z + 1);
        [
            Tile::new(x, y, z),
            Tile::new(x + 1, y, z),
            Tile::new(x, y + 1, z),
            Tile::new(x + 1, y + 1, z),
        ]
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Test whether a tile intersects a circle of `distance` meters around the
/// site `lat`/`lon` (radians).
pub fn tile_intersects_circle(
    tile_x: i64,
    tile_y: i64,
    zoom: u8,
    lat: f64,
    lon: f64,
    distance: f64,
) -> bool {
    let bounds = tile_bounds(tile_x, tile_y, zoom);
    let (north, south, east, west) = (bounds.north, bounds.south, bounds.east, bounds.west);

    // The tile edges cut the plane into nine sections. Outside corners are
    // tested against the nearest tile corner, outside sides against the
    // nearest edge point on the site's meridian or parallel. In the centre
    // section the site lies on the tile.
    let all_north = north > lat && south > lat;
    let all_south = north < lat && south < lat;
    let all_east = east > lon && west > lon;
    let all_west = east < lon && west < lon;

    if !(all_north || all_south || all_east || all_west) {
        return true;
    }
    let nearest_lat = if all_north {
        south
    } else if all_south {
        north
    } else {
        lat
    };
    let nearest_lon = if all_east {
        west
    } else if all_west {
        east
    } else {
        lon
    };
    great_circle_distance(lat, lon, nearest_lat, nearest_lon) < distance
}

/// Depth-first walk over the tile pyramid below a start tile, yielding the
/// tiles intersecting a circle around a site
pub struct CoverageIterator {
    lat: f64,
    lon: f64,
    distance: f64,
    max_zoom: u8,
    stack: Vec<Tile>,
}

impl CoverageIterator {
    pub fn new(start: Tile, lat: f64, lon: f64, distance: f64, max_zoom: u8) -> CoverageIterator {
        CoverageIterator {
            lat,
            lon,
            distance,
            max_zoom,
            stack: vec![start],
        }
    }
}

impl Iterator for CoverageIterator {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tile) = self.stack.pop() {
            if tile.z > self.max_zoom {
                continue;
            }
            // Tiles below a non-intersecting tile can't intersect either
            if !tile_intersects_circle(tile.x, tile.y, tile.z, self.lat, self.lon, self.distance) {
                continue;
            }
            if tile.z < self.max_zoom {
                self.stack.extend(tile.children().iter().rev());
            }
            return Some(tile);
        }
        None
    }
}

/// All tiles from `start` down to `max_zoom` intersecting a circle of
/// `distance` meters around `lat`/`lon` (radians), parents before children.
pub fn find_intersecting_tiles(
    start: Tile,
    lat: f64,
    lon: f64,
    distance: f64,
    max_zoom: u8,
) -> Vec<Tile> {
    CoverageIterator::new(start, lat, lon, distance, max_zoom).collect()
}
