//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coverage::{find_intersecting_tiles, tile_intersects_circle, CoverageIterator, Tile};
use crate::mercator::ll_to_pixel_mercator;
use std::collections::HashSet;

/// Washington, DC in radians
fn site() -> (f64, f64) {
    (38.9f64.to_radians(), (-77.0f64).to_radians())
}

#[test]
fn test_tile() {
    let tile = Tile::new(4, 6, 4);
    assert_eq!(
        tile.children(),
        [
            Tile::new(8, 12, 5),
            Tile::new(9, 12, 5),
            Tile::new(8, 13, 5),
            Tile::new(9, 13, 5),
        ]
    );
    assert_eq!(tile.to_string(), "4/4/6");
}

#[test]
fn test_tile_intersection() {
    let (lat, lon) = site();
    // Tile containing the site, regardless of radius
    assert!(tile_intersects_circle(0, 0, 0, lat, lon, 0.0));
    assert!(tile_intersects_circle(4, 6, 4, lat, lon, 0.0));
    assert!(tile_intersects_circle(18, 24, 6, lat, lon, 0.0));

    // Western neighbour (side section) is 230 km but not 50 km away
    assert!(tile_intersects_circle(17, 24, 6, lat, lon, 230_000.0));
    assert!(!tile_intersects_circle(17, 24, 6, lat, lon, 50_000.0));

    // South-eastern quadrant is on the other side of the world
    assert!(!tile_intersects_circle(1, 1, 1, lat, lon, 100_000.0));
    let (sydney_lat, sydney_lon) = ((-33.87f64).to_radians(), 151.2f64.to_radians());
    assert!(!tile_intersects_circle(0, 0, 1, sydney_lat, sydney_lon, 100_000.0));
    assert!(tile_intersects_circle(1, 1, 1, sydney_lat, sydney_lon, 100_000.0));
}

#[test]
fn test_find_intersecting_tiles() {
    let (lat, lon) = site();

    let tiles = find_intersecting_tiles(Tile::new(0, 0, 0), lat, lon, 230_000.0, 6);
    assert_eq!(
        tiles,
        vec![
            Tile::new(0, 0, 0),
            Tile::new(0, 0, 1),
            Tile::new(1, 1, 2),
            Tile::new(2, 3, 3),
            Tile::new(4, 6, 4),
            Tile::new(8, 12, 5),
            Tile::new(17, 24, 6),
            Tile::new(9, 12, 5),
            Tile::new(18, 24, 6),
        ]
    );

    // Starting below the root
    let tiles = find_intersecting_tiles(Tile::new(4, 6, 4), lat, lon, 230_000.0, 6);
    assert_eq!(tiles.len(), 5);
    assert_eq!(tiles[0], Tile::new(4, 6, 4));

    // Non-intersecting start tile
    let tiles = find_intersecting_tiles(Tile::new(1, 1, 1), lat, lon, 230_000.0, 6);
    assert!(tiles.is_empty());

    // Start tile beyond max zoom
    let tiles = find_intersecting_tiles(Tile::new(4, 6, 4), lat, lon, 230_000.0, 3);
    assert!(tiles.is_empty());

    // Start tile at max zoom
    let tiles = find_intersecting_tiles(Tile::new(4, 6, 4), lat, lon, 230_000.0, 4);
    assert_eq!(tiles, vec![Tile::new(4, 6, 4)]);
}

#[test]
fn test_zero_radius_follows_site() {
    let (lat, lon) = site();
    let tiles = find_intersecting_tiles(Tile::new(0, 0, 0), lat, lon, 0.0, 10);
    assert_eq!(tiles.len(), 11);
    for tile in tiles {
        let ((tx, ty), _) = ll_to_pixel_mercator(38.9, -77.0, tile.z);
        assert_eq!((tile.x, tile.y), (tx, ty));
    }
}

#[test]
fn test_parents_before_children() {
    let (lat, lon) = site();
    let tiles: Vec<Tile> =
        CoverageIterator::new(Tile::new(0, 0, 0), lat, lon, 500_000.0, 7).collect();
    assert_eq!(tiles.len(), 43);
    assert_eq!(tiles.iter().filter(|t| t.z == 7).count(), 23);

    let mut seen = HashSet::new();
    for tile in &tiles {
        if tile.z > 0 {
            let parent = Tile::new(tile.x.div_euclid(2), tile.y.div_euclid(2), tile.z - 1);
            assert!(seen.contains(&parent), "{} before its parent", tile);
        }
        assert!(seen.insert(*tile), "{} visited twice", tile);
        assert!(tile_intersects_circle(tile.x, tile.y, tile.z, lat, lon, 500_000.0));
    }
}
