//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical geometry helpers
//!
//! Angles are in radians unless the name says otherwise, distances in meters.
//! The earth is treated as a sphere.

/// Radius of curvature of the geoid at about 39° latitude, in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6364784.3;

/// Haversine function
pub fn haversin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Central angle between two lat/lon pairs (haversine formula)
pub fn central_angle(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let delta_lat = lat_b - lat_a;
    let delta_lon = lon_b - lon_a;

    let h = haversin(delta_lat) + lat_a.cos() * lat_b.cos() * haversin(delta_lon);
    2.0 * h.sqrt().asin()
}

/// Great circle distance in meters between two lat/lon pairs
pub fn great_circle_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    MEAN_EARTH_RADIUS * central_angle(lat_a, lon_a, lat_b, lon_b)
}

/// Initial bearing **in degrees** (`[0, 360)`, clockwise from north) from
/// point a towards point b.
pub fn initial_bearing_deg(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let delta_lon = lon_b - lon_a;
    let opposite = delta_lon.sin() * lat_b.cos();
    let adjacent = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * delta_lon.cos();

    let bearing = opposite.atan2(adjacent).to_degrees();
    if bearing >= 0.0 {
        bearing
    } else {
        bearing + 360.0
    }
}
