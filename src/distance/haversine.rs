//! Haversine great-circle distance.
//!
//! # Algorithm
//!
//! ```text
//! a = sin²(Δlat/2) + cos(lat_a)·cos(lat_b)·sin²(Δlon/2)
//! d = 2·R·asin(√a)
//! ```
//!
//! with all angles in radians and `R` the mean Earth radius.

use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Symmetric and non-negative. Zero exactly when both points share the same
/// coordinates, regardless of their IDs.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Point;
/// use geo_tsp::distance::haversine_km;
///
/// let a = Point::new(0, "a", 0.0, 0.0);
/// let b = Point::new(1, "b", 0.0, 1.0);
/// // One degree of latitude.
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: &Point, b: &Point) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = b.longitude().to_radians() - a.longitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 near antipodes.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
