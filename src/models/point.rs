//! Geographic point and point set types.

use crate::distance::haversine_km;

/// A named location given by longitude and latitude in degrees.
///
/// Coordinates are not validated here; the importer rejects out-of-range
/// values before points are built.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Point;
///
/// let paris = Point::new(0, "Paris", 2.3522, 48.8566);
/// assert_eq!(paris.id(), 0);
/// assert_eq!(paris.name(), "Paris");
/// assert_eq!(paris.latitude(), 48.8566);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: usize,
    name: String,
    longitude: f64,
    latitude: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            longitude,
            latitude,
        }
    }

    /// Stable point ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_km(self, other)
    }
}

/// An ordered, deduplicated collection of points.
///
/// Points are deduplicated by ID; the first occurrence wins. A point set is
/// built once per import and replaced wholesale, never edited. Tours and
/// distance matrices address points by their position in this set.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::{Point, PointSet};
///
/// let set = PointSet::new(vec![
///     Point::new(1, "A", 0.0, 0.0),
///     Point::new(2, "B", 1.0, 0.0),
///     Point::new(1, "A again", 5.0, 5.0),
/// ]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(1).map(|p| p.id()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Builds a point set, dropping points whose ID was already seen.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let points = points.into_iter().filter(|p| seen.insert(p.id)).collect();
        Self { points }
    }

    /// Returns an empty point set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
