//! City records and the population filter.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ImportError;
use crate::models::{Point, PointSet};

/// Population as found in city data: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Population {
    /// Integer count.
    Count(u64),
    /// Non-integer count, truncated when read.
    Fractional(f64),
    /// Count written as a string.
    Text(String),
}

impl Population {
    /// Reads the population as an integer, truncating fractions.
    ///
    /// Returns `None` for negative, non-finite or non-numeric values.
    pub fn value(&self) -> Option<u64> {
        match self {
            Population::Count(n) => Some(*n),
            Population::Fractional(x) if x.is_finite() && *x >= 0.0 => Some(x.trunc() as u64),
            Population::Fractional(_) => None,
            Population::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One city as supplied by the data source.
///
/// # Examples
///
/// ```
/// use geo_tsp::import::CityRecord;
///
/// let record: CityRecord = serde_json::from_str(
///     r#"{"city": "Chicago", "longitude": -87.63, "latitude": 41.88, "population": "2718782"}"#,
/// ).unwrap();
/// assert_eq!(record.city, "Chicago");
/// assert_eq!(record.population.value(), Some(2_718_782));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CityRecord {
    /// City name.
    pub city: String,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Number of inhabitants.
    pub population: Population,
}

impl CityRecord {
    fn has_valid_coordinates(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

/// Admits cities with strictly more inhabitants than `min_population`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportFilter {
    min_population: u64,
}

impl ImportFilter {
    /// Creates a filter with the given threshold.
    pub fn new(min_population: u64) -> Self {
        Self { min_population }
    }

    /// Population threshold.
    pub fn min_population(&self) -> u64 {
        self.min_population
    }

    /// Returns `true` if a city of this population passes.
    pub fn admits(&self, population: u64) -> bool {
        population > self.min_population
    }
}

impl Default for ImportFilter {
    fn default() -> Self {
        Self::new(500_000)
    }
}

/// Builds a point set from the records that pass `filter`.
///
/// Point IDs are the record positions in `records`. A record repeating the
/// name and coordinates of an admitted one is dropped. Coordinates are
/// checked only for admitted cities.
///
/// # Errors
///
/// [`ImportError::InvalidPopulation`] for a population that is not a count,
/// [`ImportError::InvalidCoordinate`] for an admitted city outside
/// [-180, 180] × [-90, 90].
pub fn import_cities(
    records: &[CityRecord],
    filter: &ImportFilter,
) -> Result<PointSet, ImportError> {
    let mut points: Vec<Point> = Vec::new();

    for (id, record) in records.iter().enumerate() {
        let population = record.population.value().ok_or_else(|| {
            ImportError::InvalidPopulation {
                name: record.city.clone(),
                value: format!("{:?}", record.population),
            }
        })?;
        if !filter.admits(population) {
            continue;
        }
        if !record.has_valid_coordinates() {
            return Err(ImportError::InvalidCoordinate {
                name: record.city.clone(),
                longitude: record.longitude,
                latitude: record.latitude,
            });
        }
        let duplicate = points.iter().any(|p| {
            p.name() == record.city
                && p.longitude() == record.longitude
                && p.latitude() == record.latitude
        });
        if duplicate {
            continue;
        }
        points.push(Point::new(
            id,
            record.city.clone(),
            record.longitude,
            record.latitude,
        ));
    }

    info!(
        event = "cities_imported",
        records = records.len(),
        admitted = points.len(),
        min_population = filter.min_population(),
    );
    Ok(PointSet::new(points))
}

/// Parses a JSON array of city records and imports it.
pub fn import_cities_json(json: &str, filter: &ImportFilter) -> Result<PointSet, ImportError> {
    let records: Vec<CityRecord> = serde_json::from_str(json)?;
    import_cities(&records, filter)
}

/// Reads a JSON array of city records from a file and imports it.
pub fn import_cities_file(
    path: impl AsRef<Path>,
    filter: &ImportFilter,
) -> Result<PointSet, ImportError> {
    let contents = std::fs::read_to_string(path)?;
    import_cities_json(&contents, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITIES: &str = r#"[
        {"city": "New York", "longitude": -74.0059, "latitude": 40.7127, "population": "8405837"},
        {"city": "Smallville", "longitude": -95.0, "latitude": 39.0, "population": "1200"},
        {"city": "Chicago", "longitude": -87.6298, "latitude": 41.8781, "population": 2718782},
        {"city": "Borderline", "longitude": -90.0, "latitude": 35.0, "population": 500000},
        {"city": "New York", "longitude": -74.0059, "latitude": 40.7127, "population": "8405837"}
    ]"#;

    #[test]
    fn test_population_forms() {
        assert_eq!(Population::Count(12).value(), Some(12));
        assert_eq!(Population::Fractional(12.9).value(), Some(12));
        assert_eq!(Population::Fractional(-1.0).value(), None);
        assert_eq!(Population::Text(" 42 ".into()).value(), Some(42));
        assert_eq!(Population::Text("n/a".into()).value(), None);
    }

    #[test]
    fn test_filter_is_strict() {
        let filter = ImportFilter::default();
        assert!(!filter.admits(500_000));
        assert!(filter.admits(500_001));
    }

    #[test]
    fn test_import_json_filters_and_dedups() {
        let set = import_cities_json(CITIES, &ImportFilter::default()).expect("valid");
        let names: Vec<_> = set.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["New York", "Chicago"]);
        let ids: Vec<_> = set.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_import_zero_threshold_admits_all_but_duplicates() {
        let set = import_cities_json(CITIES, &ImportFilter::new(0)).expect("valid");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_invalid_coordinate() {
        let records = vec![CityRecord {
            city: "Nowhere".into(),
            longitude: 200.0,
            latitude: 10.0,
            population: Population::Count(1_000_000),
        }];
        let err = import_cities(&records, &ImportFilter::default()).expect_err("out of range");
        assert!(matches!(err, ImportError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_filtered_city_is_not_validated() {
        let records = vec![CityRecord {
            city: "Tiny".into(),
            longitude: 0.0,
            latitude: 95.0,
            population: Population::Count(10),
        }];
        let set = import_cities(&records, &ImportFilter::default()).expect("filtered out");
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_population() {
        let json = r#"[{"city": "X", "longitude": 0, "latitude": 0, "population": "lots"}]"#;
        let err = import_cities_json(json, &ImportFilter::default()).expect_err("bad population");
        assert!(matches!(err, ImportError::InvalidPopulation { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = import_cities_json("{", &ImportFilter::default()).expect_err("bad json");
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = import_cities_file("no/such/cities.json", &ImportFilter::default())
            .expect_err("missing");
        assert!(matches!(err, ImportError::Io(_)));
    }
}
