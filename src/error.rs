//! Error types.

use thiserror::Error;

/// Errors raised when a tour does not agree with the distance matrix it is
/// evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A tour or lookup references a point the matrix does not contain.
    ///
    /// Usually a tour held across a re-import. Discard it and resample.
    #[error("unknown point index {index} (matrix holds {size} points)")]
    UnknownPoint {
        /// Offending point index.
        index: usize,
        /// Number of points in the matrix.
        size: usize,
    },

    /// The tour visits a different number of points than the matrix holds.
    #[error("stale tour of {tour_len} points for a matrix of {matrix_size}")]
    StaleTour {
        /// Tour length.
        tour_len: usize,
        /// Matrix size.
        matrix_size: usize,
    },

    /// The given order is not a permutation of `0..n`.
    #[error("order is not a permutation of 0..{len}")]
    NotAPermutation {
        /// Length of the rejected order.
        len: usize,
    },
}

/// Errors raised while importing city records.
#[derive(Debug, Error)]
pub enum ImportError {
    /// An admitted city lies outside [-180, 180] × [-90, 90].
    #[error("invalid coordinate for {name}: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinate {
        /// City name.
        name: String,
        /// Longitude in degrees.
        longitude: f64,
        /// Latitude in degrees.
        latitude: f64,
    },

    /// A population is negative, non-finite or not a number.
    #[error("invalid population for {name}: {value:?}")]
    InvalidPopulation {
        /// City name.
        name: String,
        /// The population as found in the record.
        value: String,
    },

    /// The city file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a JSON array of city records.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_error_messages() {
        let e = TourError::UnknownPoint { index: 7, size: 3 };
        assert_eq!(e.to_string(), "unknown point index 7 (matrix holds 3 points)");

        let e = TourError::StaleTour {
            tour_len: 4,
            matrix_size: 5,
        };
        assert_eq!(e.to_string(), "stale tour of 4 points for a matrix of 5");
    }

    #[test]
    fn test_import_error_from_json() {
        let err = serde_json::from_str::<Vec<u32>>("[1,").expect_err("truncated");
        let e: ImportError = err.into();
        assert!(matches!(e, ImportError::Json(_)));
        assert!(e.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_import_error_messages() {
        let e = ImportError::InvalidPopulation {
            name: "X".into(),
            value: "lots".into(),
        };
        assert_eq!(e.to_string(), "invalid population for X: \"lots\"");
    }
}
