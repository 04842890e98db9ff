//! Dense distance matrix.

use crate::error::TourError;
use crate::models::{PointSet, Tour};

/// A dense n×n distance matrix in kilometers, stored in row-major order.
///
/// Built once per point set and read-only afterwards; indices are positions
/// in that set.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::{Point, PointSet};
/// use geo_tsp::distance::DistanceMatrix;
///
/// let points = PointSet::new(vec![
///     Point::new(0, "a", 0.0, 0.0),
///     Point::new(1, "b", 1.0, 0.0),
///     Point::new(2, "c", 1.0, 1.0),
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// assert!(dm.try_get(0, 3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine distance matrix of a point set.
    ///
    /// Each unordered pair is evaluated once and written in both directions.
    pub fn from_points(points: &PointSet) -> Self {
        let points = points.points();
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or
    /// [`TourError::UnknownPoint`] if either index is not in the matrix.
    pub fn try_get(&self, from: usize, to: usize) -> Result<f64, TourError> {
        for index in [from, to] {
            if index >= self.size {
                return Err(TourError::UnknownPoint {
                    index,
                    size: self.size,
                });
            }
        }
        Ok(self.get(from, to))
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that `tour` visits exactly the points of this matrix.
    pub fn check_tour(&self, tour: &Tour) -> Result<(), TourError> {
        if let Some(&index) = tour.order().iter().find(|&&p| p >= self.size) {
            return Err(TourError::UnknownPoint {
                index,
                size: self.size,
            });
        }
        if tour.len() != self.size {
            return Err(TourError::StaleTour {
                tour_len: tour.len(),
                matrix_size: self.size,
            });
        }
        Ok(())
    }
}
