//! Closed tours over a point set.

use rand::Rng;

use super::PointSet;
use crate::distance::DistanceMatrix;
use crate::error::TourError;

/// A closed tour: a permutation of the point positions `0..n`.
///
/// The last point connects back to the first. Tours can only be built
/// through the constructors below, so every position appears exactly once.
/// Rotations and reflections are distinct values with equal fitness.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::Tour;
///
/// let tour = Tour::from_order(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert!(Tour::from_order(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Uniformly random permutation of `0..n` (Fisher-Yates).
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        for i in (1..order.len()).rev() {
            let j = rng.random_range(0..=i as u64) as usize;
            order.swap(i, j);
        }
        Self { order }
    }

    /// Builds a tour from an explicit order.
    ///
    /// Returns [`TourError::NotAPermutation`] unless `order` holds every
    /// value of `0..order.len()` exactly once.
    pub fn from_order(order: Vec<usize>) -> Result<Self, TourError> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &p in &order {
            if p >= n || seen[p] {
                return Err(TourError::NotAPermutation { len: n });
            }
            seen[p] = true;
        }
        Ok(Self { order })
    }

    /// Point positions in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The same cycle walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut order = self.order.clone();
        order.reverse();
        Self { order }
    }

    /// Swaps the values `b` and `c` wherever they occur.
    ///
    /// Both must be positions of this tour; the result is still a permutation.
    pub(crate) fn substitute(&mut self, b: usize, c: usize) {
        for p in self.order.iter_mut() {
            if *p == b {
                *p = c;
            } else if *p == c {
                *p = b;
            }
        }
    }

    /// Total cyclic length: `d(t[0], t[1]) + ... + d(t[n-1], t[0])`.
    ///
    /// Zero for tours of fewer than two points.
    pub fn fitness(&self, distances: &DistanceMatrix) -> Result<f64, TourError> {
        let n = self.order.len();
        let mut total = 0.0;
        for i in 0..n {
            total += distances.try_get(self.order[i], self.order[(i + 1) % n])?;
        }
        Ok(total)
    }

    /// Maps positions to the stable IDs of the points in `points`.
    pub fn point_ids(&self, points: &PointSet) -> Result<Vec<usize>, TourError> {
        self.order
            .iter()
            .map(|&p| {
                points.get(p).map(|pt| pt.id()).ok_or(TourError::UnknownPoint {
                    index: p,
                    size: points.len(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> (PointSet, DistanceMatrix) {
        let points = PointSet::new(vec![
            Point::new(10, "sw", 0.0, 0.0),
            Point::new(11, "se", 1.0, 0.0),
            Point::new(12, "ne", 1.0, 1.0),
            Point::new(13, "nw", 0.0, 1.0),
        ]);
        let dm = DistanceMatrix::from_points(&points);
        (points, dm)
    }

    #[test]
    fn test_identity() {
        assert_eq!(Tour::identity(4).order(), &[0, 1, 2, 3]);
        assert!(Tour::identity(0).is_empty());
    }

    #[test]
    fn test_from_order_rejects_non_permutations() {
        assert!(Tour::from_order(vec![0, 2]).is_err());
        assert!(Tour::from_order(vec![1, 1]).is_err());
        assert_eq!(
            Tour::from_order(vec![3]),
            Err(TourError::NotAPermutation { len: 1 })
        );
        assert!(Tour::from_order(vec![]).is_ok());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..20 {
            let t = Tour::random(n, &mut rng);
            let mut sorted = t.order().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let a = Tour::random(30, &mut StdRng::seed_from_u64(99));
        let b = Tour::random(30, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fitness_single_and_pair() {
        let (_, dm) = square();
        let one = Tour::identity(1);
        assert_eq!(one.fitness(&dm).expect("in range"), 0.0);

        let points = PointSet::new(vec![
            Point::new(0, "a", 0.0, 0.0),
            Point::new(1, "b", 3.0, 4.0),
        ]);
        let dm2 = DistanceMatrix::from_points(&points);
        let two = Tour::identity(2);
        assert!((two.fitness(&dm2).expect("in range") - 2.0 * dm2.get(0, 1)).abs() < 1e-10);
    }

    #[test]
    fn test_fitness_empty() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(Tour::identity(0).fitness(&dm).expect("empty"), 0.0);
    }

    #[test]
    fn test_fitness_reversal_invariant() {
        let (_, dm) = square();
        let t = Tour::from_order(vec![0, 2, 1, 3]).expect("permutation");
        let f = t.fitness(&dm).expect("in range");
        let r = t.reversed().fitness(&dm).expect("in range");
        assert!((f - r).abs() < 1e-9);
    }

    #[test]
    fn test_fitness_unknown_point() {
        let (_, dm) = square();
        let t = Tour::identity(6);
        assert!(matches!(
            t.fitness(&dm),
            Err(TourError::UnknownPoint { size: 4, .. })
        ));
    }

    #[test]
    fn test_substitute_swaps_values() {
        let mut t = Tour::from_order(vec![0, 2, 1, 3]).expect("permutation");
        t.substitute(2, 1);
        assert_eq!(t.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_point_ids() {
        let (points, _) = square();
        let t = Tour::from_order(vec![3, 1, 0, 2]).expect("permutation");
        assert_eq!(t.point_ids(&points).expect("in range"), vec![13, 11, 10, 12]);
        assert!(Tour::identity(5).point_ids(&points).is_err());
    }

    proptest! {
        #[test]
        fn prop_fitness_reversal_invariant(
            seed in any::<u64>(),
            coords in prop::collection::vec((-180.0f64..=180.0, -90.0f64..=90.0), 0..12),
        ) {
            let points = PointSet::new(
                coords
                    .iter()
                    .enumerate()
                    .map(|(i, &(lon, lat))| Point::new(i, format!("p{i}"), lon, lat)),
            );
            let dm = DistanceMatrix::from_points(&points);
            let tour = Tour::random(points.len(), &mut StdRng::seed_from_u64(seed));
            let forward = tour.fitness(&dm).expect("in range");
            let backward = tour.reversed().fitness(&dm).expect("in range");
            prop_assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
        }
    }
}
