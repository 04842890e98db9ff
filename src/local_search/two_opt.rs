//! 2-opt improvement of a closed tour by value substitution.
//!
//! # Algorithm
//!
//! For every ordered pair of tour positions `(i, j)`, read the directed edges
//! `(a, b) = (t[i], t[i+1])` and `(c, d) = (t[j], t[j+1])` (indices wrap).
//! If
//!
//! ```text
//! d(a, b) + d(c, d) > d(a, c) + d(b, d)
//! ```
//!
//! the points `b` and `c` trade places: every position holding `b` now holds
//! `c` and vice versa. Passes repeat until one makes no swap.
//!
//! The move exchanges two values instead of reversing the segment `b..=c`.
//! The two coincide when `b` and `c` are neighbours (always the case for
//! four points) but differ on longer segments, which changes which local
//! optimum is reached. There is no non-adjacency filter: adjacent pairs
//! compare equal on both sides and never pass the strict test.
//!
//! Because a substitution on a long segment can lengthen the tour, the number
//! of passes is capped.
//!
//! # Complexity
//!
//! O(n²) comparisons per pass, each swap O(n).

use tracing::{trace, warn};

use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::models::Tour;

/// Result of [`two_opt_improve`].
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The improved tour.
    pub tour: Tour,
    /// Cyclic length of `tour` in kilometers.
    pub fitness: f64,
    /// Passes run, including the final stable pass.
    pub passes: usize,
    /// Substitutions performed across all passes.
    pub swaps: usize,
    /// `false` when the pass cap stopped the search before a stable pass.
    pub converged: bool,
}

/// Applies 2-opt substitution moves to `tour` until no pair of edges improves.
///
/// # Arguments
///
/// * `tour` — Starting tour; must visit every point of `distances`
/// * `distances` — Distance matrix of the current point set
/// * `max_passes` — Upper bound on full passes over the edge pairs
///
/// # Errors
///
/// [`TourError::UnknownPoint`] or [`TourError::StaleTour`] if the tour does
/// not match the matrix.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::{Point, PointSet, Tour};
/// use geo_tsp::distance::DistanceMatrix;
/// use geo_tsp::local_search::two_opt_improve;
///
/// let points = PointSet::new(vec![
///     Point::new(0, "sw", 0.0, 0.0),
///     Point::new(1, "se", 2.0, 0.0),
///     Point::new(2, "ne", 2.0, 1.0),
///     Point::new(3, "nw", 0.0, 1.0),
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// // Crosses both diagonals.
/// let crossing = Tour::from_order(vec![0, 2, 1, 3]).unwrap();
/// let outcome = two_opt_improve(crossing, &dm, 100).unwrap();
/// let perimeter = Tour::identity(4).fitness(&dm).unwrap();
/// assert!((outcome.fitness - perimeter).abs() < 1e-9);
/// assert!(outcome.converged);
/// ```
pub fn two_opt_improve(
    tour: Tour,
    distances: &DistanceMatrix,
    max_passes: usize,
) -> Result<TwoOptOutcome, TourError> {
    distances.check_tour(&tour)?;

    let mut current = tour;
    let n = current.len();
    let mut passes = 0;
    let mut swaps = 0;
    let mut stable = false;

    while !stable && passes < max_passes {
        stable = true;
        passes += 1;
        let mut pass_swaps = 0;

        for i in 0..n {
            for j in 0..n {
                if let Some((b, c)) = improving_pair(current.order(), distances, i, j) {
                    current.substitute(b, c);
                    pass_swaps += 1;
                    stable = false;
                }
            }
        }

        swaps += pass_swaps;
        trace!(event = "two_opt_pass", pass = passes, swaps = pass_swaps);
    }

    if !stable {
        warn!(
            event = "two_opt_pass_cap",
            max_passes = max_passes,
            swaps = swaps,
            points = n,
        );
    }

    let fitness = current.fitness(distances)?;
    Ok(TwoOptOutcome {
        tour: current,
        fitness,
        passes,
        swaps,
        converged: stable,
    })
}

/// Returns the values `(b, c)` to substitute if the edges starting at
/// positions `i` and `j` pass the improvement test.
///
/// A position paired with itself names a single edge and has nothing to
/// exchange.
fn improving_pair(
    order: &[usize],
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> Option<(usize, usize)> {
    if i == j {
        return None;
    }
    let n = order.len();
    let (a, b) = (order[i], order[(i + 1) % n]);
    let (c, d) = (order[j], order[(j + 1) % n]);

    let old_cost = distances.get(a, b) + distances.get(c, d);
    let new_cost = distances.get(a, c) + distances.get(b, d);

    (old_cost > new_cost).then_some((b, c))
}
