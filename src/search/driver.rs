//! Random-restart driver.
//!
//! # Algorithm
//!
//! On each tick:
//!
//! 1. Draw a uniformly random tour.
//! 2. Improve it with 2-opt until stable (or the pass cap).
//! 3. If it is strictly shorter than the best tour of the run, promote it and
//!    report [`EventKind::Best`]; otherwise report [`EventKind::Current`].
//!
//! The driver never cancels itself; the host stops calling [`SearchDriver::tick`].

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{EventKind, SearchEvent, SearchState, TourObserver};
use crate::config::{ConfigError, SearchConfig};
use crate::distance::DistanceMatrix;
use crate::error::TourError;
use crate::local_search::two_opt_improve;
use crate::models::{PointSet, Tour};

/// Import generations are unique across every driver in the process.
/// Fresh states hold generation 0, which is never handed out.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Whether the driver is producing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Ticks are no-ops until [`SearchDriver::run`].
    Idle,
    /// Every tick samples and optimizes a tour.
    Searching,
}

/// Random-restart 2-opt search over one point set.
///
/// Owns the point set, its distance matrix and the random source, so the
/// matrix always matches the points. Search progress lives in a
/// [`SearchState`] passed to each tick.
///
/// # Examples
///
/// ```
/// use geo_tsp::models::{Point, PointSet};
/// use geo_tsp::search::{SearchDriver, SearchState};
/// use std::sync::atomic::{AtomicU64, Ordering};

/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = PointSet::new(vec![
///     Point::new(0, "Paris", 2.3522, 48.8566),
///     Point::new(1, "London", -0.1276, 51.5072),
///     Point::new(2, "Berlin", 13.405, 52.52),
///     Point::new(3, "Rome", 12.4964, 41.9028),
/// ]);
/// let mut driver = SearchDriver::with_rng(points, StdRng::seed_from_u64(42), 1_000);
/// let mut state = SearchState::new();
///
/// driver.run();
/// let event = driver.tick(&mut state).unwrap().expect("searching");
/// assert!(event.is_best());
/// assert_eq!(state.best_fitness(), event.fitness);
/// ```
#[derive(Debug)]
pub struct SearchDriver<R> {
    points: PointSet,
    distances: DistanceMatrix,
    rng: R,
    max_passes: usize,
    phase: DriverPhase,
    generation: u64,
}

impl SearchDriver<StdRng> {
    /// Creates a driver seeded from `config.random_seed`, or from the OS
    /// when no seed is set.
    pub fn from_config(points: PointSet, config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(points, rng, config.max_passes))
    }
}

impl<R: Rng> SearchDriver<R> {
    /// Creates an idle driver with an explicit random source.
    ///
    /// # Panics
    ///
    /// Panics if `max_passes` is zero, which [`SearchConfig::validate`]
    /// rejects as well.
    pub fn with_rng(points: PointSet, rng: R, max_passes: usize) -> Self {
        assert!(max_passes > 0, "max_passes must be positive");
        let distances = DistanceMatrix::from_points(&points);
        let generation = next_generation();
        info!(event = "point_set_loaded", points = points.len(), generation);
        Self {
            points,
            distances,
            rng,
            max_passes,
            phase: DriverPhase::Idle,
            generation,
        }
    }

    /// Replaces the point set and rebuilds the matrix.
    ///
    /// The driver returns to [`DriverPhase::Idle`]. States filled under any
    /// other import, by this driver or another, are reset on their next tick.
    pub fn import(&mut self, points: PointSet) {
        self.distances = DistanceMatrix::from_points(&points);
        self.points = points;
        self.generation = next_generation();
        self.phase = DriverPhase::Idle;
        info!(
            event = "point_set_loaded",
            points = self.points.len(),
            generation = self.generation,
        );
    }

    /// Starts searching.
    pub fn run(&mut self) {
        self.phase = DriverPhase::Searching;
        info!(event = "search_start", points = self.points.len());
    }

    /// Stops searching; later ticks are no-ops.
    pub fn stop(&mut self) {
        self.phase = DriverPhase::Idle;
        info!(event = "search_stop");
    }

    /// Current phase.
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// The point set being searched.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Distance matrix of the point set.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Runs one restart and reports it.
    ///
    /// Returns `Ok(None)` while idle or when the point set is empty.
    pub fn tick(&mut self, state: &mut SearchState) -> Result<Option<SearchEvent>, TourError> {
        if self.phase == DriverPhase::Idle {
            return Ok(None);
        }
        if state.generation() != self.generation {
            if state.ticks() > 0 {
                warn!(
                    event = "stale_state_reset",
                    state_generation = state.generation(),
                    generation = self.generation,
                );
            }
            state.rebind(self.generation);
        }
        if self.points.is_empty() {
            warn!(event = "empty_point_set");
            return Ok(None);
        }

        let sample = Tour::random(self.points.len(), &mut self.rng);
        let outcome = two_opt_improve(sample, &self.distances, self.max_passes)?;
        let tour = outcome.tour.point_ids(&self.points)?;
        let fitness = outcome.fitness;

        let kind = if state.record(outcome.tour, fitness) {
            info!(event = "new_best", tick = state.ticks(), fitness = fitness);
            EventKind::Best
        } else {
            EventKind::Current
        };
        debug!(
            event = "tick",
            tick = state.ticks(),
            fitness = fitness,
            best_fitness = state.best_fitness(),
            passes = outcome.passes,
            swaps = outcome.swaps,
            converged = outcome.converged,
        );

        Ok(Some(SearchEvent {
            kind,
            tour,
            fitness,
        }))
    }

    /// Runs one tick and hands its event, if any, to `observer`.
    pub fn tick_with<O: TourObserver + ?Sized>(
        &mut self,
        state: &mut SearchState,
        observer: &mut O,
    ) -> Result<Option<EventKind>, TourError> {
        let event = self.tick(state)?;
        Ok(event.map(|e| {
            observer.on_event(&e);
            e.kind
        }))
    }

    /// Runs `count` ticks; returns how many produced an event.
    pub fn run_ticks<O: TourObserver + ?Sized>(
        &mut self,
        state: &mut SearchState,
        count: usize,
        observer: &mut O,
    ) -> Result<usize, TourError> {
        let mut emitted = 0;
        for _ in 0..count {
            if self.tick_with(state, observer)?.is_some() {
                emitted += 1;
            }
        }
        Ok(emitted)
    }
}
