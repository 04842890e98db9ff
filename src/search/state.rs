//! Search state of one run.

use crate::models::Tour;

/// Best and latest tours of one search run.
///
/// Only [`SearchDriver::tick`](super::SearchDriver::tick) mutates a state.
/// `best_fitness` starts at infinity and never increases until
/// [`reset`](Self::reset). A state belongs to one point set import; the
/// driver resets it when handed a state from any other import.
///
/// # Examples
///
/// ```
/// use geo_tsp::search::SearchState;
///
/// let state = SearchState::new();
/// assert!(state.best().is_none());
/// assert_eq!(state.best_fitness(), f64::INFINITY);
/// assert_eq!(state.ticks(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SearchState {
    best: Option<Tour>,
    best_fitness: f64,
    current: Option<Tour>,
    ticks: u64,
    generation: u64,
}

impl SearchState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self {
            best: None,
            best_fitness: f64::INFINITY,
            current: None,
            ticks: 0,
            generation: 0,
        }
    }

    /// Forgets all tours, as on an explicit restart.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::new();
        self.generation = generation;
    }

    /// Best tour found so far.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Length of the best tour, or infinity before the first candidate.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Most recent candidate tour.
    pub fn current(&self) -> Option<&Tour> {
        self.current.as_ref()
    }

    /// Number of ticks that produced a candidate.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Resets the state and binds it to a new import.
    pub(crate) fn rebind(&mut self, generation: u64) {
        *self = Self::new();
        self.generation = generation;
    }

    /// Records a candidate; returns `true` if it became the new best.
    pub(crate) fn record(&mut self, candidate: Tour, fitness: f64) -> bool {
        self.ticks += 1;
        let improved = fitness < self.best_fitness;
        if improved {
            self.best_fitness = fitness;
            self.best = Some(candidate.clone());
        }
        self.current = Some(candidate);
        improved
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
