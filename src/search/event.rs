//! Tick events and observers.

use serde::{Deserialize, Serialize};

/// Whether a tick improved on the best tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The candidate is the new best tour.
    Best,
    /// The candidate did not beat the best tour.
    Current,
}

/// The outcome of one tick.
///
/// `tour` lists point IDs in visiting order; `fitness` is the closed tour
/// length in kilometers.
///
/// # Examples
///
/// ```
/// use geo_tsp::search::{EventKind, SearchEvent};
///
/// let event = SearchEvent { kind: EventKind::Best, tour: vec![3, 1, 2], fitness: 12.5 };
/// let json = serde_json::to_string(&event).unwrap();
/// assert_eq!(json, r#"{"kind":"best","tour":[3,1,2],"fitness":12.5}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchEvent {
    /// Best or current.
    pub kind: EventKind,
    /// Point IDs in visiting order.
    pub tour: Vec<usize>,
    /// Tour length in kilometers.
    pub fitness: f64,
}

impl SearchEvent {
    /// Returns `true` for a new best tour.
    pub fn is_best(&self) -> bool {
        self.kind == EventKind::Best
    }
}

/// Receives tick events, typically to redraw a map.
pub trait TourObserver {
    /// Called once per tick that produced a candidate.
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F: FnMut(&SearchEvent)> TourObserver for F {
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}
