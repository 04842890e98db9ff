//! Random-restart search driver.
//!
//! Each [`SearchDriver::tick`] samples a random tour, improves it with
//! [`two_opt_improve`](crate::local_search::two_opt_improve) and compares it
//! with the best tour of the run held in a [`SearchState`]. The host decides
//! when ticks happen.
//!
//! - [`SearchDriver`] — owns the point set, matrix and random source
//! - [`SearchState`] — best and latest tours of one run
//! - [`SearchEvent`] — what a tick reports to a [`TourObserver`]

mod driver;
mod event;
mod state;

pub use driver::{DriverPhase, SearchDriver};
pub use event::{EventKind, SearchEvent, TourObserver};
pub use state::SearchState;
