//! # geo-tsp
//!
//! Heuristic traveling-salesman search over geographic points: haversine
//! distances, 2-opt local search, and a random-restart driver that reports
//! every improved (or merely current) tour to the host.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Tour)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`local_search`] — 2-opt improvement
//! - [`search`] — Random-restart driver, search state and tick events
//! - [`import`] — City records and population filtering
//! - [`config`] — Search configuration from TOML
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use geo_tsp::config::SearchConfig;
//! use geo_tsp::import::import_cities_json;
//! use geo_tsp::search::{SearchDriver, SearchEvent, SearchState};
//!
//! let json = r#"[
//!     {"city": "New York", "longitude": -74.0059, "latitude": 40.7127, "population": "8405837"},
//!     {"city": "Los Angeles", "longitude": -118.2437, "latitude": 34.0522, "population": "3884307"},
//!     {"city": "Chicago", "longitude": -87.6298, "latitude": 41.8781, "population": "2718782"},
//!     {"city": "Houston", "longitude": -95.3698, "latitude": 29.7604, "population": "2195914"}
//! ]"#;
//!
//! let config = SearchConfig::new().with_random_seed(7);
//! let points = import_cities_json(json, &config.import_filter()).unwrap();
//! let mut driver = SearchDriver::from_config(points, &config).unwrap();
//! let mut state = SearchState::new();
//!
//! driver.run();
//! let mut redraw = |event: &SearchEvent| assert_eq!(event.tour.len(), 4);
//! driver.run_ticks(&mut state, 10, &mut redraw).unwrap();
//! assert!(state.best_fitness().is_finite());
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod import;
pub mod local_search;
pub mod models;
pub mod search;
