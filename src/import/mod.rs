//! City import.
//!
//! Parses city records, keeps the ones above a population threshold and
//! builds the [`PointSet`](crate::models::PointSet) a search runs over.

mod city;

pub use city::{
    import_cities, import_cities_file, import_cities_json, CityRecord, ImportFilter, Population,
};
