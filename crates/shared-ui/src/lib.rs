//! Presentational components shared by the point-of-sale dashboards.

pub mod components;

pub use components::*;
