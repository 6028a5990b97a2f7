//! Topology exporters for traced graphs.

pub mod repetita;

pub use repetita::{great_circle_distance_km, RepetitaExporter};
