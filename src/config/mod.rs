//! JSON configuration for the command-line tools.
//!
//! Each tool reads a single JSON file. Sections marked `#[serde(default)]`
//! may be omitted; their defaults match the library parameter defaults.

pub mod export;
pub mod graph;
pub mod links;
pub mod nodes;
pub mod unproject;
pub mod visualize;
