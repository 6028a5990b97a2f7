#![doc = include_str!("../README.md")]

// Pipeline entry points.
pub mod graph;
pub mod image;
pub mod tracer;

// Pipeline stages. Public so tools and tests can drive them one at a time.
pub mod links;
pub mod matcher;
pub mod nodes;

// Post-processing of traced graphs.
pub mod export;
pub mod unproject;
pub mod visualize;

// Building blocks.
pub mod angle;
pub mod bitset;
pub mod color;
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::graph::{Graph, Link, Point, Rect};
pub use crate::links::{LinkParams, LinkTracer};
pub use crate::matcher::{BlobMatcher, IconMatcher};
pub use crate::nodes::{NodeParams, NodeTracer};
pub use crate::tracer::{GraphTracer, TraceReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use netmap_tracer::prelude::*;
///
/// let mut image = RgbaBuffer::filled(32, 16, Rgba::WHITE);
/// let icon = RgbaBuffer::filled(3, 3, Rgba::opaque(255, 0, 0));
/// for y in 4..7 {
///     for x in 10..13 {
///         image.set(x, y, Rgba::opaque(255, 0, 0));
///     }
/// }
///
/// let tracer = GraphTracer::new(
///     IconMatcher::new(&icon),
///     NodeParams::default(),
///     LinkParams::default(),
/// );
/// let report = tracer.trace(&image);
/// assert_eq!(report.graph.nodes, vec![Point::new(11, 5)]);
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::image::RgbaBuffer;
    pub use crate::{GraphTracer, IconMatcher, LinkParams, NodeParams, Point};
}
