//! End-to-end extraction: nodes first, then links between them.
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::graph::Graph;
use crate::image::RgbaBuffer;
use crate::links::{LinkParams, LinkTracer};
use crate::matcher::BlobMatcher;
use crate::nodes::{NodeParams, NodeTracer};
use log::info;
use serde::Serialize;
use std::time::Instant;

/// Counters collected while tracing.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStats {
    pub line_pixels: usize,
    pub candidate_runs: usize,
    pub linked_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceReport {
    pub graph: Graph,
    pub stats: TraceStats,
    pub timing: TimingBreakdown,
}

pub struct GraphTracer<M: BlobMatcher> {
    nodes: NodeTracer<M>,
    links: LinkTracer,
}

impl<M: BlobMatcher> GraphTracer<M> {
    pub fn new(matcher: M, node_params: NodeParams, link_params: LinkParams) -> Self {
        Self {
            nodes: NodeTracer::new(matcher, node_params),
            links: LinkTracer::new(link_params),
        }
    }

    /// Extracts the full graph from `image`. The input is not modified.
    pub fn trace(&self, image: &RgbaBuffer) -> TraceReport {
        let start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let mut graph = Graph::with_bounds(image.bounds());

        graph.nodes = timing.time("nodes", || self.nodes.trace(image));
        let links = timing.time("links", || self.links.trace(image, &graph.nodes));
        graph.links = links.links;

        timing.total_ms = elapsed_ms(start);
        info!(
            "traced {} nodes and {} links in {:.1} ms",
            graph.nodes.len(),
            graph.links.len(),
            timing.total_ms
        );
        TraceReport {
            graph,
            stats: TraceStats {
                line_pixels: links.mask.len(),
                candidate_runs: links.candidate_runs,
                linked_pixels: links.linked_pixels,
            },
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::matcher::IconMatcher;

    #[test]
    fn blank_image_yields_empty_graph_with_bounds() {
        let image = RgbaBuffer::filled(16, 8, Rgba::WHITE);
        let icon = RgbaBuffer::filled(3, 3, Rgba::BLACK);
        let tracer = GraphTracer::new(
            IconMatcher::new(&icon),
            NodeParams::default(),
            LinkParams::default(),
        );
        let report = tracer.trace(&image);
        assert!(report.graph.nodes.is_empty());
        assert!(report.graph.links.is_empty());
        assert_eq!(report.graph.bounds.width(), 16);
        assert_eq!(report.graph.bounds.height(), 8);
        assert_eq!(report.timing.stages.len(), 2);
    }
}
