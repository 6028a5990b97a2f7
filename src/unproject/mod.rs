//! Conversion of image-space graphs to geographic coordinates.

mod web_mercator;

pub use web_mercator::{web_mercator_width, WebMercator, EARTH_RADIUS_M};

use crate::graph::{Graph, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoLink {
    pub src: usize,
    pub dst: usize,
}

/// Graph whose nodes are geographic positions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoGraph {
    pub nodes: Vec<LatLon>,
    /// Indices of nodes that only carry transit traffic.
    #[serde(default)]
    pub transit_only: Vec<usize>,
    #[serde(default)]
    pub links: Vec<GeoLink>,
}

impl GeoGraph {
    /// Maps every node through `invert`; links keep their endpoints and drop
    /// their raw traces.
    pub fn from_graph(graph: &Graph, invert: impl Fn(Point) -> LatLon) -> Self {
        Self {
            nodes: graph.nodes.iter().map(|&p| invert(p)).collect(),
            transit_only: Vec::new(),
            links: graph
                .links
                .iter()
                .map(|l| GeoLink {
                    src: l.src,
                    dst: l.dst,
                })
                .collect(),
        }
    }
}
