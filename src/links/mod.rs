//! Link detection: line-pixel classification plus per-node run tracking.
//!
//! Overview
//! - [`LineClassifier`] marks pixels whose surrounding window matches the
//!   line color.
//! - For every detected node (in parallel when the `parallel` feature is on)
//!   each line pixel receives a discrete time: 0 within the node proximity,
//!   otherwise `floor(distance / gap)`, using the horizontally wrapping
//!   metric. Pixels are fed in `(time, distance, y, x)` order into a fresh
//!   [`RunTracker`], which grows runs outward from the node.
//! - Runs from all nodes are merged in node order. A run becomes a [`Link`]
//!   when both of its endpoints lie near two different nodes.

mod classifier;
mod distance;
mod tracker;

pub use classifier::{LineClassifier, LineMask};
pub use distance::{wrap_x_distance, Metric};
pub use tracker::{LineRun, RunTracker, TrackerParams, DIRECTION_ALPHA};

use crate::bitset::PackedBitset;
use crate::color::Rgba;
use crate::graph::{Link, Point};
use crate::image::RgbaBuffer;
use log::{debug, info};

/// Runs longer than this many points have their direction gated.
pub const DIRECTION_POINT_THRESHOLD: usize = 8;

/// Parameters of the link search.
#[derive(Clone, Debug)]
pub struct LinkParams {
    pub color: Rgba,
    /// Mean color match in `[0, 1]`; 1 is an exact match.
    pub min_color_accuracy: f64,
    /// Classifier window half-width in pixels.
    pub min_width_px: usize,
    /// Largest gap a run may bridge, in pixels.
    pub allowed_gap_px: usize,
    /// How close a run endpoint must be to a node, in pixels.
    pub node_proximity_px: usize,
    /// How far (degrees) a run may turn away from its current direction.
    pub max_direction_change_deg: f64,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            min_color_accuracy: 0.85,
            min_width_px: 3,
            allowed_gap_px: 1,
            node_proximity_px: 1,
            max_direction_change_deg: 10.0,
        }
    }
}

/// Result of a link search, including the intermediate runs for diagnostics.
#[derive(Clone, Debug, Default)]
pub struct LinkTrace {
    pub links: Vec<Link>,
    /// Classified line pixels the runs were grown from.
    pub mask: LineMask,
    /// Number of runs discovered across all nodes, before filtering.
    pub candidate_runs: usize,
    /// Distinct line pixels covered by emitted links.
    pub linked_pixels: usize,
}

#[derive(Clone, Copy, Debug)]
struct TimedPoint {
    p: Point,
    dist: f64,
    time: u32,
}

pub struct LinkTracer {
    params: LinkParams,
}

impl LinkTracer {
    pub fn new(params: LinkParams) -> Self {
        Self { params }
    }

    pub fn classifier(&self) -> LineClassifier {
        LineClassifier::new(
            self.params.color,
            self.params.min_color_accuracy,
            self.params.min_width_px,
        )
    }

    /// Finds links between `nodes` in `image`.
    pub fn trace(&self, image: &RgbaBuffer, nodes: &[Point]) -> LinkTrace {
        let mask = self.classifier().classify(image);
        debug!("{} points that possibly belong to lines", mask.len());

        let runs = self.find_runs(image, nodes, &mask.points);
        debug!("filtering {} candidate links", runs.len());

        let candidate_runs = runs.len();
        let proximity = self.params.node_proximity_px as f64;
        let mut linked = PackedBitset::new(image.w, image.h);
        let mut links = Vec::new();
        for run in runs {
            let Some(src) = closest_node(run.src(), nodes, proximity) else {
                continue;
            };
            let Some(dst) = closest_node(run.dst(), nodes, proximity) else {
                continue;
            };
            if src == dst {
                continue;
            }
            for p in run.points() {
                linked.set(p.x as usize, p.y as usize);
            }
            links.push(Link {
                src,
                dst,
                points: run.into_points(),
            });
        }
        info!("found {} links", links.len());

        LinkTrace {
            links,
            mask,
            candidate_runs,
            linked_pixels: linked.count(),
        }
    }

    fn tracker_params(&self, width: usize) -> TrackerParams {
        TrackerParams {
            allowed_gap: self.params.allowed_gap_px as f64,
            max_angle: self.params.max_direction_change_deg.to_radians(),
            direction_threshold: DIRECTION_POINT_THRESHOLD,
            metric: Metric::WrapX {
                width: width as i32,
            },
        }
    }

    /// Runs starting at one node.
    fn runs_from(&self, node: Point, line_points: &[Point], params: &TrackerParams) -> Vec<LineRun> {
        debug!("searching for lines which begin at node ({}, {})", node.x, node.y);
        let proximity = self.params.node_proximity_px as f64;
        let gap = self.params.allowed_gap_px as f64;

        let mut timed: Vec<TimedPoint> = line_points
            .iter()
            .map(|&p| {
                let dist = params.metric.distance(node, p);
                let time = if dist <= proximity {
                    0
                } else {
                    (dist / gap).floor() as u32
                };
                TimedPoint { p, dist, time }
            })
            .collect();
        timed.sort_by(|a, b| {
            a.time
                .cmp(&b.time)
                .then(a.dist.total_cmp(&b.dist))
                .then(a.p.y.cmp(&b.p.y))
                .then(a.p.x.cmp(&b.p.x))
        });

        let mut tracker = RunTracker::new(params.clone());
        for tp in timed {
            tracker.add_point(tp.p, tp.time);
        }
        tracker.into_runs()
    }

    fn find_runs(&self, image: &RgbaBuffer, nodes: &[Point], line_points: &[Point]) -> Vec<LineRun> {
        let params = self.tracker_params(image.w);

        #[cfg(feature = "parallel")]
        let per_node: Vec<Vec<LineRun>> = {
            use rayon::prelude::*;
            nodes
                .par_iter()
                .map(|&n| self.runs_from(n, line_points, &params))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let per_node: Vec<Vec<LineRun>> = nodes
            .iter()
            .map(|&n| self.runs_from(n, line_points, &params))
            .collect();

        per_node.into_iter().flatten().collect()
    }
}

/// Index of the node nearest to `p` that is strictly closer than `max_dist`.
pub fn closest_node(p: Point, nodes: &[Point], max_dist: f64) -> Option<usize> {
    let mut best = None;
    let mut best_dist = max_dist;
    for (i, n) in nodes.iter().enumerate() {
        let d = p.dist(*n);
        if d < best_dist {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_node_respects_threshold() {
        let nodes = [Point::new(0, 0), Point::new(10, 0)];
        assert_eq!(closest_node(Point::new(8, 0), &nodes, 3.0), Some(1));
        assert_eq!(closest_node(Point::new(5, 0), &nodes, 3.0), None);
        // Strictly closer: a point exactly at the threshold is not attached.
        assert_eq!(closest_node(Point::new(3, 0), &nodes, 3.0), None);
    }

    #[test]
    fn runs_from_node_grow_outward() {
        let tracer = LinkTracer::new(LinkParams {
            allowed_gap_px: 2,
            node_proximity_px: 2,
            ..Default::default()
        });
        let node = Point::new(5, 5);
        let line: Vec<Point> = (5..20).map(|x| Point::new(x, 5)).collect();
        let runs = tracer.runs_from(node, &line, &tracer.tracker_params(40));
        let longest = runs.iter().max_by_key(|r| r.len()).unwrap();
        assert_eq!(longest.dst(), Point::new(19, 5));
        assert!(longest.src().dist(node) <= 2.0);
    }

    #[test]
    fn runs_are_grouped_in_node_order() {
        // Holds for both the node-parallel and the sequential build.
        let tracer = LinkTracer::new(LinkParams {
            node_proximity_px: 2,
            ..Default::default()
        });
        let image = RgbaBuffer::new(60, 20);
        let nodes = [Point::new(40, 10), Point::new(5, 10), Point::new(22, 3)];
        let mut line: Vec<Point> = (3..58).map(|x| Point::new(x, 10)).collect();
        line.extend((4..10).map(|y| Point::new(22, y)));
        let params = tracer.tracker_params(image.w);
        let expected: Vec<LineRun> = nodes
            .iter()
            .flat_map(|&n| tracer.runs_from(n, &line, &params))
            .collect();
        assert!(expected.len() >= nodes.len());
        assert_eq!(tracer.find_runs(&image, &nodes, &line), expected);
    }
}
