//! Node detection by blob matching with greedy non-overlapping selection.
//!
//! Overview
//! - Every pixel is scored by a [`BlobMatcher`], one row per worker when the
//!   `parallel` feature is on. Scores above the strength threshold become
//!   candidates.
//! - Candidates go into a max-priority queue (score desc, then x asc, y asc).
//! - The greedy loop re-scores the top candidate before accepting it. Erasing
//!   an accepted match can lower the true score of overlapping candidates, so
//!   a changed score is written back and the queue re-ordered instead of
//!   accepting a stale value.
//! - Accepted nodes are returned sorted by x, then y; a node's identity is its
//!   index in that order.

mod candidates;

pub use candidates::{Candidate, CandidateQueue};

use crate::graph::Point;
use crate::image::RgbaBuffer;
use crate::matcher::BlobMatcher;
use log::{debug, info};

/// Parameters of the node search.
#[derive(Clone, Debug)]
pub struct NodeParams {
    /// Candidates must score strictly above this, in `(0, 1]`.
    pub strength_threshold: f64,
    /// Maximum number of nodes to accept; 0 means unbounded.
    pub max_count: usize,
}

impl Default for NodeParams {
    fn default() -> Self {
        Self {
            strength_threshold: 0.8,
            max_count: 0,
        }
    }
}

pub struct NodeTracer<M: BlobMatcher> {
    matcher: M,
    params: NodeParams,
}

impl<M: BlobMatcher> NodeTracer<M> {
    pub fn new(matcher: M, params: NodeParams) -> Self {
        Self { matcher, params }
    }

    /// Finds nodes on a private copy of `image`.
    pub fn trace(&self, image: &RgbaBuffer) -> Vec<Point> {
        let mut scratch = image.clone();
        self.trace_in_place(&mut scratch)
    }

    /// Finds nodes and erases every accepted match from `image`.
    pub fn trace_in_place(&self, image: &mut RgbaBuffer) -> Vec<Point> {
        debug!("scoring candidate nodes on {}x{} image", image.w, image.h);
        let mut queue: CandidateQueue = self.score_candidates(image).into_iter().collect();
        debug!("{} candidate nodes; selecting best", queue.len());

        let mut nodes = self.select(&mut queue, image);
        nodes.sort();
        info!("found {} nodes", nodes.len());
        nodes
    }

    fn below_limit(&self, count: usize) -> bool {
        self.params.max_count == 0 || count < self.params.max_count
    }

    fn select(&self, queue: &mut CandidateQueue, image: &mut RgbaBuffer) -> Vec<Point> {
        let threshold = self.params.strength_threshold;
        let mut nodes = Vec::new();
        let mut rescored = 0usize;
        while self.below_limit(nodes.len()) {
            let Some(top) = queue.peek().copied() else {
                break;
            };
            if top.score <= threshold {
                break;
            }
            let score = self.matcher.score(image, top.loc);
            if score != top.score {
                // Some pixels belonged to an accepted node; re-queue with the
                // current score.
                queue.rescore_top(score);
                rescored += 1;
                continue;
            }
            nodes.push(top.loc);
            self.matcher.erase(image, top.loc);
            queue.pop();
        }
        debug!(
            "accepted {} nodes after {rescored} re-scores, {} candidates left",
            nodes.len(),
            queue.len()
        );
        nodes
    }

    fn score_row(&self, image: &RgbaBuffer, y: usize) -> Vec<Candidate> {
        let threshold = self.params.strength_threshold;
        (0..image.w)
            .filter_map(|x| {
                let loc = Point::new(x as i32, y as i32);
                let score = self.matcher.score(image, loc);
                (score > threshold).then_some(Candidate::new(loc, score))
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_candidates(&self, image: &RgbaBuffer) -> Vec<Candidate> {
        use rayon::prelude::*;

        (0..image.h)
            .into_par_iter()
            .flat_map_iter(|y| self.score_row(image, y))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_candidates(&self, image: &RgbaBuffer) -> Vec<Candidate> {
        (0..image.h)
            .flat_map(|y| self.score_row(image, y))
            .collect()
    }
}
