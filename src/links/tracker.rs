//! Incremental line-run tracker.
//!
//! Points arrive grouped by a discrete time that grows outward from a seed
//! node. Time-0 points each start a run. Later points extend the nearest run
//! that was last updated at an earlier time, so runs only grow outward. Once a
//! run holds more than `direction_threshold` points, its exponentially
//! smoothed direction gates which points it may take, which keeps a run from
//! jumping onto a crossing line.
use super::distance::Metric;
use crate::angle::angle_between;
use crate::graph::Point;
use nalgebra::Vector2;

/// Smoothing factor of the direction EWMA.
pub const DIRECTION_ALPHA: f64 = 0.4;

#[derive(Clone, Debug)]
pub struct TrackerParams {
    /// Maximum distance between a run's last point and the next one.
    pub allowed_gap: f64,
    /// Maximum angle (radians) between a run's direction and its next step.
    pub max_angle: f64,
    /// Point count after which the direction estimate is trusted for gating.
    pub direction_threshold: usize,
    pub metric: Metric,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            allowed_gap: 1.0,
            max_angle: 10f64.to_radians(),
            direction_threshold: super::DIRECTION_POINT_THRESHOLD,
            metric: Metric::Euclidean,
        }
    }
}

/// Ordered, append-only trace of one line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRun {
    points: Vec<Point>,
    time: u32,
    direction: Option<Vector2<f64>>,
}

impl LineRun {
    fn seed(p: Point) -> Self {
        Self {
            points: vec![p],
            time: 0,
            direction: None,
        }
    }

    /// First point.
    pub fn src(&self) -> Point {
        self.points[0]
    }

    /// Last point.
    pub fn dst(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time of the last accepted point.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Smoothed direction, once the run is long enough to have one.
    pub fn direction(&self) -> Option<Vector2<f64>> {
        self.direction
    }

    fn push(&mut self, p: Point, time: u32, direction_threshold: usize) {
        let prev = self.dst();
        self.points.push(p);
        self.time = time;
        if self.points.len() < direction_threshold {
            return;
        }
        self.direction = Some(match self.direction {
            None => offset(self.src(), p),
            Some(dir) => offset(prev, p) * DIRECTION_ALPHA + dir * (1.0 - DIRECTION_ALPHA),
        });
    }
}

#[inline]
fn offset(from: Point, to: Point) -> Vector2<f64> {
    Vector2::new(f64::from(to.x - from.x), f64::from(to.y - from.y))
}

#[derive(Clone, Debug)]
pub struct RunTracker {
    params: TrackerParams,
    runs: Vec<LineRun>,
}

impl RunTracker {
    pub fn new(params: TrackerParams) -> Self {
        Self {
            params,
            runs: Vec::new(),
        }
    }

    /// Offers `p` at `time`; returns whether some run took it.
    pub fn add_point(&mut self, p: Point, time: u32) -> bool {
        if time == 0 {
            self.runs.push(LineRun::seed(p));
            return true;
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, run) in self.runs.iter().enumerate() {
            if run.time >= time || !self.heading_allows(run, p) {
                continue;
            }
            let dist = self.params.metric.distance(run.dst(), p);
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }

        match best {
            Some((idx, dist)) if dist <= self.params.allowed_gap => {
                self.runs[idx].push(p, time, self.params.direction_threshold);
                true
            }
            _ => false,
        }
    }

    fn heading_allows(&self, run: &LineRun, p: Point) -> bool {
        if run.len() <= self.params.direction_threshold {
            return true;
        }
        let Some(dir) = run.direction else {
            return true;
        };
        angle_between(&dir, &offset(run.dst(), p)).map_or(true, |a| a <= self.params.max_angle)
    }

    pub fn runs(&self) -> &[LineRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<LineRun> {
        self.runs
    }
}
