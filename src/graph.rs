//! Graph types in image coordinates and their JSON interchange shape.
//!
//! Field names follow the interchange format (`X`/`Y`, `Src`/`Dst`/`Points`,
//! `Nodes`/`Links`/`Bounds`, `Min`/`Max`) so graphs written by one tool can be
//! read back by the next.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Plain Euclidean distance.
    #[inline]
    pub fn dist(&self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// Orders points by ascending x, then ascending y.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Axis-aligned rectangle; `max` is exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }
}

/// Connection between two nodes, referenced by index into [`Graph::nodes`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    pub src: usize,
    pub dst: usize,
    /// Raw trace the link was built from; diagnostic only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
}

/// Graph with points in the original image coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Graph {
    pub nodes: Vec<Point>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub bounds: Rect,
}

impl Graph {
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        Graph {
            nodes: vec![Point::new(3, 4), Point::new(10, 2), Point::new(40, 17)],
            links: vec![
                Link {
                    src: 0,
                    dst: 1,
                    points: vec![Point::new(3, 4), Point::new(6, 3), Point::new(10, 2)],
                },
                Link {
                    src: 2,
                    dst: 1,
                    points: Vec::new(),
                },
            ],
            bounds: Rect::new(Point::new(0, 0), Point::new(64, 32)),
        }
    }

    #[test]
    fn json_round_trip_preserves_graph() {
        let graph = sample_graph();
        let json = serde_json::to_string_pretty(&graph).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn json_uses_interchange_field_names() {
        let value = serde_json::to_value(sample_graph()).unwrap();
        assert_eq!(value["Nodes"][0]["X"], 3);
        assert_eq!(value["Nodes"][0]["Y"], 4);
        assert_eq!(value["Links"][0]["Src"], 0);
        assert_eq!(value["Links"][0]["Dst"], 1);
        assert_eq!(value["Bounds"]["Max"]["X"], 64);
        assert!(
            value["Links"][1].get("Points").is_none(),
            "empty point lists are omitted"
        );
    }

    #[test]
    fn missing_points_default_to_empty() {
        let json = r#"{"Nodes":[{"X":1,"Y":2}],"Links":[{"Src":0,"Dst":0}],
            "Bounds":{"Min":{"X":0,"Y":0},"Max":{"X":5,"Y":5}}}"#;
        let graph: Graph = serde_json::from_str(json).unwrap();
        assert!(graph.links[0].points.is_empty());
    }

    #[test]
    fn points_order_by_x_then_y() {
        let mut pts = vec![Point::new(2, 1), Point::new(1, 5), Point::new(1, 2)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 2), Point::new(1, 5), Point::new(2, 1)]);
    }
}
