use crate::graph::Rect;
use crate::image::io::read_json_file;
use crate::unproject::WebMercator;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct UnprojectConfig {
    /// Graph JSON in image coordinates.
    pub graph: PathBuf,
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Node indices to flag as transit-only in the output.
    #[serde(default)]
    pub transit_only: Vec<usize>,
    pub output: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Projection name; only `"web-mercator"` is supported.
    pub kind: String,
    pub extra_margin_left: i32,
    pub extra_margin_right: i32,
    pub scale_y: f64,
    /// Overrides the prime meridian column (margin-extended coordinates).
    pub prime_meridian_x: Option<i32>,
    /// Overrides the equator row.
    pub equator_y: Option<i32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kind: "web-mercator".to_string(),
            extra_margin_left: 0,
            extra_margin_right: 0,
            scale_y: 1.0,
            prime_meridian_x: None,
            equator_y: None,
        }
    }
}

impl ProjectionConfig {
    pub fn build(&self, bounds: Rect) -> Result<WebMercator, String> {
        if self.kind != "web-mercator" {
            return Err(format!("Unsupported projection '{}'", self.kind));
        }
        let mut wm = WebMercator::centered(bounds, self.extra_margin_left, self.extra_margin_right);
        wm.scale_y = self.scale_y;
        if let Some(x) = self.prime_meridian_x {
            wm.prime_meridian_x = x;
        }
        if let Some(y) = self.equator_y {
            wm.equator_y = y;
        }
        Ok(wm)
    }
}

pub fn load_config(path: &Path) -> Result<UnprojectConfig, String> {
    read_json_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;

    #[test]
    fn overrides_apply_on_top_of_centered() {
        let cfg = ProjectionConfig {
            equator_y: Some(10),
            scale_y: 2.0,
            ..Default::default()
        };
        let wm = cfg
            .build(Rect::new(Point::new(0, 0), Point::new(200, 100)))
            .unwrap();
        assert_eq!(wm.prime_meridian_x, 100);
        assert_eq!(wm.equator_y, 10);
        assert_eq!(wm.scale_y, 2.0);
    }

    #[test]
    fn unknown_projection_is_rejected() {
        let cfg = ProjectionConfig {
            kind: "mollweide".to_string(),
            ..Default::default()
        };
        assert!(cfg.build(Rect::default()).is_err());
    }
}
