use crate::color::parse_hex_color;
use crate::image::io::read_json_file;
use crate::links::LinkParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TraceLinksConfig {
    /// Diagram image (PNG or JPEG).
    pub input: PathBuf,
    /// Graph JSON holding the nodes to connect.
    pub graph: PathBuf,
    #[serde(default)]
    pub line: LineConfig,
    pub output: LinksOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Line color as `#rrggbb` or `#rgb`.
    pub color: String,
    /// Minimum mean color accuracy to classify a line pixel.
    pub color_accuracy: f64,
    /// Classifier window half-width in pixels.
    pub width_px: usize,
    /// Maximum line gap in pixels.
    pub allowed_gap_px: usize,
    /// Maximum distance between a line end and a node in pixels.
    pub node_proximity_px: usize,
    /// Maximum permitted change in line direction in degrees.
    pub direction_change_deg: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        let params = LinkParams::default();
        Self {
            color: "#000000".to_string(),
            color_accuracy: params.min_color_accuracy,
            width_px: params.min_width_px,
            allowed_gap_px: params.allowed_gap_px,
            node_proximity_px: params.node_proximity_px,
            direction_change_deg: params.max_direction_change_deg,
        }
    }
}

impl LineConfig {
    pub fn to_params(&self) -> Result<LinkParams, String> {
        let color = parse_hex_color(&self.color).map_err(|e| format!("line.color: {e}"))?;
        if !(0.0..=1.0).contains(&self.color_accuracy) {
            return Err(format!(
                "line.color_accuracy must be in [0, 1], got {}",
                self.color_accuracy
            ));
        }
        if self.allowed_gap_px == 0 {
            return Err("line.allowed_gap_px must be at least 1".to_string());
        }
        Ok(LinkParams {
            color,
            min_color_accuracy: self.color_accuracy,
            min_width_px: self.width_px,
            allowed_gap_px: self.allowed_gap_px,
            node_proximity_px: self.node_proximity_px,
            max_direction_change_deg: self.direction_change_deg,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LinksOutputConfig {
    pub graph_json: PathBuf,
    /// Optional image of the classified line pixels.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TraceLinksConfig, String> {
    read_json_file(path)
}
