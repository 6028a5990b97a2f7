use crate::image::io::read_json_file;
use crate::visualize::OVERLAY_ALPHA;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct VisualizeConfig {
    pub graph: PathBuf,
    /// Source image to overlay the drawing on. Without it only the drawing
    /// is written.
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    pub output: PathBuf,
}

fn default_alpha() -> f64 {
    OVERLAY_ALPHA
}

pub fn load_config(path: &Path) -> Result<VisualizeConfig, String> {
    read_json_file(path)
}
