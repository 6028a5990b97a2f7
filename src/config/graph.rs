use super::links::LineConfig;
use super::nodes::NodeConfig;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TraceGraphConfig {
    pub input: PathBuf,
    pub icon: PathBuf,
    #[serde(default)]
    pub nodes: NodeConfig,
    #[serde(default)]
    pub line: LineConfig,
    pub output: GraphOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct GraphOutputConfig {
    pub graph_json: PathBuf,
    /// Optional report with stage timings and counters.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TraceGraphConfig, String> {
    read_json_file(path)
}
