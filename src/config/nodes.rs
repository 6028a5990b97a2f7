use crate::image::io::read_json_file;
use crate::nodes::NodeParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct TraceNodesConfig {
    /// Diagram image (PNG or JPEG).
    pub input: PathBuf,
    /// Node icon image; transparent pixels are ignored when matching.
    pub icon: PathBuf,
    #[serde(default)]
    pub nodes: NodeConfig,
    pub output: NodesOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Minimum icon match strength in (0, 1].
    pub color_accuracy: f64,
    /// Keep at most this many nodes; 0 keeps all.
    pub max_count: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        let params = NodeParams::default();
        Self {
            color_accuracy: params.strength_threshold,
            max_count: params.max_count,
        }
    }
}

impl NodeConfig {
    pub fn to_params(&self) -> Result<NodeParams, String> {
        if !(self.color_accuracy > 0.0 && self.color_accuracy <= 1.0) {
            return Err(format!(
                "nodes.color_accuracy must be in (0, 1], got {}",
                self.color_accuracy
            ));
        }
        Ok(NodeParams {
            strength_threshold: self.color_accuracy,
            max_count: self.max_count,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NodesOutputConfig {
    pub graph_json: PathBuf,
    /// Optional copy of the input with every matched icon erased.
    #[serde(default)]
    pub erased_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<TraceNodesConfig, String> {
    read_json_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_section_is_optional() {
        let cfg: TraceNodesConfig = serde_json::from_str(
            r#"{"input":"map.png","icon":"icon.png","output":{"graph_json":"out/nodes.json"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.nodes.color_accuracy, 0.8);
        assert_eq!(cfg.nodes.max_count, 0);
        assert!(cfg.output.erased_image.is_none());
    }

    #[test]
    fn rejects_out_of_range_accuracy() {
        let cfg = NodeConfig {
            color_accuracy: 0.0,
            max_count: 0,
        };
        assert!(cfg.to_params().is_err());
    }
}
