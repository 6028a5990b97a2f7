use crate::export::RepetitaExporter;
use crate::image::io::read_json_file;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// Geographic graph JSON produced by `unproject`.
    pub geo_graph: PathBuf,
    #[serde(default)]
    pub repetita: RepetitaConfig,
    pub output: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RepetitaConfig {
    pub refractive_index: f64,
    pub make_symmetric: bool,
}

impl Default for RepetitaConfig {
    fn default() -> Self {
        let exporter = RepetitaExporter::default();
        Self {
            refractive_index: exporter.refractive_index,
            make_symmetric: exporter.make_symmetric,
        }
    }
}

impl RepetitaConfig {
    pub fn to_exporter(&self) -> Result<RepetitaExporter, String> {
        if self.refractive_index < 1.0 {
            return Err(format!(
                "repetita.refractive_index must be >= 1, got {}",
                self.refractive_index
            ));
        }
        Ok(RepetitaExporter {
            refractive_index: self.refractive_index,
            make_symmetric: self.make_symmetric,
        })
    }
}

pub fn load_config(path: &Path) -> Result<ExportConfig, String> {
    read_json_file(path)
}
