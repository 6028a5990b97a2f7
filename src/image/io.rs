//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: decode a PNG/JPEG into an owned RGBA buffer.
//! - `save_rgba_png`: write an `RgbaBuffer` to disk (format from extension).
//! - `write_json_file` / `read_json_file`: pretty JSON to and from disk.
use super::RgbaBuffer;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(RgbaBuffer::from(&img))
}

/// Save an RGBA buffer, creating parent directories.
pub fn save_rgba_png(buffer: &RgbaBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    debug!("writing image to {}", path.display());
    image::RgbaImage::from(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    debug!("writing JSON to {}", path.display());
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Parse a JSON document from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
