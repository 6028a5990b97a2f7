//! Writer for the Repetita topology text format.
//!
//! Layout: `NODES n`, a header line, one `<label> <x> <y>` line per node, an
//! empty line, `EDGES m`, a header line, then one
//! `<label> <src> <dst> <weight> <bw> <delay>` line per edge. Bandwidth is in
//! kbps and delay in microseconds.
use crate::unproject::{GeoGraph, GeoLink, LatLon};
use log::debug;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Speed of light in vacuum, m/s.
const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Mean Earth radius for great-circle distances, km.
const EARTH_RADIUS_KM: f64 = 6371.0;
/// Bandwidth written for every edge, kbps.
const EDGE_BANDWIDTH_KBPS: u64 = 1_000_000;

#[derive(Clone, Debug)]
pub struct RepetitaExporter {
    /// Speed of light divided by the propagation speed in the medium.
    pub refractive_index: f64,
    /// Add the reverse of every link that lacks one.
    pub make_symmetric: bool,
}

impl Default for RepetitaExporter {
    fn default() -> Self {
        Self {
            refractive_index: 1.467,
            make_symmetric: true,
        }
    }
}

impl RepetitaExporter {
    pub fn write<W: Write>(&self, graph: &GeoGraph, mut out: W) -> io::Result<()> {
        let transit: HashSet<usize> = graph.transit_only.iter().copied().collect();

        writeln!(out, "NODES {}", graph.nodes.len())?;
        writeln!(out, "label x y")?;
        for i in 0..graph.nodes.len() {
            let name = if transit.contains(&i) { "transit" } else { "node" };
            writeln!(out, "{name}_{i} 0 0")?;
        }

        let mut links = if self.make_symmetric {
            make_symmetric(&graph.links)
        } else {
            graph.links.clone()
        };
        links.sort_by_key(|l| (l.src, l.dst));

        writeln!(out)?;
        writeln!(out, "EDGES {}", links.len())?;
        writeln!(out, "label src dest weight bw delay")?;
        for (i, l) in links.iter().enumerate() {
            writeln!(
                out,
                "edge_{i} {} {} 0 {EDGE_BANDWIDTH_KBPS} {}",
                l.src,
                l.dst,
                self.delay_micros(graph, l)
            )?;
        }
        Ok(())
    }

    /// Writes the topology to `path`, creating parent directories. Buffered
    /// output is flushed before returning so write failures are reported.
    pub fn write_file(&self, graph: &GeoGraph, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
            }
        }
        debug!("writing Repetita topology to {}", path.display());
        let file = File::create(path)
            .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
        let mut out = BufWriter::new(file);
        self.write(graph, &mut out)
            .and_then(|()| out.flush())
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }

    fn delay_micros(&self, graph: &GeoGraph, link: &GeoLink) -> i64 {
        let meters_per_sec = SPEED_OF_LIGHT / self.refractive_index;
        let km = great_circle_distance_km(graph.nodes[link.src], graph.nodes[link.dst]);
        let delay_sec = km * 1e3 / meters_per_sec;
        (delay_sec * 1e6) as i64
    }
}

/// Haversine distance in kilometres.
pub fn great_circle_distance_km(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * a.lat.to_radians().cos() * b.lat.to_radians().cos();
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

fn make_symmetric(links: &[GeoLink]) -> Vec<GeoLink> {
    let mut seen: HashSet<(usize, usize)> = links.iter().map(|l| (l.src, l.dst)).collect();
    let mut out = links.to_vec();
    for l in links {
        if seen.insert((l.dst, l.src)) {
            out.push(GeoLink {
                src: l.dst,
                dst: l.src,
            });
        }
    }
    out
}
