use log::info;
use netmap_tracer::config::export::load_config;
use netmap_tracer::image::io::read_json_file;
use netmap_tracer::unproject::GeoGraph;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let exporter = config.repetita.to_exporter()?;

    let geo: GeoGraph = read_json_file(&config.geo_graph)?;
    if let Some(bad) = geo
        .links
        .iter()
        .find(|l| l.src >= geo.nodes.len() || l.dst >= geo.nodes.len())
    {
        return Err(format!(
            "Link {} -> {} references a missing node ({} nodes)",
            bad.src,
            bad.dst,
            geo.nodes.len()
        ));
    }

    exporter.write_file(&geo, &config.output)?;
    info!("wrote topology to {}", config.output.display());
    Ok(())
}

fn usage() -> String {
    "Usage: export_repetita <config.json>".to_string()
}
