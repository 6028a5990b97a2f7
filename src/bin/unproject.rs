use log::{info, warn};
use netmap_tracer::config::unproject::load_config;
use netmap_tracer::graph::Graph;
use netmap_tracer::image::io::{read_json_file, write_json_file};
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

    let graph: Graph = read_json_file(&config.graph)?;
    if graph.bounds.width() <= 0 || graph.bounds.height() <= 0 {
        return Err(format!(
            "Graph {} has empty bounds",
            config.graph.display()
        ));
    }
    let projection = config.projection.build(graph.bounds)?;

    let mut geo = GeoGraph::from_graph(&graph, |p| projection.to_lat_lon(p));
    for &i in &config.transit_only {
        if i >= geo.nodes.len() {
            warn!("ignoring transit-only index {i}; graph has {} nodes", geo.nodes.len());
            continue;
        }
        geo.transit_only.push(i);
    }

    write_json_file(&config.output, &geo)?;
    info!(
        "wrote {} nodes and {} links to {}",
        geo.nodes.len(),
        geo.links.len(),
        config.output.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: unproject <config.json>".to_string()
}
