use log::info;
use netmap_tracer::config::visualize::load_config;
use netmap_tracer::graph::Graph;
use netmap_tracer::image::io::{load_rgba_image, read_json_file, save_rgba_png};
use netmap_tracer::visualize::{draw_graph, overlay_on};
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
    let drawing = draw_graph(&graph);
    let out = match &config.background {
        Some(path) => overlay_on(&drawing, &load_rgba_image(path)?, config.alpha),
        None => drawing,
    };
    save_rgba_png(&out, &config.output)?;
    info!("wrote {}", config.output.display());
    Ok(())
}

fn usage() -> String {
    "Usage: visualize <config.json>".to_string()
}
