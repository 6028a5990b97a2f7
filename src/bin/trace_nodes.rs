use log::info;
use netmap_tracer::config::nodes::load_config;
use netmap_tracer::graph::Graph;
use netmap_tracer::image::io::{load_rgba_image, save_rgba_png, write_json_file};
use netmap_tracer::matcher::IconMatcher;
use netmap_tracer::nodes::NodeTracer;
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
    let params = config.nodes.to_params()?;

    let mut image = load_rgba_image(&config.input)?;
    let icon = load_rgba_image(&config.icon)?;
    let matcher = IconMatcher::new(&icon);
    if matcher.opaque_count() == 0 {
        return Err(format!(
            "Icon {} has no opaque pixels",
            config.icon.display()
        ));
    }

    let tracer = NodeTracer::new(matcher, params);
    let mut graph = Graph::with_bounds(image.bounds());
    graph.nodes = tracer.trace_in_place(&mut image);

    write_json_file(&config.output.graph_json, &graph)?;
    if let Some(path) = &config.output.erased_image {
        save_rgba_png(&image, path)?;
    }
    info!(
        "wrote {} nodes to {}",
        graph.nodes.len(),
        config.output.graph_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: trace_nodes <config.json>".to_string()
}
