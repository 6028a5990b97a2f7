use log::info;
use netmap_tracer::config::graph::load_config;
use netmap_tracer::image::io::{load_rgba_image, write_json_file};
use netmap_tracer::matcher::IconMatcher;
use netmap_tracer::tracer::GraphTracer;
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
    let node_params = config.nodes.to_params()?;
    let link_params = config.line.to_params()?;

    let image = load_rgba_image(&config.input)?;
    let icon = load_rgba_image(&config.icon)?;
    let matcher = IconMatcher::new(&icon);
    if matcher.opaque_count() == 0 {
        return Err(format!(
            "Icon {} has no opaque pixels",
            config.icon.display()
        ));
    }

    let report = GraphTracer::new(matcher, node_params, link_params).trace(&image);

    write_json_file(&config.output.graph_json, &report.graph)?;
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
    }
    for stage in &report.timing.stages {
        info!("{:>8}: {:.1} ms", stage.label, stage.elapsed_ms);
    }
    Ok(())
}

fn usage() -> String {
    "Usage: trace_graph <config.json>".to_string()
}
