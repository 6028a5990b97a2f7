use log::info;
use netmap_tracer::config::links::load_config;
use netmap_tracer::graph::Graph;
use netmap_tracer::image::io::{load_rgba_image, read_json_file, save_rgba_png, write_json_file};
use netmap_tracer::links::LinkTracer;
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
    let params = config.line.to_params()?;

    let image = load_rgba_image(&config.input)?;
    let mut graph: Graph = read_json_file(&config.graph)?;
    if graph.bounds.width() != image.w as i32 || graph.bounds.height() != image.h as i32 {
        return Err(format!(
            "Graph bounds {}x{} do not match image {}x{}",
            graph.bounds.width(),
            graph.bounds.height(),
            image.w,
            image.h
        ));
    }

    let tracer = LinkTracer::new(params);
    let trace = tracer.trace(&image, &graph.nodes);
    info!(
        "{} line pixels, {} candidate runs, {} pixels linked",
        trace.mask.len(),
        trace.candidate_runs,
        trace.linked_pixels
    );
    graph.links = trace.links;

    write_json_file(&config.output.graph_json, &graph)?;
    if let Some(path) = &config.output.mask_image {
        save_rgba_png(&trace.mask.to_image(image.w, image.h), path)?;
    }
    info!(
        "wrote {} links to {}",
        graph.links.len(),
        config.output.graph_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: trace_links <config.json>".to_string()
}
