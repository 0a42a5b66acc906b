//! Perch CLI
//!
//! Evaluates an overlay placement for a JSON scene snapshot and prints the
//! resulting position record.

mod scene;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use perch_common::warning::clear_warnings;
use perch_position::{ContainerRef, Probe, compute_position_str};

use scene::Scene;

/// Perch — compute where a tooltip or popover goes
#[derive(Parser, Debug)]
#[command(name = "perch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Position the overlay described by a scene file
    perch demos/tooltip-right.json

    # Pass the scene inline
    perch --scene-json '{"container":{},"anchor":{},"overlay":{},"placement":"top"}'

    # Override the placement and show the measurements it was based on
    perch --placement left --explain demos/tooltip-right.json
"#)]
struct Cli {
    /// Path to a JSON scene file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse the scene from a JSON string instead of a file
    #[arg(long, value_name = "JSON")]
    scene_json: Option<String>,

    /// Override the scene's placement (top, bottom, left, right)
    #[arg(long)]
    placement: Option<String>,

    /// Override the scene's vertical position mode (top, bottom)
    #[arg(long)]
    vertical_position: Option<String>,

    /// Override the scene's container padding
    #[arg(long)]
    padding: Option<f32>,

    /// Print the measured anchor and container before the result
    #[arg(long)]
    explain: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn load_scene(cli: &Cli) -> Result<Scene> {
    let text = if let Some(json) = &cli.scene_json {
        json.clone()
    } else if let Some(path) = &cli.path {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read scene '{}'", path.display()))?
    } else {
        bail!("a scene FILE or --scene-json is required")
    };

    let mut scene = Scene::from_json(&text)?;
    if let Some(placement) = &cli.placement {
        scene.placement.clone_from(placement);
    }
    if let Some(vertical) = &cli.vertical_position {
        scene.vertical_position.clone_from(vertical);
    }
    if let Some(padding) = cli.padding {
        scene.padding = padding;
    }
    Ok(scene)
}

fn run(cli: &Cli) -> Result<()> {
    clear_warnings();
    let scene = load_scene(cli)?;
    let (tree, nodes) = scene.build_tree();

    if cli.explain {
        let probe = Probe::new(&tree, &scene.viewport);
        let container = ContainerRef::infer(&tree, nodes.container);
        let anchor = probe.measure_anchor_offset(nodes.target, container);
        let metrics = probe.measure_container(container);
        let heights = probe.container_heights(container);

        println!("{}", "=== Measurements ===".bold());
        println!("container kind: {:?}", container.kind);
        println!(
            "container:      {}x{} scrolled {}",
            metrics.width, metrics.height, metrics.scroll
        );
        println!(
            "anchor:         top={} left={} {}x{}",
            anchor.top, anchor.left, anchor.width, anchor.height
        );
        if heights.is_consistent() {
            println!("clientHeight:   {} {}", heights.client_height, "(consistent)".green());
        } else {
            println!(
                "clientHeight:   {} {}",
                heights.client_height,
                format!("(measured height is {})", heights.metrics_height).yellow()
            );
        }
        println!();
    }

    let result = compute_position_str(
        &tree,
        &scene.viewport,
        &scene.placement,
        &scene.vertical_position,
        nodes,
        scene.padding,
    )?;

    let record = result.to_record();
    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{json}");

    Ok(())
}
