//! Example: Rendering a small network to SVG
//!
//! Draws the 3-3-1 network twice, once through a recording surface to show
//! the raw draw calls and once through the SVG surface, and prints the SVG.
//!
//! Run with `RUST_LOG=debug` to see the layout logs.

use log::info;

use netdraw::{
    NetworkDiagram, NetworkStructure, NodeSpacing,
    config::{AppConfig, LayoutConfig, StyleConfig},
    draw::RecordingSurface,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let structure = NetworkStructure::new([(1, 3), (2, 3), (3, 1)])?;

    let config = AppConfig::new(
        LayoutConfig::new(0.5, NodeSpacing::Uniform(0.2)),
        StyleConfig::default(),
    );
    let diagram = NetworkDiagram::new(config);

    let mut recording = RecordingSurface::new();
    diagram.draw_onto(&mut recording, &structure)?;
    info!(
        nodes = recording.circles().count(),
        edges = recording.lines().count();
        "Recorded draw calls"
    );

    let svg = diagram.render_svg(&structure)?;
    println!("{svg}");

    Ok(())
}
