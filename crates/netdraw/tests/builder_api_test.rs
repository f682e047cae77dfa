//! Integration tests for the NetworkDiagram API
//!
//! These tests verify that the public API works and is usable.

use netdraw::{
    NetdrawError, NetworkDiagram, NetworkStructure, NodeSpacing,
    config::{AppConfig, LayoutConfig, StyleConfig},
    draw::RecordingSurface,
};

fn sample_structure() -> NetworkStructure<u32> {
    NetworkStructure::new([(1, 3), (2, 3), (3, 1)]).expect("valid structure")
}

#[test]
fn test_render_simple_network() {
    let diagram = NetworkDiagram::default();
    let svg = diagram
        .render_svg(&sample_structure())
        .expect("Failed to render network");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<circle").count(), 7);
    assert_eq!(svg.matches("<line").count(), 12);
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        LayoutConfig::new(1.0, NodeSpacing::PerLayer(vec![0.5])),
        StyleConfig::default(),
    );

    let diagram = NetworkDiagram::new(config);
    let mut surface = RecordingSurface::new();
    diagram
        .draw_onto(&mut surface, &sample_structure())
        .expect("Failed to draw");

    // Layers two and three fall back to the default spacing
    let bounds = surface.view_bounds().expect("view bounds set");
    assert!((bounds.min_x() + 1.5).abs() < 1e-5);
    assert!((bounds.max_x() - 1.5).abs() < 1e-5);
}

#[test]
fn test_too_many_spacings_returns_configuration_error() {
    let config = AppConfig::new(
        LayoutConfig::new(0.5, NodeSpacing::PerLayer(vec![0.2; 4])),
        StyleConfig::default(),
    );

    let result = NetworkDiagram::new(config).render_svg(&sample_structure());
    assert!(
        matches!(result, Err(NetdrawError::Configuration(_))),
        "Should reject more spacings than layers: {result:?}"
    );
}

#[test]
fn test_invalid_color_returns_style_error() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        node_color = "definitely-not-a-color"
        "#,
    )
    .expect("valid TOML");

    let diagram = NetworkDiagram::new(config);
    let mut surface = RecordingSurface::new();
    let result = diagram.draw_onto(&mut surface, &sample_structure());

    assert!(matches!(result, Err(NetdrawError::Style(_))));
    assert!(surface.is_empty(), "Nothing should be drawn on error");
}

#[test]
fn test_background_from_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        background_color = "ivory"
        pixels_per_unit = 100.0
        "#,
    )
    .expect("valid TOML");

    let svg = NetworkDiagram::new(config)
        .render_svg(&sample_structure())
        .expect("Failed to render network");

    assert!(svg.contains("<rect"));
    assert!(svg.contains("width=\"150\""));
}

#[test]
fn test_builder_reusability() {
    let diagram = NetworkDiagram::default();

    let first = NetworkStructure::from_sizes([2, 2]).expect("valid structure");
    let second = NetworkStructure::new([("hidden", 4), ("input", 2), ("output", 1)])
        .expect("valid structure");

    let svg1 = diagram.render_svg(&first).expect("Failed to render first");
    let svg2 = diagram.render_svg(&second).expect("Failed to render second");

    assert_eq!(svg1.matches("<line").count(), 4);
    // "hidden" < "input" < "output": 4*2 + 2*1
    assert_eq!(svg2.matches("<line").count(), 10);
}
