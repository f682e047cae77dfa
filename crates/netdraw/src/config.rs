//! Configuration types for network diagram rendering.
//!
//! This module provides configuration structures that control how network
//! diagrams are laid out and styled. All types implement
//! [`serde::Deserialize`] for loading from external sources, and every field
//! has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Column gap and node spacing.
//! - [`StyleConfig`] - Colors, connection dash style, background and output scale.
//!
//! # Example
//!
//! ```
//! # use netdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().layer_spacing(), 0.5);
//! assert!(config.style().network_style().is_ok());
//! ```

use serde::Deserialize;

use netdraw_core::{color::Color, draw::StrokeStyle};

use crate::{NodeSpacing, export::svg::DEFAULT_PIXELS_PER_UNIT, render::NetworkStyle};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between adjacent layer columns.
    layer_spacing: f32,

    /// Vertical gap between nodes: a number, or one number per layer.
    node_spacings: NodeSpacing,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `layer_spacing` - Horizontal gap between adjacent columns.
    /// * `node_spacings` - Vertical gap between nodes.
    pub fn new(layer_spacing: f32, node_spacings: NodeSpacing) -> Self {
        Self {
            layer_spacing,
            node_spacings,
        }
    }

    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    pub fn node_spacings(&self) -> &NodeSpacing {
        &self.node_spacings
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_spacing: 0.5,
            node_spacings: NodeSpacing::default(),
        }
    }
}

/// Visual styling configuration.
///
/// Colors are kept as strings and parsed on use, so a bad color is reported
/// when rendering rather than when loading.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    node_color: String,
    edge_color: String,
    node_edge_color: String,

    /// Dash style of connection lines ("solid", "dashed", "dotted", "dash-dot"
    /// or a raw dasharray).
    edge_style: Option<String>,

    /// Background fill; transparent when unset.
    background_color: Option<String>,

    /// Output scale of SVG documents.
    pixels_per_unit: f32,
}

impl StyleConfig {
    /// Builds the [`NetworkStyle`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if a color or the edge
    /// style cannot be parsed.
    pub fn network_style(&self) -> Result<NetworkStyle, String> {
        let node_color = parse_color("node_color", &self.node_color)?;
        let edge_color = parse_color("edge_color", &self.edge_color)?;
        let node_edge_color = parse_color("node_edge_color", &self.node_edge_color)?;

        let edge_style = self
            .edge_style
            .as_deref()
            .map(str::parse::<StrokeStyle>)
            .transpose()
            .map_err(|err| format!("Invalid edge_style in config: {err}"))?
            .unwrap_or_default();

        Ok(NetworkStyle::new(node_color, edge_color, node_edge_color).with_edge_style(edge_style))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_color: "white".to_string(),
            edge_color: "black".to_string(),
            node_edge_color: "black".to_string(),
            edge_style: None,
            background_color: None,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
        }
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout().layer_spacing(), 0.5);
        assert_eq!(*config.layout().node_spacings(), NodeSpacing::Uniform(0.2));
        assert_eq!(config.style().pixels_per_unit(), DEFAULT_PIXELS_PER_UNIT);
        assert_eq!(config.style().background_color(), Ok(None));

        let style = config.style().network_style().unwrap();
        assert_eq!(style, NetworkStyle::default());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            node_spacings = [0.3, 0.6]

            [style]
            edge_color = "gray"
            edge_style = "dashed"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().layer_spacing(), 0.5);
        assert_eq!(
            *config.layout().node_spacings(),
            NodeSpacing::PerLayer(vec![0.3, 0.6])
        );

        let style = config.style().network_style().unwrap();
        assert_eq!(style.edge_color(), Color::new("gray").unwrap());
        assert_eq!(*style.edge_style(), StrokeStyle::Dashed);
        assert_eq!(style.node_color(), Color::new("white").unwrap());
    }

    #[test]
    fn test_deserialize_scalar_spacing() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            layer_spacing = 2.0
            node_spacings = 0.75
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().layer_spacing(), 2.0);
        assert_eq!(
            *config.layout().node_spacings(),
            NodeSpacing::Uniform(0.75)
        );
    }

    #[test]
    fn test_invalid_color_names_field() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            node_edge_color = "not-a-color"
            "#,
        )
        .unwrap();

        let err = config.style().network_style().unwrap_err();
        assert!(err.contains("node_edge_color"));
    }

    #[test]
    fn test_background_color() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.style().background_color(),
            Ok(Some(Color::new("white").unwrap()))
        );
    }
}
