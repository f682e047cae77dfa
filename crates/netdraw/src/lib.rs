//! Netdraw - layout and rendering of feed-forward neural network diagrams.
//!
//! Given the neuron count of each layer, netdraw places every neuron as a
//! circle in a column per layer, connects each neuron to every neuron of the
//! adjacent layers, and frames the result. Drawing goes through the
//! [`draw::DrawingSurface`] trait; [`export::svg::SvgSurface`] turns it into
//! an SVG document.

pub mod config;
pub mod export;

mod error;
mod layout;
mod render;
mod spacing;
mod structure;

pub use netdraw_core::{color, draw, geometry};

pub use error::{ConfigurationError, NetdrawError};
pub use layout::NetworkLayout;
pub use render::{EDGE_WIDTH, NODE_BORDER_WIDTH, NODE_RADIUS, NetworkStyle, draw, draw_layout};
pub use spacing::{DEFAULT_NODE_SPACING, NodeSpacing};
pub use structure::{NetworkStructure, StructureError};

use log::{debug, info};

use config::AppConfig;
use draw::DrawingSurface;
use export::svg::SvgSurface;

/// Builder for drawing network diagrams from an [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use netdraw::{NetworkDiagram, NetworkStructure, config::AppConfig};
///
/// let structure = NetworkStructure::new([(1, 3), (2, 3), (3, 1)])
///     .expect("valid structure");
///
/// let diagram = NetworkDiagram::new(AppConfig::default());
/// let svg = diagram.render_svg(&structure)
///     .expect("Failed to render");
/// assert!(svg.contains("</svg>"));
///
/// // Or use default config
/// let diagram = NetworkDiagram::default();
/// ```
#[derive(Debug, Default)]
pub struct NetworkDiagram {
    config: AppConfig,
}

impl NetworkDiagram {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Draw `structure` onto any surface using the configured settings.
    ///
    /// # Errors
    ///
    /// Returns `NetdrawError::Style` if a configured color or edge style is
    /// invalid, and `NetdrawError::Configuration` if the configured node
    /// spacings list more entries than `structure` has layers. Nothing is
    /// drawn in either case.
    pub fn draw_onto<K, S>(
        &self,
        surface: &mut S,
        structure: &NetworkStructure<K>,
    ) -> Result<(), NetdrawError>
    where
        K: Ord,
        S: DrawingSurface + ?Sized,
    {
        let style = self
            .config
            .style()
            .network_style()
            .map_err(NetdrawError::Style)?;
        let layout = self.config.layout();

        draw(
            surface,
            structure,
            layout.layer_spacing(),
            layout.node_spacings(),
            &style,
        )?;
        Ok(())
    }

    /// Render `structure` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `NetdrawError` for style, configuration or rendering errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netdraw::{NetworkDiagram, NetworkStructure};
    ///
    /// let structure = NetworkStructure::from_sizes([4, 2]).unwrap();
    /// let svg = NetworkDiagram::default()
    ///     .render_svg(&structure)
    ///     .expect("Failed to render diagram");
    ///
    /// println!("{svg}");
    /// ```
    pub fn render_svg<K: Ord>(&self, structure: &NetworkStructure<K>) -> Result<String, NetdrawError> {
        info!(
            layers = structure.layer_count(),
            nodes = structure.node_count(),
            edges = structure.edge_count();
            "Rendering network diagram"
        );

        let background_color = self
            .config
            .style()
            .background_color()
            .map_err(NetdrawError::Style)?;

        let mut surface = SvgSurface::new()
            .with_background_color(background_color)
            .with_pixels_per_unit(self.config.style().pixels_per_unit());

        self.draw_onto(&mut surface, structure)?;
        debug!("Network drawn onto SVG surface");

        let svg = surface.to_svg_string()?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
