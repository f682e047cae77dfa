//! Drawing a network onto a [`DrawingSurface`].

use log::{debug, info};

use netdraw_core::{
    color::Color,
    draw::{Circle, DrawingSurface, LineSegment, StrokeDefinition, StrokeStyle},
    geometry::Point,
};

use crate::{
    error::ConfigurationError, layout::NetworkLayout, spacing::NodeSpacing,
    structure::NetworkStructure,
};

/// Radius of a node marker, in world units.
pub const NODE_RADIUS: f32 = 0.05;

/// Width of a node's border stroke.
pub const NODE_BORDER_WIDTH: f32 = 1.5;

/// Width of a connection line.
pub const EDGE_WIDTH: f32 = 0.8;

/// Colors and line style of a network drawing.
///
/// Colors are handed to the surface unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStyle {
    node_color: Color,
    edge_color: Color,
    node_edge_color: Color,
    edge_style: StrokeStyle,
}

impl NetworkStyle {
    /// Creates a style with solid connection lines.
    ///
    /// # Arguments
    ///
    /// * `node_color` - Fill of the node markers.
    /// * `edge_color` - Color of the connection lines.
    /// * `node_edge_color` - Border of the node markers.
    pub fn new(node_color: Color, edge_color: Color, node_edge_color: Color) -> Self {
        Self {
            node_color,
            edge_color,
            node_edge_color,
            edge_style: StrokeStyle::Solid,
        }
    }

    /// Sets the dash style of connection lines.
    pub fn with_edge_style(mut self, edge_style: StrokeStyle) -> Self {
        self.edge_style = edge_style;
        self
    }

    pub fn node_color(&self) -> Color {
        self.node_color
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color
    }

    pub fn node_edge_color(&self) -> Color {
        self.node_edge_color
    }

    pub fn edge_style(&self) -> &StrokeStyle {
        &self.edge_style
    }

    fn node_at(&self, center: Point) -> Circle {
        Circle::new(
            center,
            NODE_RADIUS,
            self.node_color,
            StrokeDefinition::new(self.node_edge_color, NODE_BORDER_WIDTH),
        )
    }

    fn edge_between(&self, start: Point, end: Point) -> LineSegment {
        LineSegment::new(
            start,
            end,
            StrokeDefinition::new(self.edge_color, EDGE_WIDTH).with_style(self.edge_style.clone()),
        )
    }
}

impl Default for NetworkStyle {
    /// White nodes with black borders and black connections.
    fn default() -> Self {
        Self::new(
            Color::new("white").expect("'white' is a valid CSS color"),
            Color::default(),
            Color::default(),
        )
    }
}

/// Draws a network diagram onto `surface`.
///
/// Every layer of `structure` becomes a column of circular nodes, and every
/// node is connected to every node of the previous column. Connections are
/// drawn on the edge layer, beneath the nodes. Finally the surface's view
/// bounds are set to frame the network.
///
/// `node_spacings` is resolved before anything is drawn:
/// a per-layer list longer than the layer count fails, while a shorter one
/// is padded with [`DEFAULT_NODE_SPACING`](crate::DEFAULT_NODE_SPACING).
///
/// # Errors
///
/// Returns [`ConfigurationError::TooManySpacings`] if `node_spacings` has
/// more entries than `structure` has layers. The surface is left untouched.
///
/// # Examples
///
/// ```
/// use netdraw::{NetworkStructure, NetworkStyle, NodeSpacing, draw};
/// use netdraw::draw::RecordingSurface;
///
/// let structure = NetworkStructure::new([(1, 3), (2, 3), (3, 1)]).unwrap();
/// let mut surface = RecordingSurface::new();
///
/// draw(
///     &mut surface,
///     &structure,
///     0.5,
///     &NodeSpacing::Uniform(0.2),
///     &NetworkStyle::default(),
/// )
/// .unwrap();
///
/// assert_eq!(surface.circles().count(), 7);
/// assert_eq!(surface.lines().count(), 12);
/// ```
pub fn draw<K, S>(
    surface: &mut S,
    structure: &NetworkStructure<K>,
    layer_spacing: f32,
    node_spacings: &NodeSpacing,
    style: &NetworkStyle,
) -> Result<(), ConfigurationError>
where
    K: Ord,
    S: DrawingSurface + ?Sized,
{
    let layout = NetworkLayout::new(structure, layer_spacing, node_spacings)?;
    draw_layout(surface, &layout, style);
    Ok(())
}

/// Draws an already computed layout onto `surface`.
pub fn draw_layout<S>(surface: &mut S, layout: &NetworkLayout, style: &NetworkStyle)
where
    S: DrawingSurface + ?Sized,
{
    info!(
        layers = layout.layer_count(),
        nodes = layout.layer_sizes().iter().sum::<usize>();
        "Drawing network"
    );

    let mut previous: Vec<Point> = Vec::new();
    let mut edges = 0usize;

    for index in 0..layout.layer_count() {
        let current: Vec<Point> = layout.layer_nodes(index).collect();

        for node in &current {
            surface.add_circle(style.node_at(*node));

            for prev_node in &previous {
                surface.add_line(style.edge_between(*prev_node, *node));
                edges += 1;
            }
        }

        debug!(layer = index, nodes = current.len(); "Layer drawn");
        previous = current;
    }

    let view_bounds = layout.view_bounds();
    surface.set_view_bounds(view_bounds);

    debug!(edges, view_bounds:?; "Network drawn");
}
