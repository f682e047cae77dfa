//! SVG drawing surface.
//!
//! [`SvgSurface`] collects primitives into render layers and turns them into
//! an SVG document once the view bounds are known. World space has y pointing
//! up; primitives flip their own y coordinates, and the `viewBox` is placed
//! over the flipped view bounds.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use netdraw_core::{
    color::Color,
    draw::{Circle, Drawable, DrawingSurface, LayeredOutput, LineSegment, RenderLayer},
    geometry::Bounds,
};

use crate::export;

/// Default output scale, in pixels per world unit.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 400.0;

/// A [`DrawingSurface`] that renders to an in-memory SVG document.
///
/// # Examples
///
/// ```
/// use netdraw::{NetworkStructure, NetworkStyle, NodeSpacing, draw, export::svg::SvgSurface};
///
/// let structure = NetworkStructure::from_sizes([2, 1]).unwrap();
/// let mut surface = SvgSurface::new();
/// draw(&mut surface, &structure, 0.5, &NodeSpacing::default(), &NetworkStyle::default())
///     .unwrap();
///
/// let svg = surface.to_svg_string().unwrap();
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug)]
pub struct SvgSurface {
    output: LayeredOutput,
    view_bounds: Option<Bounds>,
    background_color: Option<Color>,
    pixels_per_unit: f32,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            output: LayeredOutput::new(),
            view_bounds: None,
            background_color: None,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
        }
    }

    /// Fills the view with `color` beneath everything else.
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the output scale.
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// The view bounds set so far, if any.
    pub fn view_bounds(&self) -> Option<Bounds> {
        self.view_bounds
    }

    /// Builds the SVG document, consuming the surface.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::MissingViewBounds`] if no view bounds were
    /// set, and [`export::Error::Render`] if the bounds or the scale produce
    /// an empty picture.
    pub fn into_document(self) -> Result<Document, export::Error> {
        let bounds = self.view_bounds.ok_or(export::Error::MissingViewBounds)?;

        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return Err(export::Error::Render(format!(
                "view bounds must have a positive size, got {}x{}",
                bounds.width(),
                bounds.height()
            )));
        }
        if !(self.pixels_per_unit > 0.0) {
            return Err(export::Error::Render(format!(
                "pixels per unit must be positive, got {}",
                self.pixels_per_unit
            )));
        }

        let size = bounds.to_size().scale(self.pixels_per_unit);
        // Screen y runs downward, so the top of the view is at -max_y
        let view_box = format!(
            "{} {} {} {}",
            bounds.min_x(),
            -bounds.max_y(),
            bounds.width(),
            bounds.height()
        );

        let mut output = self.output;
        if let Some(color) = self.background_color {
            let background = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", -bounds.max_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", &color);
            output.add_to_layer(RenderLayer::Background, Box::new(background));
        }

        debug!(
            width = size.width(),
            height = size.height(),
            elements = output.len();
            "Rendering SVG document"
        );

        let document = output.render().into_iter().fold(
            Document::new()
                .set("viewBox", view_box)
                .set("width", size.width())
                .set("height", size.height()),
            |document, node| document.add(node),
        );

        Ok(document)
    }

    /// Builds the SVG document and serializes it.
    ///
    /// # Errors
    ///
    /// See [`into_document`](Self::into_document).
    pub fn to_svg_string(self) -> Result<String, export::Error> {
        let document = self.into_document()?;
        let svg = document.to_string();
        info!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for SvgSurface {
    fn add_circle(&mut self, circle: Circle) {
        self.output.merge(circle.render_to_layers());
    }

    fn add_line(&mut self, line: LineSegment) {
        self.output.merge(line.render_to_layers());
    }

    fn set_view_bounds(&mut self, bounds: Bounds) {
        self.view_bounds = Some(bounds);
    }
}

#[cfg(test)]
mod tests {
    use netdraw_core::{draw::StrokeDefinition, geometry::Point};

    use super::*;

    fn unit_bounds() -> Bounds {
        Bounds::from_ranges((-0.5, 0.5), (-0.25, 0.75))
    }

    #[test]
    fn test_missing_view_bounds() {
        let surface = SvgSurface::new();
        assert_eq!(
            surface.to_svg_string().unwrap_err(),
            export::Error::MissingViewBounds
        );
    }

    #[test]
    fn test_degenerate_view_bounds() {
        let mut surface = SvgSurface::new();
        surface.set_view_bounds(Bounds::from_ranges((0.0, 0.0), (0.0, 1.0)));

        assert!(matches!(
            surface.to_svg_string(),
            Err(export::Error::Render(_))
        ));
    }

    #[test]
    fn test_invalid_scale() {
        let mut surface = SvgSurface::new().with_pixels_per_unit(0.0);
        surface.set_view_bounds(unit_bounds());

        assert!(matches!(
            surface.to_svg_string(),
            Err(export::Error::Render(_))
        ));
    }

    #[test]
    fn test_view_box_is_flipped() {
        let mut surface = SvgSurface::new().with_pixels_per_unit(100.0);
        surface.set_view_bounds(unit_bounds());

        let svg = surface.to_svg_string().unwrap();
        assert!(svg.contains("viewBox=\"-0.5 -0.75 1 1\""));
        assert!(svg.contains("width=\"100\""));
        assert!(svg.contains("height=\"100\""));
    }

    #[test]
    fn test_edges_rendered_before_nodes() {
        let mut surface = SvgSurface::new();
        surface.add_circle(Circle::new(
            Point::new(0.0, 0.0),
            0.05,
            Color::default(),
            StrokeDefinition::default(),
        ));
        surface.add_line(LineSegment::new(
            Point::new(-0.5, 0.0),
            Point::new(0.0, 0.0),
            StrokeDefinition::default(),
        ));
        surface.set_view_bounds(unit_bounds());

        let svg = surface.to_svg_string().unwrap();
        let edge_pos = svg.find("data-layer=\"edge\"").unwrap();
        let node_pos = svg.find("data-layer=\"node\"").unwrap();
        assert!(edge_pos < node_pos);
    }

    #[test]
    fn test_background_rendered_first() {
        let mut surface =
            SvgSurface::new().with_background_color(Some(Color::new("ivory").unwrap()));
        surface.add_circle(Circle::new(
            Point::new(0.0, 0.0),
            0.05,
            Color::default(),
            StrokeDefinition::default(),
        ));
        surface.set_view_bounds(unit_bounds());

        let svg = surface.to_svg_string().unwrap();
        let background_pos = svg.find("data-layer=\"background\"").unwrap();
        let node_pos = svg.find("data-layer=\"node\"").unwrap();
        assert!(background_pos < node_pos);
        assert!(svg.contains("<rect"));
    }
}
