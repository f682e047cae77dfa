//! Circle and line-segment primitives.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// A filled circular marker with a border.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    fill: Color,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl Circle {
    /// Creates a circle on the [`RenderLayer::Node`] layer.
    pub fn new(center: Point, radius: f32, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke,
            layer: RenderLayer::Node,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Border stroke.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }
}

impl Drawable for Circle {
    fn render_to_layers(&self) -> LayeredOutput {
        let center = self.center.flip_y();
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", self.radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        let circle = apply_stroke!(circle, &self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(circle));
        output
    }

    fn bounds(&self) -> Bounds {
        let diameter = self.radius * 2.0;
        Bounds::new_from_center(self.center, Size::new(diameter, diameter))
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl LineSegment {
    /// Creates a line segment on the [`RenderLayer::Edge`] layer.
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self {
            start,
            end,
            stroke,
            layer: RenderLayer::Edge,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn layer(&self) -> RenderLayer {
        self.layer
    }
}

impl Drawable for LineSegment {
    fn render_to_layers(&self) -> LayeredOutput {
        let start = self.start.flip_y();
        let end = self.end.flip_y();
        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, &self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(line));
        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_ranges(
            (self.start.x().min(self.end.x()), self.start.x().max(self.end.x())),
            (self.start.y().min(self.end.y()), self.start.y().max(self.end.y())),
        )
    }
}
