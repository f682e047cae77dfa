//! The drawing-surface abstraction.
//!
//! Layout code never owns render state. It receives a `&mut` surface from the
//! caller, appends primitives to it and sets its visible bounds; the caller
//! decides what the surface turns those calls into.
//!
//! [`RecordingSurface`] is the in-memory implementation: it keeps every call
//! as a [`DrawCommand`], in order.

use log::trace;

use crate::{
    draw::{Circle, Drawable, LineSegment},
    geometry::Bounds,
};

/// A 2D drawing target.
///
/// Calls are append-only. Implementations decide stacking from each
/// primitive's [`RenderLayer`](crate::draw::RenderLayer), not from call order.
pub trait DrawingSurface {
    /// Adds a filled circle.
    fn add_circle(&mut self, circle: Circle);

    /// Adds a line segment.
    fn add_line(&mut self, line: LineSegment);

    /// Sets the visible coordinate bounds. The last call wins.
    fn set_view_bounds(&mut self, bounds: Bounds);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn add_circle(&mut self, circle: Circle) {
        (**self).add_circle(circle);
    }

    fn add_line(&mut self, line: LineSegment) {
        (**self).add_line(line);
    }

    fn set_view_bounds(&mut self, bounds: Bounds) {
        (**self).set_view_bounds(bounds);
    }
}

/// A single call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle(Circle),
    Line(LineSegment),
    ViewBounds(Bounds),
}

/// A surface that records every call.
///
/// # Examples
///
/// ```
/// use netdraw_core::draw::{Circle, DrawingSurface, RecordingSurface, StrokeDefinition};
/// use netdraw_core::{color::Color, geometry::Point};
///
/// let mut surface = RecordingSurface::new();
/// surface.add_circle(Circle::new(
///     Point::new(0.0, 0.0),
///     0.05,
///     Color::default(),
///     StrokeDefinition::default(),
/// ));
///
/// assert_eq!(surface.circles().count(), 1);
/// assert!(surface.view_bounds().is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Bounds covering every recorded circle and line, if any were recorded.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle(circle) => Some(circle.bounds()),
                DrawCommand::Line(line) => Some(line.bounds()),
                DrawCommand::ViewBounds(_) => None,
            })
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// The most recently set view bounds, if any.
    pub fn view_bounds(&self) -> Option<Bounds> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::ViewBounds(bounds) => Some(*bounds),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn add_circle(&mut self, circle: Circle) {
        trace!(circle:?; "Recording circle");
        self.commands.push(DrawCommand::Circle(circle));
    }

    fn add_line(&mut self, line: LineSegment) {
        trace!(line:?; "Recording line");
        self.commands.push(DrawCommand::Line(line));
    }

    fn set_view_bounds(&mut self, bounds: Bounds) {
        trace!(bounds:?; "Recording view bounds");
        self.commands.push(DrawCommand::ViewBounds(bounds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, draw::StrokeDefinition, geometry::Point};

    fn line(x: f32) -> LineSegment {
        LineSegment::new(
            Point::new(x, 0.0),
            Point::new(x, 1.0),
            StrokeDefinition::default(),
        )
    }

    #[test]
    fn test_recording_surface_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        surface.add_line(line(0.0));
        surface.add_circle(Circle::new(
            Point::default(),
            0.05,
            Color::default(),
            StrokeDefinition::default(),
        ));
        surface.add_line(line(1.0));

        assert_eq!(surface.commands().len(), 3);
        assert!(matches!(surface.commands()[1], DrawCommand::Circle(_)));
        assert_eq!(surface.lines().count(), 2);
        assert_eq!(surface.circles().count(), 1);
    }

    #[test]
    fn test_content_bounds() {
        let mut surface = RecordingSurface::new();
        assert!(surface.content_bounds().is_none());

        surface.add_line(line(0.0));
        surface.add_line(line(1.0));
        surface.set_view_bounds(Bounds::from_ranges((-5.0, 5.0), (-5.0, 5.0)));

        assert_eq!(
            surface.content_bounds(),
            Some(Bounds::from_ranges((0.0, 1.0), (0.0, 1.0)))
        );
    }

    #[test]
    fn test_recording_surface_last_view_bounds_wins() {
        let mut surface = RecordingSurface::new();
        surface.set_view_bounds(Bounds::from_ranges((0.0, 1.0), (0.0, 1.0)));
        surface.set_view_bounds(Bounds::from_ranges((-1.0, 1.0), (-2.0, 2.0)));

        assert_eq!(
            surface.view_bounds(),
            Some(Bounds::from_ranges((-1.0, 1.0), (-2.0, 2.0)))
        );
    }

    #[test]
    fn test_mut_reference_is_a_surface() {
        fn draw_one(mut surface: impl DrawingSurface) {
            surface.add_line(line(0.5));
        }

        let mut surface = RecordingSurface::new();
        draw_one(&mut surface);

        assert_eq!(surface.lines().count(), 1);
    }
}
