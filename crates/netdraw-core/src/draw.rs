//! Drawing primitives and surfaces.
//!
//! This module provides the primitives the layout routine emits and the
//! [`DrawingSurface`] abstraction that receives them.
//!
//! # Layer-Based Rendering
//!
//! Every primitive carries a [`RenderLayer`] that acts as its stacking order.
//! Surfaces are free to record primitives in call order; renderers sort them
//! by layer so edges always end up beneath nodes.

mod layer;
mod primitive;
mod stroke;
mod surface;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Circle, LineSegment};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface};

use crate::geometry::Bounds;

/// Trait for primitives that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this primitive into a [`LayeredOutput`].
    ///
    /// Emitted SVG coordinates are in screen orientation: the world y
    /// coordinate is negated so that "up" in world space is "up" on screen.
    fn render_to_layers(&self) -> LayeredOutput;

    /// Returns the world-space bounds covered by this primitive.
    fn bounds(&self) -> Bounds;
}
