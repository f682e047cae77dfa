//! Netdraw Core Types and Definitions
//!
//! This crate provides the foundational types used to draw network
//! topology diagrams. It includes:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: World-space points and bounds ([`geometry`] module)
//! - **Draw**: Strokes, stacking layers, drawing primitives and the
//!   [`draw::DrawingSurface`] trait ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
