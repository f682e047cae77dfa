//! Surfaces that turn draw calls into an output format.

pub mod svg;

use thiserror::Error;

/// Errors raised while producing output from a drawing surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("view bounds were never set on the surface")]
    MissingViewBounds,

    #[error("Render error: {0}")]
    Render(String),
}
