//! Error types for netdraw operations.
//!
//! [`ConfigurationError`] is the only error the drawing routine itself can
//! raise. [`NetdrawError`] is the umbrella error of the
//! [`NetworkDiagram`](crate::NetworkDiagram) API.

use thiserror::Error;

use crate::{export, structure::StructureError};

/// Invalid drawing configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "{spacings} node spacings given for a network with {layers} layers; \
         at most one spacing per layer is allowed"
    )]
    TooManySpacings { spacings: usize, layers: usize },
}

/// The main error type for netdraw operations.
#[derive(Debug, Error)]
pub enum NetdrawError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}
