//! Vertical node spacing configuration.

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Spacing used for layers a [`NodeSpacing::PerLayer`] list does not cover.
pub const DEFAULT_NODE_SPACING: f32 = 1.0;

/// Vertical gap between consecutive nodes of a layer.
///
/// Resolution into one spacing per layer is deliberately asymmetric:
///
/// - a per-layer list **longer** than the layer count is a
///   [`ConfigurationError`];
/// - a list **shorter** than the layer count is silently padded with
///   [`DEFAULT_NODE_SPACING`] (`1.0`), which is usually much larger than
///   the spacings given explicitly. A list that is one entry short will not
///   be reported.
///
/// Deserializes from either a number or an array of numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NodeSpacing {
    /// The same spacing for every layer.
    Uniform(f32),
    /// Spacing per layer, in ascending layer order.
    PerLayer(Vec<f32>),
}

impl NodeSpacing {
    /// Resolves to exactly one spacing per layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooManySpacings`] if a per-layer list
    /// has more entries than `layers`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netdraw::NodeSpacing;
    ///
    /// let spacing = NodeSpacing::PerLayer(vec![0.2, 0.4]);
    /// assert_eq!(spacing.resolve(3).unwrap(), vec![0.2, 0.4, 1.0]);
    /// assert!(spacing.resolve(1).is_err());
    /// ```
    pub fn resolve(&self, layers: usize) -> Result<Vec<f32>, ConfigurationError> {
        match self {
            Self::Uniform(spacing) => Ok(vec![*spacing; layers]),
            Self::PerLayer(spacings) if spacings.len() > layers => {
                Err(ConfigurationError::TooManySpacings {
                    spacings: spacings.len(),
                    layers,
                })
            }
            Self::PerLayer(spacings) => {
                let mut resolved = spacings.clone();
                resolved.resize(layers, DEFAULT_NODE_SPACING);
                Ok(resolved)
            }
        }
    }
}

impl Default for NodeSpacing {
    fn default() -> Self {
        Self::Uniform(0.2)
    }
}

impl From<f32> for NodeSpacing {
    fn from(spacing: f32) -> Self {
        Self::Uniform(spacing)
    }
}

impl From<Vec<f32>> for NodeSpacing {
    fn from(spacings: Vec<f32>) -> Self {
        Self::PerLayer(spacings)
    }
}
