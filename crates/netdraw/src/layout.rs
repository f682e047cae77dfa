//! Node placement for network diagrams.
//!
//! Layers are columns. Column `i` sits at
//! `x = i * layer_spacing - total_width / 2`, so the network is centered
//! horizontally on `x = 0`. Within a column, node `j` sits at
//! `y = j * spacing + offset`, where the offset lines up the vertical middle
//! of every column with the middle of the tallest one.

use log::debug;

use netdraw_core::geometry::{Bounds, Point};

use crate::{error::ConfigurationError, spacing::NodeSpacing, structure::NetworkStructure};

/// Resolved geometry of a network diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkLayout {
    layer_sizes: Vec<usize>,
    spacings: Vec<f32>,
    layer_spacing: f32,
    max_half_height: f32,
}

impl NetworkLayout {
    /// Computes the layout of `structure`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::TooManySpacings`] if `node_spacing`
    /// lists more spacings than there are layers.
    pub fn new<K: Ord>(
        structure: &NetworkStructure<K>,
        layer_spacing: f32,
        node_spacing: &NodeSpacing,
    ) -> Result<Self, ConfigurationError> {
        let layer_sizes: Vec<usize> = structure.layer_sizes().collect();
        let spacings = node_spacing.resolve(layer_sizes.len())?;

        let max_half_height = layer_sizes
            .iter()
            .zip(&spacings)
            .map(|(size, spacing)| layer_height(*size, *spacing) / 2.0)
            .fold(f32::NEG_INFINITY, f32::max);

        debug!(
            layers = layer_sizes.len(),
            layer_spacing,
            max_half_height;
            "Network layout computed"
        );

        Ok(Self {
            layer_sizes,
            spacings,
            layer_spacing,
            max_half_height,
        })
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Neuron count of each layer.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Resolved vertical spacing of each layer.
    pub fn spacings(&self) -> &[f32] {
        &self.spacings
    }

    /// Horizontal gap between adjacent columns.
    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    /// Distance between the first and last column.
    pub fn total_width(&self) -> f32 {
        (self.layer_count() as f32 - 1.0) * self.layer_spacing
    }

    /// Half the height of the tallest layer.
    pub fn max_half_height(&self) -> f32 {
        self.max_half_height
    }

    /// Horizontal coordinate of layer `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a layer index.
    pub fn layer_x(&self, index: usize) -> f32 {
        assert!(index < self.layer_count(), "layer index out of range");
        index as f32 * self.layer_spacing - self.total_width() / 2.0
    }

    /// Node positions of layer `index`, bottom to top.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a layer index.
    pub fn layer_nodes(&self, index: usize) -> impl ExactSizeIterator<Item = Point> + '_ {
        let x = self.layer_x(index);
        let size = self.layer_sizes[index];
        let spacing = self.spacings[index];
        let y_offset = self.max_half_height - layer_height(size, spacing) / 2.0;

        (0..size).map(move |j| Point::new(x, j as f32 * spacing + y_offset))
    }

    /// Visible bounds that frame the whole network.
    ///
    /// Half a column gap is left on either side. Vertically, the tallest
    /// layer's half height plus the largest spacing is left above and below.
    pub fn view_bounds(&self) -> Bounds {
        let half_width = self.total_width() / 2.0;
        let x_margin = self.layer_spacing / 2.0;
        let max_spacing = self
            .spacings
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        let y_margin = self.max_half_height + max_spacing;

        Bounds::from_ranges(
            (-half_width - x_margin, half_width + x_margin),
            (-y_margin, 2.0 * self.max_half_height + y_margin),
        )
    }
}

fn layer_height(size: usize, spacing: f32) -> f32 {
    (size as f32 - 1.0) * spacing
}
