//! The network structure being drawn.
//!
//! A [`NetworkStructure`] maps layer keys to neuron counts. Keys only need to
//! be totally ordered: ascending key order is the left-to-right layer order.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised while building a [`NetworkStructure`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("network structure must contain at least one layer")]
    Empty,

    #[error("layer {index} (in ascending key order) has no neurons")]
    EmptyLayer { index: usize },
}

/// Ordered mapping from layer key to neuron count.
///
/// Always holds at least one layer, and every layer holds at least one
/// neuron. Iteration is in ascending key order.
///
/// # Examples
///
/// ```
/// use netdraw::NetworkStructure;
///
/// let structure = NetworkStructure::new([(2, 3), (1, 3), (3, 1)]).unwrap();
/// assert_eq!(structure.layer_sizes().collect::<Vec<_>>(), vec![3, 3, 1]);
/// assert_eq!(structure.edge_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStructure<K: Ord = usize> {
    layers: BTreeMap<K, usize>,
}

impl<K: Ord> NetworkStructure<K> {
    /// Builds a structure from `(layer key, neuron count)` pairs.
    ///
    /// A key given twice keeps its last count.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Empty`] when no layers are given and
    /// [`StructureError::EmptyLayer`] when a layer has zero neurons.
    pub fn new(layers: impl IntoIterator<Item = (K, usize)>) -> Result<Self, StructureError> {
        Self::try_from(layers.into_iter().collect::<BTreeMap<_, _>>())
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Neuron counts in ascending key order.
    pub fn layer_sizes(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.layers.values().copied()
    }

    /// `(key, neuron count)` pairs in ascending key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, usize)> + '_ {
        self.layers.iter().map(|(key, size)| (key, *size))
    }

    /// Total number of neurons across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.values().sum()
    }

    /// Number of connections between adjacent layers.
    pub fn edge_count(&self) -> usize {
        let sizes: Vec<usize> = self.layer_sizes().collect();
        sizes.windows(2).map(|pair| pair[0] * pair[1]).sum()
    }
}

impl NetworkStructure<usize> {
    /// Builds a structure whose keys are the positions `0..n` of `sizes`.
    ///
    /// ```
    /// use netdraw::NetworkStructure;
    ///
    /// let structure = NetworkStructure::from_sizes([4, 8, 2]).unwrap();
    /// assert_eq!(structure.layer_count(), 3);
    /// ```
    pub fn from_sizes(sizes: impl IntoIterator<Item = usize>) -> Result<Self, StructureError> {
        Self::new(sizes.into_iter().enumerate())
    }
}

impl<K: Ord> TryFrom<BTreeMap<K, usize>> for NetworkStructure<K> {
    type Error = StructureError;

    fn try_from(layers: BTreeMap<K, usize>) -> Result<Self, Self::Error> {
        if layers.is_empty() {
            return Err(StructureError::Empty);
        }

        if let Some(index) = layers.values().position(|size| *size == 0) {
            return Err(StructureError::EmptyLayer { index });
        }

        Ok(Self { layers })
    }
}
