//! Layer allocation models

use ipnet::Ipv4Net;
use serde::Serialize;

/// One layer of the partitioned address space
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayerAllocation {
    /// 1-based layer index
    pub index: u8,
    /// Block split off for this layer (prefix = base prefix + index)
    pub leaf: Ipv4Net,
    /// Equal AZ subnets covering `leaf`, in ascending address order
    pub az_blocks: Vec<Ipv4Net>,
}

impl LayerAllocation {
    /// Layer identifier used in formatted output (e.g., "Layer1")
    pub fn name(&self) -> String {
        format!("Layer{}", self.index)
    }

    /// Leaf block followed by each AZ block
    pub fn cidrs(&self) -> impl Iterator<Item = &Ipv4Net> {
        std::iter::once(&self.leaf).chain(self.az_blocks.iter())
    }
}

/// Ordered result of a partition run, one entry per requested layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    /// Normalized base block the layers were carved from
    pub base: Ipv4Net,
    /// Layers indexed 1..=layer_count
    pub layers: Vec<LayerAllocation>,
}

impl AllocationResult {
    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers were produced
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Get a layer by its 1-based index
    pub fn layer(&self, index: u8) -> Option<&LayerAllocation> {
        self.layers.get(usize::from(index).checked_sub(1)?)
    }

    /// Iterate layers in index order
    pub fn iter(&self) -> std::slice::Iter<'_, LayerAllocation> {
        self.layers.iter()
    }

    /// All AZ blocks across every layer, in layer order
    pub fn az_blocks(&self) -> impl Iterator<Item = &Ipv4Net> {
        self.layers.iter().flat_map(|l| l.az_blocks.iter())
    }
}

impl<'a> IntoIterator for &'a AllocationResult {
    type Item = &'a LayerAllocation;
    type IntoIter = std::slice::Iter<'a, LayerAllocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

impl IntoIterator for AllocationResult {
    type Item = LayerAllocation;
    type IntoIter = std::vec::IntoIter<LayerAllocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
