//! Renders partition results as ordered `LayerN -> CIDR list` entries

use crate::models::AllocationResult;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping of layer names to comma separated CIDR lists
///
/// Entries stay in layer order, including when serialized to a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerMap {
    entries: Vec<(String, String)>,
}

impl LayerMap {
    /// Value for a layer name (e.g., "Layer1")
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no layers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Layer names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(name, cidrs)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Serialize for LayerMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Format each layer as `"<leaf>,<az0>,<az1>,..."`
pub fn format(result: &AllocationResult) -> LayerMap {
    let entries = result
        .iter()
        .map(|layer| {
            let cidrs: Vec<String> = layer.cidrs().map(|c| c.to_string()).collect();
            (layer.name(), cidrs.join(","))
        })
        .collect();

    LayerMap { entries }
}
