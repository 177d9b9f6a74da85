//! Layer table with case-insensitive, insertion-ordered storage

use indexmap::IndexMap;

pub mod layer;

pub use layer::Layer;

/// Named layer storage
///
/// Keys are uppercased for case-insensitive identity; iteration follows
/// insertion order so layer listings are stable.
#[derive(Debug, Clone, Default)]
pub struct LayerTable {
    entries: IndexMap<String, Layer>,
}

impl LayerTable {
    /// Create a new empty table
    pub fn new() -> Self {
        LayerTable {
            entries: IndexMap::new(),
        }
    }

    /// Build a table from a layer list; later duplicates replace earlier
    /// ones
    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> Self {
        let mut table = LayerTable::new();
        for layer in layers {
            table.insert(layer);
        }
        table
    }

    /// Insert a layer, replacing any existing entry with the same
    /// (case-insensitive) name
    pub fn insert(&mut self, layer: Layer) {
        self.entries.insert(layer.name.to_uppercase(), layer);
    }

    /// Get a layer by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.entries.get(&name.to_uppercase())
    }

    /// Get a mutable layer by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.entries.get_mut(&name.to_uppercase())
    }

    /// Check if a layer exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Number of layers, Defpoints included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of layers for informational display, Defpoints excluded
    pub fn display_count(&self) -> usize {
        self.entries.values().filter(|l| !l.is_defpoints()).count()
    }

    /// Iterate over all layers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.entries.values()
    }

    /// Remove all layers
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut table = LayerTable::new();
        table.insert(Layer::new("Walls"));
        assert!(table.contains("WALLS"));
        assert_eq!(table.get("walls").unwrap().name, "Walls");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table = LayerTable::from_layers(vec![
            Layer::new("B"),
            Layer::new("A"),
            Layer::new("C"),
        ]);
        let names: Vec<_> = table.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicate_replaces() {
        let table = LayerTable::from_layers(vec![
            Layer::new("walls"),
            Layer::with_color("WALLS", Color::Index(1)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Walls").unwrap().color, Color::Index(1));
    }

    #[test]
    fn test_display_count_excludes_defpoints() {
        let table = LayerTable::from_layers(vec![
            Layer::new("0"),
            Layer::new("Defpoints"),
            Layer::new("Dims"),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.display_count(), 2);
    }
}
