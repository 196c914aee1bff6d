use super::atom::AtomRecord;
use serde::Serialize;

/// Represents the contents of a parsed structure file as two independent
/// record groups.
///
/// Each group preserves the order of its records relative to the input line
/// order. The groups never share or influence each other: normalization of
/// the primary group is computed only from its own members, and likewise for
/// the heteroatom group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureData {
    /// Primary atom records, in input line order.
    pub atoms: Vec<AtomRecord>,
    /// Heteroatom records (ligands, waters, cofactors), in input line order.
    pub hetatms: Vec<AtomRecord>,
}

impl StructureData {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when neither group contains any records.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.hetatms.is_empty()
    }

    /// Returns the total number of records across both groups.
    pub fn len(&self) -> usize {
        self.atoms.len() + self.hetatms.len()
    }
}
