use crate::core::io::pdb;
use crate::core::models::atom::AtomRecord;
use crate::core::utils::geometry::normalize_records;
use serde::Serialize;

/// A render-ready structure: both record groups centered at the origin and
/// uniformly scaled.
///
/// The groups are normalized independently; neither contributes to the
/// other's bounding box or scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreparedStructure {
    /// Normalized primary atom records, in input line order.
    pub atoms: Vec<AtomRecord>,
    /// Normalized heteroatom records, in input line order.
    pub hetatms: Vec<AtomRecord>,
}

/// Turns raw structure-file text into a render-ready point set.
///
/// Runs the record extractor once, then normalizes the primary and
/// heteroatom groups independently. Pure and infallible: malformed content
/// degrades to smaller (possibly empty) groups rather than an error.
///
/// # Arguments
///
/// * `text` - The complete raw text of a structure file.
pub fn prepare_structure(text: &str) -> PreparedStructure {
    let structure = pdb::parse(text);
    PreparedStructure {
        atoms: normalize_records(&structure.atoms),
        hetatms: normalize_records(&structure.hetatms),
    }
}
