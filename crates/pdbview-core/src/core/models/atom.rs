use nalgebra::Point3;
use serde::Serialize;

/// Represents one parsed `ATOM` or `HETATM` coordinate record.
///
/// A record is created only when all three coordinate columns of its source
/// line parsed as finite numbers; lines failing that check are dropped during
/// extraction and never materialize as partial records. Every other field is
/// best-effort: a blank element column yields an empty string, an unparsable
/// residue sequence yields `None`, and neither disqualifies the record.
///
/// Records are immutable after creation. Normalization produces new records
/// with transformed positions rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomRecord {
    /// The 3D coordinates of the atom in Angstroms (raw) or normalized units.
    pub position: Point3<f64>,
    /// The element symbol (e.g., "C", "N"); may be empty when the element
    /// columns are blank or the line is too short.
    pub element: String,
    /// The atom name (e.g., "CA", "OXT"), trimmed with internal whitespace
    /// removed.
    pub atom_name: String,
    /// The three-letter residue name (e.g., "ALA", "HOH"), trimmed.
    pub residue_name: String,
    /// The single-character chain identifier, or `None` when the column is
    /// blank.
    pub chain_id: Option<char>,
    /// The residue sequence number, or `None` when the column did not parse
    /// as an integer. Parse failures here do not exclude the record.
    pub residue_seq: Option<isize>,
}

impl AtomRecord {
    /// Creates a new record with the given position and empty identity fields.
    ///
    /// Mostly useful in tests and for callers that only care about geometry;
    /// the extractor fills in all fields from the source line.
    ///
    /// # Arguments
    ///
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            element: String::new(),
            atom_name: String::new(),
            residue_name: String::new(),
            chain_id: None,
            residue_seq: None,
        }
    }

    /// Returns a copy of this record at a new position, with all
    /// non-geometric fields cloned unchanged.
    ///
    /// # Arguments
    ///
    /// * `position` - The transformed coordinates for the copy.
    pub fn with_position(&self, position: Point3<f64>) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}
