use crate::core::models::atom::AtomRecord;
use crate::core::models::structure::StructureData;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Record-type tag for standard atomic coordinate entries, columns [0,6).
const PRIMARY_TAG: &str = "ATOM";
/// Record-type tag for heterogeneous coordinate entries (ligands, waters).
const HETERO_TAG: &str = "HETATM";

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// Spans reaching past the end of a short line are clamped, so a line
// truncated mid-column still yields its partial field text.
fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, start: usize, end: usize) -> Option<f64> {
    slice_and_trim(line, start, end)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Extracts one record from a line already known to carry a matching tag.
///
/// Returns `None` unless all three coordinate columns parse as finite
/// numbers; no other field can disqualify the record.
fn parse_record(line: &str) -> Option<AtomRecord> {
    let x = parse_coordinate(line, 30, 38)?;
    let y = parse_coordinate(line, 38, 46)?;
    let z = parse_coordinate(line, 46, 54)?;

    let atom_name: String = slice_and_trim(line, 12, 16)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let residue_name = slice_and_trim(line, 17, 20).to_string();
    let chain_id = slice_and_trim(line, 21, 22).chars().next();
    let residue_seq = slice_and_trim(line, 22, 26).parse::<isize>().ok();
    let element = slice_and_trim(line, 76, 78).to_string();

    Some(AtomRecord {
        position: Point3::new(x, y, z),
        element,
        atom_name,
        residue_name,
        chain_id,
        residue_seq,
    })
}

/// Parses raw PDB text into its two record groups.
///
/// Lines are classified by the trimmed record-type tag in columns [0,6).
/// `ATOM` lines feed the primary group and `HETATM` lines the heteroatom
/// group; all other lines are ignored. Fields are extracted by fixed
/// character-column ranges, tolerating short lines (an out-of-range span
/// reads as empty). A line contributes a record only when its x, y, and z
/// columns all parse as finite numbers; otherwise it is silently dropped.
///
/// This function never fails: empty input yields two empty groups, and
/// malformed content is absorbed rather than reported.
///
/// # Arguments
///
/// * `text` - The complete raw text of a structure file.
///
/// # Return
///
/// Returns the extracted [`StructureData`] with both groups in input line
/// order.
pub fn parse(text: &str) -> StructureData {
    let mut structure = StructureData::new();

    for line in text.split('\n') {
        let record_type = slice_and_trim(line, 0, 6);
        let group = match record_type {
            PRIMARY_TAG => &mut structure.atoms,
            HETERO_TAG => &mut structure.hetatms,
            _ => continue,
        };
        if let Some(record) = parse_record(line) {
            group.push(record);
        }
    }

    structure
}

/// Reads and parses a structure from a buffered reader.
///
/// # Arguments
///
/// * `reader` - The buffered reader to read from.
///
/// # Errors
///
/// Returns [`PdbError::Io`] if reading fails; content itself never produces
/// an error.
pub fn read_from(reader: &mut impl BufRead) -> Result<StructureData, PdbError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

/// Reads and parses a structure from a file path.
///
/// # Arguments
///
/// * `path` - The path to the file to read.
///
/// # Errors
///
/// Returns [`PdbError::Io`] if the file cannot be opened or read.
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<StructureData, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ATOM_LINE_N: &str =
        "ATOM      1  N   ALA A   1      10.000  10.000  10.000  1.00  0.00           N";
    const ATOM_LINE_CA: &str =
        "ATOM      2  CA  ALA A   1      12.000  10.000  10.000  1.00  0.00           C";
    const HETATM_LINE: &str =
        "HETATM  901  O   HOH B 101      -2.500   3.250   0.750  1.00  0.00           O";

    #[test]
    fn empty_input_yields_two_empty_groups() {
        let structure = parse("");
        assert!(structure.atoms.is_empty());
        assert!(structure.hetatms.is_empty());
    }

    #[test]
    fn atom_line_fields_are_extracted_by_column() {
        let structure = parse(ATOM_LINE_N);
        assert_eq!(structure.atoms.len(), 1);

        let record = &structure.atoms[0];
        assert_eq!(record.position, Point3::new(10.0, 10.0, 10.0));
        assert_eq!(record.atom_name, "N");
        assert_eq!(record.residue_name, "ALA");
        assert_eq!(record.chain_id, Some('A'));
        assert_eq!(record.residue_seq, Some(1));
        assert_eq!(record.element, "N");
    }

    #[test]
    fn hetatm_lines_are_routed_to_the_hetero_group_only() {
        let text = format!("{}\n{}\n", ATOM_LINE_N, HETATM_LINE);
        let structure = parse(&text);

        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.hetatms.len(), 1);
        assert_eq!(structure.hetatms[0].residue_name, "HOH");
        assert_eq!(structure.hetatms[0].position, Point3::new(-2.5, 3.25, 0.75));
    }

    #[test]
    fn unrecognized_record_tags_are_ignored() {
        let text = format!(
            "HEADER    HYDROLASE\nREMARK   2\n{}\nTER\nCONECT    1    2\nEND\n",
            ATOM_LINE_N
        );
        let structure = parse(&text);
        assert_eq!(structure.atoms.len(), 1);
        assert!(structure.hetatms.is_empty());
    }

    #[test]
    fn tag_comparison_uses_the_trimmed_prefix() {
        // "ATOMIC" has a non-matching first-six-column tag; "ATOM" padded
        // with spaces inside columns [0,6) matches after trimming.
        let text = format!("ATOMIC    1  N   ALA A   1      10.000  10.000  10.000\n{}", ATOM_LINE_CA);
        let structure = parse(&text);
        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.atoms[0].atom_name, "CA");
    }

    #[test]
    fn record_order_matches_input_line_order() {
        let text = format!("{}\n{}\n", ATOM_LINE_N, ATOM_LINE_CA);
        let structure = parse(&text);

        assert_eq!(structure.atoms.len(), 2);
        assert_eq!(structure.atoms[0].atom_name, "N");
        assert_eq!(structure.atoms[1].atom_name, "CA");
    }

    #[test]
    fn non_numeric_coordinate_drops_the_record_silently() {
        // x column blanked out.
        let bad = "ATOM      1  N   ALA A   1              10.000  10.000  1.00  0.00           N";
        let text = format!("{}\n{}\n", bad, ATOM_LINE_CA);
        let structure = parse(&text);

        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.atoms[0].atom_name, "CA");
        assert!(structure.hetatms.is_empty());
    }

    #[test]
    fn non_finite_coordinate_drops_the_record() {
        let inf = "ATOM      1  N   ALA A   1         inf  10.000  10.000  1.00  0.00           N";
        let structure = parse(inf);
        assert!(structure.atoms.is_empty());
    }

    #[test]
    fn short_line_with_full_coordinates_keeps_the_record() {
        // Line ends right after the z column; element columns are absent.
        let short = "ATOM      1  N   ALA A   1      10.000  10.000  10.000";
        let structure = parse(short);

        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.atoms[0].element, "");
        assert_eq!(structure.atoms[0].position, Point3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn line_shorter_than_coordinate_columns_is_dropped_not_panicked() {
        let structure = parse("ATOM      1  N   ALA A   1");
        assert!(structure.atoms.is_empty());
    }

    #[test]
    fn line_truncated_mid_column_keeps_the_partial_field_text() {
        // z column is cut short but still parses from the partial span.
        let truncated = "ATOM      1  N   ALA A   1      10.000  10.000  10.5";
        let structure = parse(truncated);

        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.atoms[0].position, Point3::new(10.0, 10.0, 10.5));
    }

    #[test]
    fn atom_name_internal_whitespace_is_removed() {
        // Columns [12,16) contain "N  A"; stripping interior whitespace
        // collapses it to "NA".
        let line = "ATOM      1 N  A ALA A   1      10.000  10.000  10.000  1.00  0.00          NA";
        let structure = parse(line);
        assert_eq!(structure.atoms[0].atom_name, "NA");
    }

    #[test]
    fn unparsable_residue_seq_keeps_the_record() {
        let line = "ATOM      1  N   ALA A  X7      10.000  10.000  10.000  1.00  0.00           N";
        let structure = parse(line);

        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.atoms[0].residue_seq, None);
    }

    #[test]
    fn blank_chain_id_is_absent() {
        let line = "ATOM      1  N   ALA     1      10.000  10.000  10.000  1.00  0.00           N";
        let structure = parse(line);
        assert_eq!(structure.atoms[0].chain_id, None);
    }

    #[test]
    fn read_from_path_parses_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.pdb");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{}", ATOM_LINE_N).unwrap();
        writeln!(file, "{}", HETATM_LINE).unwrap();
        drop(file);

        let structure = read_from_path(&path).unwrap();
        assert_eq!(structure.atoms.len(), 1);
        assert_eq!(structure.hetatms.len(), 1);
    }

    #[test]
    fn read_from_path_propagates_missing_file_error() {
        let result = read_from_path("/nonexistent/structure.pdb");
        assert!(matches!(result, Err(PdbError::Io(_))));
    }

    #[test]
    fn windows_line_endings_are_tolerated() {
        // The trailing \r lands in a column beyond any extracted field for
        // full-width lines.
        let text = format!("{}\r\n{}\r\n", ATOM_LINE_N, ATOM_LINE_CA);
        let structure = parse(&text);
        assert_eq!(structure.atoms.len(), 2);
    }
}
