//! Element display metadata for render output.
//!
//! Colors follow the CPK convention (Jmol variant) as 24-bit RGB values.

use phf::phf_map;

/// Color used for unknown or blank element symbols.
pub const UNKNOWN_ELEMENT_COLOR: u32 = 0xFF1493;

static ELEMENT_COLORS: phf::Map<&'static str, u32> = phf_map! {
    "H" => 0xFFFFFF,
    "HE" => 0xD9FFFF,
    "LI" => 0xCC80FF,
    "B" => 0xFFB5B5,
    "C" => 0x909090,
    "N" => 0x3050F8,
    "O" => 0xFF0D0D,
    "F" => 0x90E050,
    "NA" => 0xAB5CF2,
    "MG" => 0x8AFF00,
    "AL" => 0xBFA6A6,
    "SI" => 0xF0C8A0,
    "P" => 0xFF8000,
    "S" => 0xFFFF30,
    "CL" => 0x1FF01F,
    "K" => 0x8F40D4,
    "CA" => 0x3DFF00,
    "MN" => 0x9C7AC7,
    "FE" => 0xE06633,
    "CO" => 0xF090A0,
    "NI" => 0x50D050,
    "CU" => 0xC88033,
    "ZN" => 0x7D80B0,
    "BR" => 0xA62929,
    "SE" => 0xFFA100,
    "MO" => 0x54B5B5,
    "I" => 0x940094,
};

/// Looks up the CPK display color for an element symbol.
///
/// Matching is case-insensitive; unknown or empty symbols fall back to
/// [`UNKNOWN_ELEMENT_COLOR`].
pub fn element_color(symbol: &str) -> u32 {
    ELEMENT_COLORS
        .get(symbol.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_ELEMENT_COLOR)
}
