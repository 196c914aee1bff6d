//! Provides input functionality for the PDB molecular file format.
//!
//! Only the fixed-column `ATOM` and `HETATM` coordinate records are
//! interpreted; every other record kind is passed over without error. The
//! extractor never fails on malformed content — degradation is absorbed by
//! dropping records whose coordinates do not parse.

pub mod pdb;
