//! # Core Module
//!
//! The computational core of pdbview: molecular data models, fixed-column
//! record extraction, and the geometry routines that turn raw coordinates
//! into a centered, uniformly scaled point set.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Typed records for parsed
//!   `ATOM`/`HETATM` lines and the two-group structure container
//! - **File I/O** ([`io`]) - Fixed-column extraction from PDB text
//! - **Utilities** ([`utils`]) - Bounding boxes, normalization, and element
//!   display metadata
//!
//! Everything in this module is pure and synchronous; each call is
//! independent and referentially transparent given the same input.

pub mod io;
pub mod models;
pub mod utils;
