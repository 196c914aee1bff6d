//! # pdbview Core Library
//!
//! A small library that turns raw PDB structure files into normalized,
//! render-ready point sets for visualization front-ends.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`,
//!   `StructureData`), the fixed-column record extractor, and the pure
//!   geometry routines (bounding boxes, centering, uniform scaling).
//!
//! - **[`workflows`]: The Public API.** Thin composition of the core pieces
//!   into complete operations, such as [`workflows::prepare::prepare_structure`],
//!   which extracts both record groups from raw text and normalizes each one
//!   independently.
//!
//! Everything here is synchronous and side-effect-free; fetching files from a
//! remote archive is the caller's concern.

pub mod core;
pub mod workflows;
