//! # Core Models Module
//!
//! Data structures representing parsed molecular structure files.
//!
//! ## Key Components
//!
//! - [`atom`] - One parsed coordinate record with position and identity fields
//! - [`structure`] - The two independent, order-preserving record groups
//!   (primary atoms and heteroatoms) extracted from a file

pub mod atom;
pub mod structure;
