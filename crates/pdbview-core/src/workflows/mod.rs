//! # Workflows Module
//!
//! High-level entry points composing the core pieces into complete
//! operations.
//!
//! ## Architecture
//!
//! - **Preparation Workflow** ([`prepare`]) - Extracts both record groups
//!   from raw structure-file text and normalizes each one independently,
//!   producing the render-ready point set a viewer consumes.

pub mod prepare;
