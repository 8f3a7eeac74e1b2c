//! Backends module - The external collaborators of the pipeline
//!
//! - Text extraction (PDF via pdf-extract, plain text)
//! - Path selection (arguments or terminal prompt)
//! - Report output (atomic file write or stdout)

pub mod extract;
pub mod picker;
pub mod sink;
