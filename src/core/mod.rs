//! Core module - Configuration, data model, errors and rendering
//!
//! This module provides:
//! - Config loading and validation
//! - Error taxonomy with per-category exit codes
//! - Logger setup
//! - Frequency table and ranked pair types
//! - Report rendering (delimited/json/jsonl)

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
