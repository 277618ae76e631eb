//! SLD Style Editor WASM API
//!
//! This module provides the JavaScript-facing API for the style editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `core`: Session operations (load, snapshot, reset, rule/symbolizer edits, export)
//! - `export`: Stateless operations on a snapshot (generate, compile, validate, parse)

pub mod helpers;
pub mod core;
pub mod export;

// Re-export all public functions from modules to maintain the current public API
pub use self::core::*;
pub use self::export::{compile_sld, create_default_style, generate_sld, parse_sld, validate_sld_config};
