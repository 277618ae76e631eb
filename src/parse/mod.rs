//! Parsing module for the SLD style editor
//!
//! This module contains the logic for turning human-typed input
//! into structured values the renderers can emit.

pub mod filter;

// Re-export commonly used types
pub use filter::*;
