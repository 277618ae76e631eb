//! Renderers module for the SLD style editor
//!
//! This module contains rendering/export logic for converting
//! style trees into styling documents.

pub mod sld;

// Re-export commonly used types
pub use sld::*;
