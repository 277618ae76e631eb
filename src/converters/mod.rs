//! Format converters
//!
//! This module contains converters from styling documents back to the style tree.

pub mod sld_to_style;

// Re-export for convenience
pub use sld_to_style::parse_sld;
