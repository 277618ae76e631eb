//! Models module for the SLD style editor
//!
//! This module contains the style tree the editor builds and the compiler
//! reads, plus the WASM-owned editing session.

pub mod style;
pub mod symbolizers;
pub mod vendor_options;
pub mod editor_state;

// Re-export commonly used types
pub use style::*;
pub use symbolizers::*;
pub use vendor_options::{VendorOptionValue, VendorOptions};
pub use editor_state::{SessionError, StyleSession};
