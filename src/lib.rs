//! SLD Style Editor WASM Module
//!
//! Compiles an in-memory cartographic style (rules, symbolizers, paint, labels)
//! into an OGC Styled Layer Descriptor 1.0.0 document for a map server.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod converters;
pub mod diagnostics;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use renderers::sld::{compile_sld, to_sld, CompileResult, CompileWarning, SldError};
pub use converters::parse_sld;
pub use diagnostics::{check_style, validate_style, ValidationIssue};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("SLD style editor WASM module initialized");
}
