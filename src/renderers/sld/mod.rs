//! SLD export module
//!
//! Compiles a style tree into an OGC Styled Layer Descriptor 1.0.0 document.
//!
//! # Module Structure
//!
//! - **converter**: Main entry points (`to_sld()`, `compile_sld()`) and the document shell
//! - **rule**: Rule rendering (name, title, filter, scale bounds, symbolizers)
//! - **symbolizers**: Per-variant symbolizer rendering and shared paint blocks
//! - **vendor_options**: Label vendor option rendering
//! - **filter**: `ogc:Filter` rendering for translated filter expressions
//! - **builder**: Indented XML writer, escaping and number formatting
//! - **errors**: Fatal errors, warnings and the compile report
//!
//! Data flows one way: style tree → converter → rule → symbolizers/filter → builder.

pub mod builder;
pub mod converter;
pub mod errors;
pub mod filter;
pub mod rule;
pub mod symbolizers;
pub mod vendor_options;

pub use builder::{format_number, xml_escape, SldBuilder};
pub use converter::{compile_sld, to_sld, DEFAULT_STYLE_NAME};
pub use errors::{CompileResult, CompileWarning, SldError, SymbolizerError};
