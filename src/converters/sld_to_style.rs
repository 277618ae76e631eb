//! SLD → style tree conversion
//!
//! The entry point exists so callers can depend on it, but reading SLD back
//! into a `StyleConfig` is not supported. It fails up front instead of
//! returning a partially recovered style.

use crate::models::StyleConfig;
use crate::renderers::sld::SldError;

/// Parse an SLD document into a style tree.
///
/// # Returns
/// * `Err(SldError::NotImplemented)` - always
pub fn parse_sld(_sld: &str) -> Result<StyleConfig, SldError> {
    log::warn!("parse_sld called, but SLD parsing is not implemented");
    Err(SldError::NotImplemented("SLD parsing".to_string()))
}
