//! Stateless export operations for the WASM API
//!
//! These functions take a style snapshot from JavaScript, so they work
//! without loading anything into the session first:
//! - SLD: compile a style to an SLD 1.0.0 document
//! - Validation: advisory completeness check
//! - Parsing: SLD back to a style (not implemented)

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, js_error, optional_layer_name, serialize};
use crate::models::StyleConfig;
use crate::{wasm_info, wasm_log, wasm_warn};

// ============================================================================
// SLD Export
// ============================================================================

/// Compile a style snapshot to SLD
///
/// # Arguments
/// * `config_js` - Style snapshot (`StyleConfig` JSON shape)
/// * `layer_name` - Server layer to reference; falls back to the style name
///
/// # Returns
/// SLD string (XML format)
#[wasm_bindgen(js_name = generateSld)]
pub fn generate_sld(config_js: JsValue, layer_name: Option<String>) -> Result<String, JsValue> {
    wasm_info!("generateSld called");

    let config: StyleConfig = deserialize(config_js, "Style deserialization error")?;
    wasm_log!("  Style has {} rules", config.feature_type_style.rules.len());

    let sld = crate::renderers::sld::to_sld(&config, optional_layer_name(layer_name).as_deref())
        .map_err(|e| js_error("SLD export error", e))?;

    wasm_info!("  SLD generated: {} bytes", sld.len());
    Ok(sld)
}

/// Compile a style snapshot to SLD and return `{ sld, warnings }`
///
/// Warnings describe non-fatal problems (e.g. filters that could not be
/// parsed and were written as comments).
#[wasm_bindgen(js_name = compileSld)]
pub fn compile_sld(config_js: JsValue, layer_name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("compileSld called");

    let config: StyleConfig = deserialize(config_js, "Style deserialization error")?;

    let result = crate::renderers::sld::compile_sld(&config, optional_layer_name(layer_name).as_deref())
        .map_err(|e| js_error("SLD export error", e))?;

    for warning in &result.warnings {
        wasm_warn!("  Rule {} ({}): {}", warning.rule_index + 1, warning.rule_name, warning.message);
    }

    serialize(&result, "Compile result serialization error")
}

// ============================================================================
// SLD Import
// ============================================================================

/// Parse an SLD document into a style snapshot (not implemented; always throws)
#[wasm_bindgen(js_name = parseSld)]
pub fn parse_sld(sld: &str) -> Result<JsValue, JsValue> {
    wasm_info!("parseSld called ({} bytes)", sld.len());

    let style = crate::converters::parse_sld(sld).map_err(|e| js_error("SLD import error", e))?;
    serialize(&style, "Style serialization error")
}

// ============================================================================
// Validation
// ============================================================================

/// Check a style snapshot for completeness
///
/// Never throws: a snapshot that cannot be read is reported as a single issue.
///
/// # Returns
/// Array of human-readable error strings (empty when complete)
#[wasm_bindgen(js_name = validateSldConfig)]
pub fn validate_sld_config(config_js: JsValue) -> js_sys::Array {
    let issues = match serde_wasm_bindgen::from_value::<StyleConfig>(config_js) {
        Ok(config) => crate::diagnostics::validate_style(&config),
        Err(e) => vec![format!("Style could not be read: {}", e)],
    };

    if !issues.is_empty() {
        wasm_warn!("validateSldConfig found {} issue(s)", issues.len());
    }

    issues.into_iter().map(JsValue::from).collect()
}

/// The style a new editor starts from
#[wasm_bindgen(js_name = createDefaultStyle)]
pub fn create_default_style() -> Result<JsValue, JsValue> {
    serialize(&StyleConfig::starter(), "Style serialization error")
}
