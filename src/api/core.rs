//! WASM API for the editing session
//!
//! The session is the WASM-owned source of truth for the style being edited.
//! JavaScript loads or edits it through these functions and reads snapshots
//! back for display and persistence.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, optional_layer_name, serialize};
use crate::models::{StyleConfig, StyleSession};
use crate::{wasm_info, wasm_log};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<StyleSession> = Mutex::new(StyleSession::default());
}

/// Lock the session, turning a poisoned lock into a JS error
pub fn lock_session() -> Result<MutexGuard<'static, StyleSession>, JsValue> {
    SESSION
        .lock()
        .map_err(|e| js_error("Session lock error", e))
}

fn snapshot(session: &StyleSession) -> Result<JsValue, JsValue> {
    serialize(&session.style, "Style serialization error")
}

/// Replace the edited style with a snapshot from JavaScript
#[wasm_bindgen(js_name = loadStyle)]
pub fn load_style(config_js: JsValue) -> Result<(), JsValue> {
    wasm_info!("loadStyle called");

    let style: StyleConfig = deserialize(config_js, "Style deserialization error")?;
    wasm_log!("  Style has {} rules", style.feature_type_style.rules.len());

    lock_session()?.replace_style(style);
    Ok(())
}

/// Current style snapshot
#[wasm_bindgen(js_name = getStyleSnapshot)]
pub fn get_style_snapshot() -> Result<JsValue, JsValue> {
    let session = lock_session()?;
    snapshot(&session)
}

/// Reset the whole session (style and target layer) and return the new style
#[wasm_bindgen(js_name = resetStyle)]
pub fn reset_style() -> Result<JsValue, JsValue> {
    wasm_info!("resetStyle called");

    let mut session = lock_session()?;
    session.reset();
    snapshot(&session)
}

/// Set (or clear, with a blank/undefined name) the layer previews reference
#[wasm_bindgen(js_name = setTargetLayer)]
pub fn set_target_layer(layer_name: Option<String>) -> Result<(), JsValue> {
    wasm_info!("setTargetLayer called: {:?}", layer_name);

    lock_session()?.set_layer_name(optional_layer_name(layer_name));
    Ok(())
}

/// Append a rule with the default symbolizer; returns the updated style
#[wasm_bindgen(js_name = addRule)]
pub fn add_rule() -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    let index = session.add_rule();
    wasm_log!("addRule: added rule at index {}", index);
    snapshot(&session)
}

/// Remove the rule at `index`; returns the updated style
#[wasm_bindgen(js_name = deleteRule)]
pub fn delete_rule(index: usize) -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session
        .remove_rule(index)
        .map_err(|e| js_error("deleteRule failed", e))?;
    snapshot(&session)
}

/// Append the default symbolizer to a rule; returns the updated style
#[wasm_bindgen(js_name = addSymbolizer)]
pub fn add_symbolizer(rule_index: usize) -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session
        .add_symbolizer(rule_index)
        .map_err(|e| js_error("addSymbolizer failed", e))?;
    snapshot(&session)
}

/// Remove one symbolizer from a rule; returns the updated style
#[wasm_bindgen(js_name = deleteSymbolizer)]
pub fn delete_symbolizer(rule_index: usize, symbolizer_index: usize) -> Result<JsValue, JsValue> {
    let mut session = lock_session()?;
    session
        .remove_symbolizer(rule_index, symbolizer_index)
        .map_err(|e| js_error("deleteSymbolizer failed", e))?;
    snapshot(&session)
}

/// Compile the session's style against its target layer
///
/// # Returns
/// SLD string (XML format)
#[wasm_bindgen(js_name = exportSld)]
pub fn export_sld() -> Result<String, JsValue> {
    wasm_info!("exportSld called (using internal WASM session)");

    let session = lock_session()?;
    let sld = session.to_sld().map_err(|e| js_error("SLD export error", e))?;

    wasm_info!("  SLD generated: {} bytes", sld.len());
    Ok(sld)
}
