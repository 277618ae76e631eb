//! WASM build test
//!
//! Exercises the JavaScript-facing API inside a wasm runtime.

#![cfg(target_arch = "wasm32")]

use sld_editor_wasm::api;
use sld_editor_wasm::StyleConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn starter_js() -> JsValue {
    serde_wasm_bindgen::to_value(&StyleConfig::starter()).unwrap()
}

#[wasm_bindgen_test]
fn test_generate_sld_with_layer() {
    let sld = api::generate_sld(starter_js(), Some("topp:states".to_string())).unwrap();
    assert!(sld.contains("<Name>topp:states</Name>"));
}

#[wasm_bindgen_test]
fn test_parse_sld_throws() {
    assert!(api::parse_sld("<StyledLayerDescriptor/>").is_err());
}

#[wasm_bindgen_test]
fn test_validate_never_throws() {
    let issues = api::validate_sld_config(JsValue::from_str("not a style"));
    assert_eq!(issues.length(), 1);

    let issues = api::validate_sld_config(starter_js());
    assert_eq!(issues.length(), 0);
}

#[wasm_bindgen_test]
fn test_session_reset() {
    api::reset_style().unwrap();
    api::add_rule().unwrap();
    api::set_target_layer(Some("osm:roads".to_string())).unwrap();
    assert!(api::export_sld().unwrap().contains("<Name>rule2</Name>"));

    api::reset_style().unwrap();
    let sld = api::export_sld().unwrap();
    assert!(!sld.contains("rule2"));
    assert!(!sld.contains("osm:roads"));
}

#[wasm_bindgen_test]
fn test_delete_rule_out_of_range_throws() {
    api::reset_style().unwrap();
    assert!(api::delete_rule(7).is_err());
}
