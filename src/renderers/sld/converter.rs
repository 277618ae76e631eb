//! SLD document converter
//!
//! Main entry point for compiling a `StyleConfig` to an SLD 1.0.0 document.

use crate::models::{non_empty, FeatureTypeStyle, StyleConfig};
use super::builder::SldBuilder;
use super::errors::{CompileResult, CompileWarning, SldError};
use super::rule::write_rule;

/// Name used when neither a target layer nor a style name is available
pub const DEFAULT_STYLE_NAME: &str = "default_style";

const SLD_ATTRIBUTES: [(&str, &str); 6] = [
    ("version", "1.0.0"),
    ("xmlns", "http://www.opengis.net/sld"),
    ("xmlns:ogc", "http://www.opengis.net/ogc"),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xsi:schemaLocation", "http://www.opengis.net/sld StyledLayerDescriptor.xsd"),
];

/// Compile a style to SLD, discarding warnings
///
/// # Arguments
/// * `config` - The style tree (read only)
/// * `layer_name` - Server layer the document should reference; falls back
///   to the style name, then to `default_style`
///
/// # Returns
/// * `Result<String, SldError>` - The SLD document, or the fatal error that stopped it
pub fn to_sld(config: &StyleConfig, layer_name: Option<&str>) -> Result<String, SldError> {
    compile_sld(config, layer_name).map(|result| result.sld)
}

/// Compile a style to SLD and report non-fatal problems alongside the document
pub fn compile_sld(config: &StyleConfig, layer_name: Option<&str>) -> Result<CompileResult, SldError> {
    let rules = &config.feature_type_style.rules;
    log::debug!("Starting SLD export for style with {} rules", rules.len());

    let style_name = non_empty(&config.name).unwrap_or(DEFAULT_STYLE_NAME);
    let named_layer = layer_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(style_name);

    let mut builder = SldBuilder::new();
    let mut warnings = Vec::new();

    builder.open_with_attributes("StyledLayerDescriptor", &SLD_ATTRIBUTES);
    builder.open("NamedLayer");
    builder.text_element("Name", named_layer);

    builder.open("UserStyle");
    builder.text_element("Name", style_name);
    if let Some(title) = non_empty(&config.title) {
        builder.text_element("Title", title);
    }
    if let Some(abstract_text) = non_empty(&config.abstract_text) {
        builder.text_element("Abstract", abstract_text);
    }

    write_feature_type_style(&mut builder, &config.feature_type_style, &mut warnings)?;

    builder.close();
    builder.close();
    builder.close();

    let sld = builder.finalize();
    log::debug!(
        "SLD export complete: {} bytes, {} warnings",
        sld.len(),
        warnings.len()
    );
    Ok(CompileResult { sld, warnings })
}

fn write_feature_type_style(
    builder: &mut SldBuilder,
    feature_type_style: &FeatureTypeStyle,
    warnings: &mut Vec<CompileWarning>,
) -> Result<(), SldError> {
    builder.open("FeatureTypeStyle");
    if let Some(name) = non_empty(&feature_type_style.name) {
        builder.text_element("Name", name);
    }
    if let Some(title) = non_empty(&feature_type_style.title) {
        builder.text_element("Title", title);
    }

    for (index, rule) in feature_type_style.rules.iter().enumerate() {
        write_rule(builder, rule, index, warnings)?;
    }

    builder.close();
    Ok(())
}
