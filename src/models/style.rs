//! Style tree root structures
//!
//! `StyleConfig` is the snapshot the editor hands over for compilation. It is
//! only ever read by the compiler.

use serde::{Deserialize, Serialize};

use super::symbolizers::Symbolizer;

/// Root of the style tree
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub feature_type_style: FeatureTypeStyle,
}

/// Ordered rule list; order is the painter's order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureTypeStyle {
    pub name: Option<String>,
    pub title: Option<String>,
    pub rules: Vec<Rule>,
}

/// A named, optionally scale- and filter-bounded group of symbolizers
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    pub name: Option<String>,
    pub title: Option<String>,

    /// Raw comparison expression, e.g. "pop >= 100"
    pub filter: Option<String>,

    pub min_scale_denominator: Option<f64>,
    pub max_scale_denominator: Option<f64>,
    pub symbolizers: Vec<Symbolizer>,
}

impl StyleConfig {
    /// The style a fresh editing session starts from
    pub fn starter() -> Self {
        Self {
            name: Some("default_style".to_string()),
            title: Some("Default Style".to_string()),
            abstract_text: Some(String::new()),
            feature_type_style: FeatureTypeStyle {
                name: Some("default".to_string()),
                title: Some("Default Feature Type Style".to_string()),
                rules: vec![Rule::starter(1)],
            },
        }
    }
}

impl Rule {
    /// Rule `number` (1-based) with the default polygon symbolizer
    pub fn starter(number: usize) -> Self {
        Self {
            name: Some(format!("rule{}", number)),
            title: Some(format!("Rule {}", number)),
            filter: Some(String::new()),
            min_scale_denominator: None,
            max_scale_denominator: None,
            symbolizers: vec![Symbolizer::starter()],
        }
    }
}

/// `Some(text)` when the field holds non-blank text
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
