//! Error and warning types for SLD compilation
//!
//! Fatal errors abort the whole compilation so a half-built document is never
//! returned. Warnings are embedded in the document and collected alongside it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal compilation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SldError {
    /// A symbolizer carried a `type` tag with no renderer
    #[error(
        "Unsupported symbolizer type '{kind}' in rule {} ({rule_name}), symbolizer {}",
        .rule_index + 1,
        .symbolizer_index + 1
    )]
    UnsupportedSymbolizerType {
        kind: String,
        rule_index: usize,
        rule_name: String,
        symbolizer_index: usize,
    },

    /// The requested operation exists in the interface but has no implementation
    #[error("{0} is not implemented")]
    NotImplemented(String),
}

/// Failure to render a single symbolizer, before rule context is attached
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SymbolizerError {
    #[error("No renderer for symbolizer type '{0}'")]
    UnsupportedType(String),
}

impl SymbolizerError {
    /// Attach the rule and symbolizer position
    pub fn in_rule(self, rule_index: usize, rule_name: String, symbolizer_index: usize) -> SldError {
        match self {
            SymbolizerError::UnsupportedType(kind) => SldError::UnsupportedSymbolizerType {
                kind,
                rule_index,
                rule_name,
                symbolizer_index,
            },
        }
    }
}

/// Non-fatal issue found while compiling
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompileWarning {
    pub rule_index: usize,
    pub rule_name: String,
    /// The offending input, verbatim
    pub expression: String,
    pub message: String,
}

/// A compiled document together with the warnings raised while building it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompileResult {
    pub sld: String,
    pub warnings: Vec<CompileWarning>,
}
