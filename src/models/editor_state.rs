//! Editor session state
//!
//! `StyleSession` is the WASM-owned editing state: the style being edited
//! plus the server layer it should preview against. Resetting replaces the
//! whole value, so nothing from the previous style can survive a reset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Rule, StyleConfig, Symbolizer};
use crate::renderers::sld::{to_sld, SldError};

/// Index errors raised by session edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Rule index {index} out of bounds ({len} rules)")]
    RuleOutOfRange { index: usize, len: usize },

    #[error("Symbolizer index {index} out of bounds ({len} symbolizers in rule {rule_index})")]
    SymbolizerOutOfRange { rule_index: usize, index: usize, len: usize },
}

/// Complete editing state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleSession {
    /// The style being edited
    pub style: StyleConfig,

    /// Server layer the compiled document should reference
    pub layer_name: Option<String>,
}

impl Default for StyleSession {
    fn default() -> Self {
        Self {
            style: StyleConfig::starter(),
            layer_name: None,
        }
    }
}

impl StyleSession {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style,
            layer_name: None,
        }
    }

    /// Replace the edited style wholesale
    pub fn replace_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    /// Return to the starter style with no target layer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_layer_name(&mut self, layer_name: Option<String>) {
        self.layer_name = layer_name.filter(|name| !name.trim().is_empty());
    }

    /// Append a new rule with the default symbolizer; returns its index
    pub fn add_rule(&mut self) -> usize {
        let rules = &mut self.style.feature_type_style.rules;
        rules.push(Rule::starter(rules.len() + 1));
        rules.len() - 1
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<Rule, SessionError> {
        let rules = &mut self.style.feature_type_style.rules;
        if index >= rules.len() {
            return Err(SessionError::RuleOutOfRange { index, len: rules.len() });
        }
        Ok(rules.remove(index))
    }

    /// Append the default symbolizer to a rule; returns its index
    pub fn add_symbolizer(&mut self, rule_index: usize) -> Result<usize, SessionError> {
        let rule = self.rule_mut(rule_index)?;
        rule.symbolizers.push(Symbolizer::starter());
        Ok(rule.symbolizers.len() - 1)
    }

    pub fn remove_symbolizer(
        &mut self,
        rule_index: usize,
        index: usize,
    ) -> Result<Symbolizer, SessionError> {
        let rule = self.rule_mut(rule_index)?;
        if index >= rule.symbolizers.len() {
            return Err(SessionError::SymbolizerOutOfRange {
                rule_index,
                index,
                len: rule.symbolizers.len(),
            });
        }
        Ok(rule.symbolizers.remove(index))
    }

    /// Compile the edited style against the session's target layer
    pub fn to_sld(&self) -> Result<String, SldError> {
        to_sld(&self.style, self.layer_name.as_deref())
    }

    fn rule_mut(&mut self, index: usize) -> Result<&mut Rule, SessionError> {
        let rules = &mut self.style.feature_type_style.rules;
        let len = rules.len();
        rules.get_mut(index).ok_or(SessionError::RuleOutOfRange { index, len })
    }
}
