//! Diagnostics module for style completeness checks
//!
//! Read-only advisory pass over a style tree. It never blocks compilation;
//! the caller decides whether the reported issues matter.

use thiserror::Error;

use crate::models::{non_empty, StyleConfig};

/// One completeness problem in a style
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Style name must not be empty")]
    MissingStyleName,

    #[error("At least one style rule is required")]
    NoRules,

    /// `index` is 0-based; the message is 1-based
    #[error("Rule {} requires at least one symbolizer", .index + 1)]
    EmptyRule { index: usize },
}

/// Collect every completeness issue in `config`
pub fn check_style(config: &StyleConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if non_empty(&config.name).is_none() {
        issues.push(ValidationIssue::MissingStyleName);
    }

    let rules = &config.feature_type_style.rules;
    if rules.is_empty() {
        issues.push(ValidationIssue::NoRules);
    }

    for (index, rule) in rules.iter().enumerate() {
        if rule.symbolizers.is_empty() {
            issues.push(ValidationIssue::EmptyRule { index });
        }
    }

    issues
}

/// Human-readable completeness errors, one per issue
pub fn validate_style(config: &StyleConfig) -> Vec<String> {
    check_style(config).iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;

    #[test]
    fn test_starter_style_is_valid() {
        assert!(validate_style(&StyleConfig::starter()).is_empty());
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(
            check_style(&StyleConfig::default()),
            vec![ValidationIssue::MissingStyleName, ValidationIssue::NoRules]
        );
    }

    #[test]
    fn test_empty_rules_are_reported_by_position() {
        let mut style = StyleConfig::starter();
        style.feature_type_style.rules.push(Rule { symbolizers: vec![], ..Rule::starter(2) });
        style.feature_type_style.rules.push(Rule::starter(3));
        style.feature_type_style.rules.push(Rule { symbolizers: vec![], ..Rule::starter(4) });

        assert_eq!(
            validate_style(&style),
            vec![
                "Rule 2 requires at least one symbolizer".to_string(),
                "Rule 4 requires at least one symbolizer".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_name_is_missing() {
        let style = StyleConfig { name: Some("  ".to_string()), ..StyleConfig::starter() };
        assert_eq!(check_style(&style), vec![ValidationIssue::MissingStyleName]);
    }

    #[test]
    fn test_validation_does_not_block_compilation() {
        let style = StyleConfig::default();
        assert!(!validate_style(&style).is_empty());
        assert!(crate::renderers::sld::to_sld(&style, None).is_ok());
    }
}
