//! Filter expression translation
//!
//! Turns a human-typed comparison such as `pop >= 100` or `name LIKE 'A%'`
//! into a structured filter condition. Only a single binary comparison is
//! recognised; there is no boolean algebra, grouping or function support.

use serde::{Deserialize, Serialize};

/// OGC binary comparison operators
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonOperator {
    EqualTo,
    NotEqualTo,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    /// The `ogc:` element name for this operator
    pub fn element_name(&self) -> &'static str {
        match self {
            ComparisonOperator::EqualTo => "ogc:PropertyIsEqualTo",
            ComparisonOperator::NotEqualTo => "ogc:PropertyIsNotEqualTo",
            ComparisonOperator::LessThan => "ogc:PropertyIsLessThan",
            ComparisonOperator::GreaterThan => "ogc:PropertyIsGreaterThan",
            ComparisonOperator::LessThanOrEqualTo => "ogc:PropertyIsLessThanOrEqualTo",
            ComparisonOperator::GreaterThanOrEqualTo => "ogc:PropertyIsGreaterThanOrEqualTo",
        }
    }
}

/// Pattern syntax used by `ogc:PropertyIsLike`
pub const LIKE_WILDCARD: &str = "*";
pub const LIKE_SINGLE_CHAR: &str = "?";
pub const LIKE_ESCAPE: &str = "\\";

/// A structured test over one feature property.
/// Values are stored unescaped; escaping happens when the document is written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum FilterCondition {
    Comparison {
        operator: ComparisonOperator,
        property: String,
        literal: String,
    },
    Like {
        property: String,
        pattern: String,
    },
}

/// Outcome of translating one raw expression
#[derive(Clone, Debug, PartialEq)]
pub enum FilterTranslation {
    /// Blank input: the rule has no filter at all
    NoFilter,
    Condition(FilterCondition),
    /// No recognised operator; carries the raw, untrimmed input
    Unparsable(String),
}

// Tested in this order, first match wins. Every token is surrounded by
// spaces, so " > " can never match inside " >= ".
const COMPARISON_TOKENS: [(&str, ComparisonOperator); 5] = [
    (" = ", ComparisonOperator::EqualTo),
    (" > ", ComparisonOperator::GreaterThan),
    (" < ", ComparisonOperator::LessThan),
    (" >= ", ComparisonOperator::GreaterThanOrEqualTo),
    (" <= ", ComparisonOperator::LessThanOrEqualTo),
];

const NOT_EQUAL_TOKENS: [&str; 2] = [" != ", " <> "];

const LIKE_TOKEN: &str = " like ";

/// Translate a raw filter expression
pub fn translate_filter(expression: &str) -> FilterTranslation {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return FilterTranslation::NoFilter;
    }

    for (token, operator) in COMPARISON_TOKENS {
        if let Some((property, literal)) = split_operands(trimmed, token) {
            return comparison(operator, property, literal);
        }
    }

    for token in NOT_EQUAL_TOKENS {
        if let Some((property, literal)) = split_operands(trimmed, token) {
            return comparison(ComparisonOperator::NotEqualTo, property, literal);
        }
    }

    if let Some(condition) = translate_like(trimmed) {
        return FilterTranslation::Condition(condition);
    }

    log::debug!("No comparison operator found in filter '{}'", expression);
    FilterTranslation::Unparsable(expression.to_string())
}

fn comparison(operator: ComparisonOperator, property: &str, literal: &str) -> FilterTranslation {
    FilterTranslation::Condition(FilterCondition::Comparison {
        operator,
        property: property.to_string(),
        literal: literal.to_string(),
    })
}

/// Split on the first occurrence of `token`, trimming both sides
fn split_operands<'a>(expression: &'a str, token: &str) -> Option<(&'a str, &'a str)> {
    expression
        .split_once(token)
        .map(|(left, right)| (left.trim(), right.trim()))
}

fn translate_like(expression: &str) -> Option<FilterCondition> {
    // ASCII lowercasing keeps byte offsets valid for `expression`
    let position = expression.to_ascii_lowercase().find(LIKE_TOKEN)?;
    let property = expression[..position].trim();
    let pattern = strip_quotes(expression[position + LIKE_TOKEN.len()..].trim());

    Some(FilterCondition::Like {
        property: property.to_string(),
        pattern: pattern.to_string(),
    })
}

/// Drop one leading and one trailing quote character, single or double
fn strip_quotes(literal: &str) -> &str {
    let is_quote = |c: char| c == '\'' || c == '"';
    let literal = literal.strip_prefix(is_quote).unwrap_or(literal);
    literal.strip_suffix(is_quote).unwrap_or(literal)
}
