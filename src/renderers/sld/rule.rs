//! Rule rendering

use crate::models::{non_empty, Rule};
use crate::parse::filter::{translate_filter, FilterTranslation};
use super::builder::SldBuilder;
use super::errors::{CompileWarning, SldError};
use super::filter::write_filter;
use super::symbolizers::write_symbolizer;

/// Write one `<Rule>`.
///
/// Elements follow the SLD 1.0 order: Name, Title, Filter, scale bounds,
/// then the symbolizers in list order (their order is paint order).
///
/// # Arguments
/// * `index` - Position of the rule in its feature type style, for reporting
/// * `warnings` - Receives one entry per non-fatal problem in this rule
pub fn write_rule(
    builder: &mut SldBuilder,
    rule: &Rule,
    index: usize,
    warnings: &mut Vec<CompileWarning>,
) -> Result<(), SldError> {
    builder.open("Rule");

    if let Some(name) = non_empty(&rule.name) {
        builder.text_element("Name", name);
    }
    if let Some(title) = non_empty(&rule.title) {
        builder.text_element("Title", title);
    }

    if let Some(expression) = rule.filter.as_deref() {
        match translate_filter(expression) {
            FilterTranslation::NoFilter => {}
            FilterTranslation::Condition(condition) => write_filter(builder, &condition),
            FilterTranslation::Unparsable(raw) => {
                log::warn!("Rule {}: could not parse filter '{}'", index + 1, raw);
                builder.comment(&format!("Unparsable filter expression: {}", raw));
                warnings.push(CompileWarning {
                    rule_index: index,
                    rule_name: rule_label(rule),
                    message: format!("Unparsable filter expression: {}", raw),
                    expression: raw,
                });
            }
        }
    }

    if let Some(min) = scale_bound(rule.min_scale_denominator) {
        builder.number_element("MinScaleDenominator", min);
    }
    if let Some(max) = scale_bound(rule.max_scale_denominator) {
        builder.number_element("MaxScaleDenominator", max);
    }

    for (symbolizer_index, symbolizer) in rule.symbolizers.iter().enumerate() {
        write_symbolizer(builder, symbolizer).map_err(|e| {
            log::error!("Rule {}: {}", index + 1, e);
            e.in_rule(index, rule_label(rule), symbolizer_index)
        })?;
    }

    builder.close();
    Ok(())
}

/// Zero or negative means "no bound" and is not written
fn scale_bound(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn rule_label(rule: &Rule) -> String {
    non_empty(&rule.name).unwrap_or("unnamed").to_string()
}
