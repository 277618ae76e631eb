//! `ogc:Filter` rendering

use crate::parse::filter::{FilterCondition, LIKE_ESCAPE, LIKE_SINGLE_CHAR, LIKE_WILDCARD};
use super::builder::SldBuilder;

/// Write an `ogc:Filter` block for one condition
pub fn write_filter(builder: &mut SldBuilder, condition: &FilterCondition) {
    builder.open("ogc:Filter");

    match condition {
        FilterCondition::Comparison { operator, property, literal } => {
            builder.open(operator.element_name());
            write_operands(builder, property, literal);
            builder.close();
        }
        FilterCondition::Like { property, pattern } => {
            builder.open_with_attributes(
                "ogc:PropertyIsLike",
                &[
                    ("wildCard", LIKE_WILDCARD),
                    ("singleChar", LIKE_SINGLE_CHAR),
                    ("escape", LIKE_ESCAPE),
                ],
            );
            write_operands(builder, property, pattern);
            builder.close();
        }
    }

    builder.close();
}

fn write_operands(builder: &mut SldBuilder, property: &str, literal: &str) {
    builder.text_element("ogc:PropertyName", property);
    builder.text_element("ogc:Literal", literal);
}
