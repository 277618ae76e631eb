// Filter expressions as typed into the rule editor

use sld_editor_wasm::parse::{translate_filter, ComparisonOperator, FilterCondition, FilterTranslation};
use sld_editor_wasm::{to_sld, StyleConfig};

fn compile_with_filter(filter: &str) -> String {
    let mut style = StyleConfig::starter();
    style.feature_type_style.rules[0].filter = Some(filter.to_string());
    to_sld(&style, None).expect("export should succeed")
}

#[test]
fn test_equality_example() {
    assert_eq!(
        translate_filter("pop = 100"),
        FilterTranslation::Condition(FilterCondition::Comparison {
            operator: ComparisonOperator::EqualTo,
            property: "pop".to_string(),
            literal: "100".to_string(),
        })
    );
}

#[test]
fn test_greater_or_equal_example() {
    let sld = compile_with_filter("pop >= 100");
    assert!(sld.contains("<ogc:PropertyIsGreaterThanOrEqualTo>"));
    assert!(!sld.contains("<ogc:PropertyIsGreaterThan>"));
}

#[test]
fn test_like_example() {
    let sld = compile_with_filter("name LIKE 'A%'");
    assert!(sld.contains(r#"<ogc:PropertyIsLike wildCard="*" singleChar="?" escape="\">"#));
    assert!(sld.contains("<ogc:PropertyName>name</ogc:PropertyName>"));
    assert!(sld.contains("<ogc:Literal>A%</ogc:Literal>"));
}

#[test]
fn test_no_operator_example() {
    let sld = compile_with_filter("region");
    assert!(sld.contains("<!--"));
    assert!(sld.contains("region"));
    assert!(!sld.contains("<ogc:Filter>"));
}

#[test]
fn test_blank_filter_is_omitted_entirely() {
    let sld = compile_with_filter("    ");
    assert!(!sld.contains("<ogc:Filter>"));
    assert!(!sld.contains("<!--"));
}

#[test]
fn test_each_operator_maps_to_its_element() {
    let cases = [
        ("a = 1", "ogc:PropertyIsEqualTo"),
        ("a > 1", "ogc:PropertyIsGreaterThan"),
        ("a < 1", "ogc:PropertyIsLessThan"),
        ("a >= 1", "ogc:PropertyIsGreaterThanOrEqualTo"),
        ("a <= 1", "ogc:PropertyIsLessThanOrEqualTo"),
        ("a != 1", "ogc:PropertyIsNotEqualTo"),
        ("a <> 1", "ogc:PropertyIsNotEqualTo"),
        ("a like '1'", "ogc:PropertyIsLike"),
    ];

    for (expression, element) in cases {
        let sld = compile_with_filter(expression);
        assert!(
            sld.contains(&format!("<{}", element)),
            "{} should produce {}",
            expression,
            element
        );
    }
}
