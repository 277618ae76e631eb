//! Symbolizer rendering
//!
//! One writer per symbolizer variant and per shared block (fill, stroke,
//! mark, font, label placement, halo). Optional fields that are unset are
//! omitted rather than written empty.

use crate::models::{
    non_empty, Fill, Font, Halo, LinePlacement, LineSymbolizer, Mark, Placement,
    PointPlacement, PointSymbolizer, PolygonSymbolizer, Stroke, Symbolizer, TextSymbolizer,
};
use super::builder::SldBuilder;
use super::errors::SymbolizerError;
use super::vendor_options::write_vendor_options;

/// Write one symbolizer. Nothing is written for an unsupported one.
pub fn write_symbolizer(
    builder: &mut SldBuilder,
    symbolizer: &Symbolizer,
) -> Result<(), SymbolizerError> {
    match symbolizer {
        Symbolizer::Polygon(polygon) => write_polygon(builder, polygon),
        Symbolizer::Line(line) => write_line(builder, line),
        Symbolizer::Point(point) => write_point(builder, point),
        Symbolizer::Text(text) => write_text(builder, text),
        Symbolizer::Unsupported(_) => {
            return Err(SymbolizerError::UnsupportedType(symbolizer.kind().to_string()))
        }
    }
    Ok(())
}

fn write_polygon(builder: &mut SldBuilder, polygon: &PolygonSymbolizer) {
    builder.open("PolygonSymbolizer");
    if let Some(fill) = &polygon.fill {
        write_fill(builder, fill);
    }
    if let Some(stroke) = &polygon.stroke {
        write_stroke(builder, stroke);
    }
    builder.close();
}

fn write_line(builder: &mut SldBuilder, line: &LineSymbolizer) {
    builder.open("LineSymbolizer");
    if let Some(stroke) = &line.stroke {
        write_stroke(builder, stroke);
    }
    builder.close();
}

fn write_point(builder: &mut SldBuilder, point: &PointSymbolizer) {
    builder.open("PointSymbolizer");
    builder.open("Graphic");
    write_mark(builder, &point.mark);
    if let Some(size) = point.mark.size {
        builder.number_element("Size", size);
    }
    builder.close();
    builder.close();
}

fn write_text(builder: &mut SldBuilder, text: &TextSymbolizer) {
    builder.open("TextSymbolizer");

    if let Some(label) = &text.label {
        if !label.property_name.trim().is_empty() {
            builder.open("Label");
            builder.text_element("ogc:PropertyName", &label.property_name);
            builder.close();
        }
    }

    if let Some(font) = &text.font {
        write_font(builder, font);
    }

    match text.label_placement.as_ref().and_then(|placement| placement.selected()) {
        Some(Placement::Point(point)) => write_point_placement(builder, point),
        Some(Placement::Line(line)) => write_line_placement(builder, line),
        None => {}
    }

    if let Some(halo) = text.halo.as_ref().filter(|halo| halo.enabled) {
        write_halo(builder, halo);
    }

    write_vendor_options(builder, &text.vendor_options);

    builder.close();
}

/// `<Fill>` with colour and opacity parameters
pub fn write_fill(builder: &mut SldBuilder, fill: &Fill) {
    builder.open("Fill");
    if let Some(color) = non_empty(&fill.color) {
        css_parameter(builder, "fill", color);
    }
    if let Some(opacity) = fill.opacity {
        css_number(builder, "fill-opacity", opacity);
    }
    builder.close();
}

/// `<Stroke>` with colour, width, opacity and dash parameters
pub fn write_stroke(builder: &mut SldBuilder, stroke: &Stroke) {
    builder.open("Stroke");
    if let Some(color) = non_empty(&stroke.color) {
        css_parameter(builder, "stroke", color);
    }
    if let Some(width) = stroke.width {
        css_number(builder, "stroke-width", width);
    }
    if let Some(opacity) = stroke.opacity {
        css_number(builder, "stroke-opacity", opacity);
    }
    if let Some(dash_array) = non_empty(&stroke.dash_array) {
        css_parameter(builder, "stroke-dasharray", dash_array);
    }
    builder.close();
}

fn write_mark(builder: &mut SldBuilder, mark: &Mark) {
    builder.open("Mark");
    if let Some(name) = non_empty(&mark.well_known_name) {
        builder.text_element("WellKnownName", name);
    }
    if let Some(fill) = &mark.fill {
        write_fill(builder, fill);
    }
    if let Some(stroke) = &mark.stroke {
        write_stroke(builder, stroke);
    }
    builder.close();
}

/// `<Font>` followed by the glyph `<Fill>`, which SLD places beside the font
fn write_font(builder: &mut SldBuilder, font: &Font) {
    builder.open("Font");
    if let Some(family) = non_empty(&font.family) {
        css_parameter(builder, "font-family", family);
    }
    if let Some(size) = font.size {
        css_number(builder, "font-size", size);
    }
    if let Some(style) = non_empty(&font.style) {
        css_parameter(builder, "font-style", style);
    }
    if let Some(weight) = non_empty(&font.weight) {
        css_parameter(builder, "font-weight", weight);
    }
    builder.close();

    if let Some(fill) = &font.fill {
        write_fill(builder, fill);
    }
}

fn write_point_placement(builder: &mut SldBuilder, point: &PointPlacement) {
    builder.open("LabelPlacement");
    builder.open("PointPlacement");

    // A coordinate pair is written when either half is set; the unset half reads 0
    if point.anchor_point_x.is_some() || point.anchor_point_y.is_some() {
        builder.open("AnchorPoint");
        builder.number_element("AnchorPointX", point.anchor_point_x.unwrap_or(0.0));
        builder.number_element("AnchorPointY", point.anchor_point_y.unwrap_or(0.0));
        builder.close();
    }

    if point.displacement_x.is_some() || point.displacement_y.is_some() {
        builder.open("Displacement");
        builder.number_element("DisplacementX", point.displacement_x.unwrap_or(0.0));
        builder.number_element("DisplacementY", point.displacement_y.unwrap_or(0.0));
        builder.close();
    }

    if let Some(rotation) = point.rotation {
        builder.number_element("Rotation", rotation);
    }

    builder.close();
    builder.close();
}

fn write_line_placement(builder: &mut SldBuilder, line: &LinePlacement) {
    builder.open("LabelPlacement");
    builder.open("LinePlacement");

    if let Some(offset) = line.perpendicular_offset {
        builder.number_element("PerpendicularOffset", offset);
    }
    if let Some(aligned) = line.is_aligned {
        builder.text_element("IsAligned", if aligned { "true" } else { "false" });
    }
    if let Some(repeat) = line.repeat.filter(|v| *v > 0.0) {
        builder.number_element("Repeat", repeat);
    }
    if let Some(gap) = line.initial_gap.filter(|v| *v > 0.0) {
        builder.number_element("InitialGap", gap);
    }

    builder.close();
    builder.close();
}

fn write_halo(builder: &mut SldBuilder, halo: &Halo) {
    builder.open("Halo");
    if let Some(radius) = halo.radius {
        builder.number_element("Radius", radius);
    }
    if let Some(fill) = &halo.fill {
        write_fill(builder, fill);
    }
    builder.close();
}

fn css_parameter(builder: &mut SldBuilder, name: &str, value: &str) {
    builder.text_element_with_attributes("CssParameter", &[("name", name)], value);
}

fn css_number(builder: &mut SldBuilder, name: &str, value: f64) {
    css_parameter(builder, name, &super::builder::format_number(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, LabelPlacement, VendorOptions};

    fn render(symbolizer: &Symbolizer) -> String {
        let mut builder = SldBuilder::new();
        write_symbolizer(&mut builder, symbolizer).unwrap();
        builder.finalize()
    }

    fn position(xml: &str, needle: &str) -> usize {
        xml.find(needle).unwrap_or_else(|| panic!("{} not found in:\n{}", needle, xml))
    }

    #[test]
    fn test_polygon_fill_before_stroke() {
        let xml = render(&Symbolizer::starter());

        assert!(xml.contains(r##"<CssParameter name="fill">#ff0000</CssParameter>"##));
        assert!(xml.contains(r#"<CssParameter name="fill-opacity">0.7</CssParameter>"#));
        assert!(xml.contains(r#"<CssParameter name="stroke-width">1</CssParameter>"#));
        assert!(position(&xml, "<Fill>") < position(&xml, "<Stroke>"));
        assert!(!xml.contains("stroke-dasharray"));
    }

    #[test]
    fn test_polygon_without_paint() {
        let xml = render(&Symbolizer::Polygon(PolygonSymbolizer::default()));
        assert!(xml.contains("<PolygonSymbolizer>"));
        assert!(!xml.contains("<Fill>"));
        assert!(!xml.contains("<Stroke>"));
    }

    #[test]
    fn test_line_with_dash() {
        let xml = render(&Symbolizer::Line(LineSymbolizer {
            stroke: Some(Stroke {
                dash_array: Some("5 2".to_string()),
                ..Stroke::new("#0000ff", 2.5, 1.0)
            }),
        }));
        assert!(xml.contains("<LineSymbolizer>"));
        assert!(xml.contains(r#"<CssParameter name="stroke-width">2.5</CssParameter>"#));
        assert!(xml.contains(r#"<CssParameter name="stroke-dasharray">5 2</CssParameter>"#));
    }

    #[test]
    fn test_point_mark_and_size() {
        let xml = render(&Symbolizer::Point(PointSymbolizer {
            mark: Mark {
                well_known_name: Some("circle".to_string()),
                fill: Some(Fill::new("#00ff00", 1.0)),
                stroke: Some(Stroke::new("#000000", 1.0, 1.0)),
                size: Some(8.0),
            },
        }));

        assert!(xml.contains("<WellKnownName>circle</WellKnownName>"));
        assert!(xml.contains("<Size>8</Size>"));
        assert!(position(&xml, "<Graphic>") < position(&xml, "<Mark>"));
        assert!(position(&xml, "<WellKnownName>") < position(&xml, "<Fill>"));
        assert!(position(&xml, "<Fill>") < position(&xml, "<Stroke>"));
        assert!(position(&xml, "</Mark>") < position(&xml, "<Size>"));
    }

    #[test]
    fn test_point_without_size() {
        let xml = render(&Symbolizer::Point(PointSymbolizer::default()));
        assert!(xml.contains("<Mark>"));
        assert!(!xml.contains("<Size>"));
    }

    #[test]
    fn test_text_block_order() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label: Some(Label { property_name: "name".to_string() }),
            font: Some(Font {
                family: Some("Arial".to_string()),
                size: Some(12.0),
                fill: Some(Fill::new("#000000", 1.0)),
                ..Default::default()
            }),
            label_placement: Some(LabelPlacement::point(PointPlacement {
                anchor_point_x: Some(0.5),
                ..Default::default()
            })),
            halo: Some(Halo {
                enabled: true,
                radius: Some(2.0),
                fill: Some(Fill::new("#ffffff", 0.8)),
            }),
            vendor_options: VendorOptions { space_around: Some(0.0), ..Default::default() },
        }));

        let label = position(&xml, "<Label>");
        let font = position(&xml, "<Font>");
        let font_end = position(&xml, "</Font>");
        let font_fill = position(&xml, "<Fill>");
        let placement = position(&xml, "<LabelPlacement>");
        let halo = position(&xml, "<Halo>");
        let vendor = position(&xml, "<VendorOption");
        assert!(label < font && font < font_end && font_end < font_fill && font_fill < placement);
        assert!(placement < halo && halo < vendor);

        assert!(xml.contains("<ogc:PropertyName>name</ogc:PropertyName>"));
        assert!(xml.contains(r#"<CssParameter name="font-family">Arial</CssParameter>"#));
        assert!(xml.contains(r#"<CssParameter name="font-size">12</CssParameter>"#));
        assert!(xml.contains("<Radius>2</Radius>"));
    }

    #[test]
    fn test_disabled_halo_is_skipped() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            halo: Some(Halo { enabled: false, radius: Some(2.0), fill: None }),
            ..Default::default()
        }));
        assert!(!xml.contains("<Halo>"));
    }

    #[test]
    fn test_blank_label_is_skipped() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label: Some(Label { property_name: " ".to_string() }),
            ..Default::default()
        }));
        assert!(!xml.contains("<Label>"));
    }

    #[test]
    fn test_point_placement_defaults_missing_coordinate() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label_placement: Some(LabelPlacement::point(PointPlacement {
                anchor_point_y: Some(1.0),
                displacement_x: Some(-3.0),
                ..Default::default()
            })),
            ..Default::default()
        }));

        assert!(xml.contains("<AnchorPointX>0</AnchorPointX>"));
        assert!(xml.contains("<AnchorPointY>1</AnchorPointY>"));
        assert!(xml.contains("<DisplacementX>-3</DisplacementX>"));
        assert!(xml.contains("<DisplacementY>0</DisplacementY>"));
        assert!(!xml.contains("<Rotation>"));
    }

    #[test]
    fn test_point_placement_without_coordinates() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label_placement: Some(LabelPlacement::point(PointPlacement {
                rotation: Some(45.0),
                ..Default::default()
            })),
            ..Default::default()
        }));

        assert!(xml.contains("<PointPlacement>"));
        assert!(!xml.contains("<AnchorPoint>"));
        assert!(!xml.contains("<Displacement>"));
        assert!(xml.contains("<Rotation>45</Rotation>"));
    }

    #[test]
    fn test_line_placement_positive_only() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label_placement: Some(LabelPlacement::line(LinePlacement {
                perpendicular_offset: Some(0.0),
                is_aligned: Some(false),
                repeat: Some(0.0),
                initial_gap: Some(-5.0),
            })),
            ..Default::default()
        }));

        assert!(xml.contains("<PerpendicularOffset>0</PerpendicularOffset>"));
        assert!(xml.contains("<IsAligned>false</IsAligned>"));
        assert!(!xml.contains("<Repeat>"));
        assert!(!xml.contains("<InitialGap>"));

        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label_placement: Some(LabelPlacement::line(LinePlacement {
                repeat: Some(200.0),
                initial_gap: Some(10.0),
                ..Default::default()
            })),
            ..Default::default()
        }));
        assert!(xml.contains("<Repeat>200</Repeat>"));
        assert!(xml.contains("<InitialGap>10</InitialGap>"));
        assert!(!xml.contains("<PerpendicularOffset>"));
    }

    #[test]
    fn test_unsupported_kind_is_reported() {
        let mut builder = SldBuilder::new();
        let unsupported = Symbolizer::Unsupported(serde_json::json!({ "type": "circle" }));
        let result = write_symbolizer(&mut builder, &unsupported);
        assert_eq!(result, Err(SymbolizerError::UnsupportedType("circle".to_string())));
    }

    #[test]
    fn test_point_size_from_editor_json() {
        let symbolizer: Symbolizer = serde_json::from_value(serde_json::json!({
            "type": "point",
            "mark": { "wellKnownName": "circle", "size": 8 }
        }))
        .unwrap();

        let xml = render(&symbolizer);
        assert!(xml.contains("<Size>8</Size>"));
    }

    #[test]
    fn test_nested_point_placement_from_editor_json() {
        let symbolizer: Symbolizer = serde_json::from_value(serde_json::json!({
            "type": "text",
            "labelPlacement": {
                "type": "point",
                "point": { "anchorPointX": 0.5, "anchorPointY": 0.5, "rotation": 30 },
                "line": { "perpendicularOffset": 4 }
            }
        }))
        .unwrap();

        let xml = render(&symbolizer);
        assert!(xml.contains("<AnchorPointX>0.5</AnchorPointX>"));
        assert!(xml.contains("<AnchorPointY>0.5</AnchorPointY>"));
        assert!(xml.contains("<Rotation>30</Rotation>"));
        assert!(!xml.contains("<LinePlacement>"));
    }

    #[test]
    fn test_missing_placement_branch_writes_nothing() {
        let xml = render(&Symbolizer::Text(TextSymbolizer {
            label_placement: Some(LabelPlacement {
                kind: "line".to_string(),
                point: Some(PointPlacement { rotation: Some(10.0), ..Default::default() }),
                line: None,
            }),
            ..Default::default()
        }));
        assert!(!xml.contains("<LabelPlacement>"));
    }

    #[test]
    fn test_colors_are_escaped() {
        let xml = render(&Symbolizer::Line(LineSymbolizer {
            stroke: Some(Stroke::new("<bad>", 1.0, 1.0)),
        }));
        assert!(xml.contains(r#"<CssParameter name="stroke">&lt;bad&gt;</CssParameter>"#));
    }
}
