//! Symbolizer data structures
//!
//! A symbolizer is one rendering instruction for a geometry. Each variant only
//! carries the attributes meaningful to it; the `type` field on the JSON side
//! selects the variant.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::vendor_options::VendorOptions;

/// Paint used to fill an area, a mark, glyphs or a halo
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fill {
    /// CSS colour (e.g. "#ff0000")
    pub color: Option<String>,

    /// Opacity in 0.0..=1.0
    pub opacity: Option<f64>,
}

impl Fill {
    pub fn new(color: impl Into<String>, opacity: f64) -> Self {
        Self {
            color: Some(color.into()),
            opacity: Some(opacity),
        }
    }
}

/// Paint used to outline a geometry
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stroke {
    pub color: Option<String>,
    pub width: Option<f64>,
    pub opacity: Option<f64>,

    /// Dash pattern as space separated lengths (e.g. "5 2")
    pub dash_array: Option<String>,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64, opacity: f64) -> Self {
        Self {
            color: Some(color.into()),
            width: Some(width),
            opacity: Some(opacity),
            dash_array: None,
        }
    }
}

/// Well-known marker glyph (square, circle, triangle, star, cross, x)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Mark {
    pub well_known_name: Option<String>,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,

    /// Graphic size in pixels, written beside the mark
    pub size: Option<f64>,
}

/// Font used by a text label; `fill` is the glyph paint
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Font {
    pub family: Option<String>,
    pub size: Option<f64>,
    pub style: Option<String>,
    pub weight: Option<String>,
    pub fill: Option<Fill>,
}

/// Feature property a label reads its text from
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    pub property_name: String,
}

/// Placement of a label relative to a point
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PointPlacement {
    pub anchor_point_x: Option<f64>,
    pub anchor_point_y: Option<f64>,
    pub displacement_x: Option<f64>,
    pub displacement_y: Option<f64>,
    pub rotation: Option<f64>,
}

/// Placement of a label along a line
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LinePlacement {
    pub perpendicular_offset: Option<f64>,
    pub is_aligned: Option<bool>,
    pub repeat: Option<f64>,
    pub initial_gap: Option<f64>,
}

/// Label placement settings as the editor stores them.
///
/// Both branches may be filled in at once; `type` picks the one in effect.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelPlacement {
    /// "point" or "line"
    #[serde(rename = "type")]
    pub kind: String,
    pub point: Option<PointPlacement>,
    pub line: Option<LinePlacement>,
}

/// The placement branch selected by a `LabelPlacement`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement<'a> {
    Point(&'a PointPlacement),
    Line(&'a LinePlacement),
}

impl LabelPlacement {
    pub fn point(point: PointPlacement) -> Self {
        Self {
            kind: "point".to_string(),
            point: Some(point),
            line: None,
        }
    }

    pub fn line(line: LinePlacement) -> Self {
        Self {
            kind: "line".to_string(),
            point: None,
            line: Some(line),
        }
    }

    /// The branch `type` selects, or `None` when that branch is missing
    /// or the type is not recognised
    pub fn selected(&self) -> Option<Placement<'_>> {
        match self.kind.as_str() {
            "point" => self.point.as_ref().map(Placement::Point),
            "line" => self.line.as_ref().map(Placement::Line),
            _ => None,
        }
    }
}

/// Outline drawn around label glyphs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Halo {
    /// Halo is only rendered when enabled
    pub enabled: bool,
    pub radius: Option<f64>,
    pub fill: Option<Fill>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PolygonSymbolizer {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LineSymbolizer {
    pub stroke: Option<Stroke>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PointSymbolizer {
    pub mark: Mark,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSymbolizer {
    pub label: Option<Label>,
    pub font: Option<Font>,
    pub label_placement: Option<LabelPlacement>,
    pub halo: Option<Halo>,
    pub vendor_options: VendorOptions,
}

/// One rendering instruction, dispatched on its variant
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Symbolizer {
    /// Area fill (SLD PolygonSymbolizer)
    Polygon(PolygonSymbolizer),
    /// Line stroke (SLD LineSymbolizer)
    Line(LineSymbolizer),
    /// Point marker (SLD PointSymbolizer)
    Point(PointSymbolizer),
    /// Text label (SLD TextSymbolizer)
    Text(TextSymbolizer),
    /// A snapshot carried a `type` tag this module does not know.
    /// The JSON is kept as loaded so snapshots still serialize;
    /// compiling a style that contains one fails.
    #[serde(untagged)]
    Unsupported(serde_json::Value),
}

impl Symbolizer {
    /// The polygon symbolizer new rules start with
    pub fn starter() -> Self {
        Symbolizer::Polygon(PolygonSymbolizer {
            fill: Some(Fill::new("#ff0000", 0.7)),
            stroke: Some(Stroke::new("#000000", 1.0, 1.0)),
        })
    }

    /// The `type` tag this symbolizer serializes with
    pub fn kind(&self) -> &str {
        match self {
            Symbolizer::Polygon(_) => "polygon",
            Symbolizer::Line(_) => "line",
            Symbolizer::Point(_) => "point",
            Symbolizer::Text(_) => "text",
            Symbolizer::Unsupported(value) => value
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default(),
        }
    }
}

// Unknown tags must survive deserialization so the compiler can report them
// with their rule/symbolizer position.
impl<'de> Deserialize<'de> for Symbolizer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::custom("symbolizer is missing its `type` field"))?
            .to_string();

        let symbolizer = match kind.as_str() {
            "polygon" => serde_json::from_value(value).map(Symbolizer::Polygon),
            "line" => serde_json::from_value(value).map(Symbolizer::Line),
            "point" => serde_json::from_value(value).map(Symbolizer::Point),
            "text" => serde_json::from_value(value).map(Symbolizer::Text),
            _ => return Ok(Symbolizer::Unsupported(value)),
        };

        symbolizer.map_err(|e| D::Error::custom(format!("invalid {} symbolizer: {}", kind, e)))
    }
}
