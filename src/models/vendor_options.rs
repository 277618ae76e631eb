//! GeoServer label vendor options
//!
//! A closed set of tuning knobs for label placement. Each knob has its own
//! presence rule (see [`VendorOptions::entries`]).

use serde::{Deserialize, Serialize};

/// Label tuning knobs recognised by the map server
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorOptions {
    /// Labels act as obstacles for other labels
    pub label_obstacle: Option<bool>,
    /// Force text to read left to right regardless of line direction
    pub force_left_to_right: Option<bool>,
    /// Tri-state: the server default is `true`, so `Some(false)` is meaningful
    pub conflict_resolution: Option<bool>,
    /// Curve the label along the line geometry
    pub follow_line: Option<bool>,

    pub space_around: Option<f64>,
    pub max_displacement: Option<f64>,
    pub min_group_distance: Option<f64>,
    pub repeat: Option<f64>,
    pub auto_wrap: Option<f64>,
    pub max_angle_delta: Option<f64>,
    pub goodness_of_fit: Option<f64>,
}

/// Rendered value of a single vendor option
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VendorOptionValue {
    Flag(bool),
    Number(f64),
}

impl VendorOptions {
    /// The options that should be written, in document order.
    ///
    /// Pure flags appear only when `true`, `conflictResolution` appears for
    /// both `true` and `false`, numbers appear whenever set (zero included).
    pub fn entries(&self) -> Vec<(&'static str, VendorOptionValue)> {
        let mut entries = Vec::new();

        let flags = [
            ("labelObstacle", self.label_obstacle),
            ("forceLeftToRight", self.force_left_to_right),
        ];
        for (name, value) in flags {
            if value == Some(true) {
                entries.push((name, VendorOptionValue::Flag(true)));
            }
        }

        if let Some(value) = self.conflict_resolution {
            entries.push(("conflictResolution", VendorOptionValue::Flag(value)));
        }

        if self.follow_line == Some(true) {
            entries.push(("followLine", VendorOptionValue::Flag(true)));
        }

        let numbers = [
            ("spaceAround", self.space_around),
            ("maxDisplacement", self.max_displacement),
            ("minGroupDistance", self.min_group_distance),
            ("repeat", self.repeat),
            ("autoWrap", self.auto_wrap),
            ("maxAngleDelta", self.max_angle_delta),
            ("goodnessOfFit", self.goodness_of_fit),
        ];
        for (name, value) in numbers {
            if let Some(number) = value {
                entries.push((name, VendorOptionValue::Number(number)));
            }
        }

        entries
    }
}
