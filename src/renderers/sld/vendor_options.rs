//! `VendorOption` rendering for text symbolizers

use crate::models::{VendorOptionValue, VendorOptions};
use super::builder::{format_number, SldBuilder};

/// Write one `<VendorOption>` per present knob
pub fn write_vendor_options(builder: &mut SldBuilder, options: &VendorOptions) {
    for (name, value) in options.entries() {
        let text = match value {
            VendorOptionValue::Flag(flag) => flag.to_string(),
            VendorOptionValue::Number(number) => format_number(number),
        };
        builder.text_element_with_attributes("VendorOption", &[("name", name)], &text);
    }
}
