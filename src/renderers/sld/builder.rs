// SLD document builder

/// Indented XML writer that keeps track of open elements so every element it
/// opens is closed in the right order.
pub struct SldBuilder {
    buffer: String,
    open_elements: Vec<&'static str>,
}

impl SldBuilder {
    /// Create a new builder with an empty buffer
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            open_elements: Vec::new(),
        }
    }

    /// Open `<name>` and nest everything written after it
    pub fn open(&mut self, name: &'static str) {
        self.write_indent();
        self.buffer.push_str(&format!("<{}>\n", name));
        self.open_elements.push(name);
    }

    /// Open `<name attr="value" ...>`; attribute values are escaped
    pub fn open_with_attributes(&mut self, name: &'static str, attributes: &[(&str, &str)]) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.push_attributes(attributes);
        self.buffer.push_str(">\n");
        self.open_elements.push(name);
    }

    /// Close the innermost open element
    pub fn close(&mut self) {
        if let Some(name) = self.open_elements.pop() {
            self.write_indent();
            self.buffer.push_str(&format!("</{}>\n", name));
        }
    }

    /// `<name>text</name>` with escaped text
    pub fn text_element(&mut self, name: &str, text: &str) {
        self.write_indent();
        self.buffer.push_str(&format!("<{}>{}</{}>\n", name, xml_escape(text), name));
    }

    /// `<name>number</name>`
    pub fn number_element(&mut self, name: &str, value: f64) {
        self.write_indent();
        self.buffer.push_str(&format!("<{}>{}</{}>\n", name, format_number(value), name));
    }

    /// `<name attr="value" ...>text</name>` with escaped attributes and text
    pub fn text_element_with_attributes(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.push_attributes(attributes);
        self.buffer.push_str(&format!(">{}</{}>\n", xml_escape(text), name));
    }

    /// `<!-- text -->`, escaped and with `--` broken up so the comment stays well-formed
    pub fn comment(&mut self, text: &str) {
        self.write_indent();
        let mut body = xml_escape(text);
        while body.contains("--") {
            body = body.replace("--", "- -");
        }
        self.buffer.push_str(&format!("<!-- {} -->\n", body));
    }

    /// Close anything still open and return the document text
    pub fn finalize(mut self) -> String {
        while !self.open_elements.is_empty() {
            self.close();
        }
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&self.buffer);
        xml
    }

    fn push_attributes(&mut self, attributes: &[(&str, &str)]) {
        for (key, value) in attributes {
            self.buffer.push_str(&format!(" {}=\"{}\"", key, xml_escape(value)));
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.open_elements.len() {
            self.buffer.push_str("  ");
        }
    }
}

impl Default for SldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape XML reserved characters. Ampersand goes first so the entities
/// introduced by later replacements are not escaped twice.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Shortest textual form of a number: `1` rather than `1.0`, `0` for `-0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
