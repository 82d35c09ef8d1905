//! HTML document builder
//!
//! Provides a fluent API for building the printable documents. Text and
//! attribute values are escaped on the way in; tag names are trusted
//! (they come from the renderers, never from data).

use crate::escape::escape_html;

/// Stylesheet embedded in every printable document.
const PRINT_STYLE: &str = "\
body { font-family: Georgia, serif; margin: 2em; }
h1 { font-size: 1.4em; margin-bottom: 0.2em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #444; padding: 4px 8px; text-align: left; vertical-align: top; }
th { background: #eee; }
.footer { margin-top: 1em; font-size: 0.85em; color: #333; }
@media print { body { margin: 0; } }
";

/// HTML builder
///
/// Accumulates a document as a string. Open tags are tracked so
/// [`HtmlBuilder::build`] can close whatever is still open, in reverse
/// order. An unbalanced [`HtmlBuilder::close`] is a no-op.
pub struct HtmlBuilder {
    buf: String,
    open_tags: Vec<&'static str>,
}

impl HtmlBuilder {
    /// Create a bare fragment builder (no document frame).
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            open_tags: Vec::new(),
        }
    }

    /// Create a builder holding a full document frame: doctype, head
    /// with the print stylesheet, and an open `<body>`.
    pub fn document(title: &str) -> Self {
        let mut b = Self::new();
        b.raw("<!DOCTYPE html>\n");
        b.raw("<html lang=\"it\">\n<head>\n<meta charset=\"utf-8\">\n");
        b.raw("<title>");
        b.raw(&escape_html(title));
        b.raw("</title>\n<style>\n");
        b.raw(PRINT_STYLE);
        b.raw("</style>\n</head>\n");
        b.open_tags.push("html");
        b.open("body");
        b
    }

    // === Text Output ===

    /// Write escaped text.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_html(s));
        self
    }

    /// Write trusted markup verbatim.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    // === Elements ===

    /// Open a tag.
    pub fn open(&mut self, tag: &'static str) -> &mut Self {
        self.open_with(tag, &[])
    }

    /// Open a tag with attributes; attribute values are escaped.
    pub fn open_with(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_html(value));
            self.buf.push('"');
        }
        self.buf.push_str(">\n");
        self.open_tags.push(tag);
        self
    }

    /// Close the most recently opened tag.
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open_tags.pop() {
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push_str(">\n");
        }
        self
    }

    /// Write a complete element with escaped text content.
    pub fn elem(&mut self, tag: &'static str, text: &str) -> &mut Self {
        self.elem_with(tag, &[], text)
    }

    /// Write a complete element with attributes and escaped text content.
    pub fn elem_with(
        &mut self,
        tag: &'static str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_html(value));
            self.buf.push('"');
        }
        self.buf.push('>');
        self.buf.push_str(&escape_html(text));
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
        self
    }

    // === Build ===

    /// Close every still-open tag and return the document string.
    pub fn build(mut self) -> String {
        while !self.open_tags.is_empty() {
            self.close();
        }
        self.buf
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
