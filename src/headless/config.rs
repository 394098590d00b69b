//! Configuration of the headless toolkit.

use crate::constraint::Priority;
use crate::ui::Font;
use cgmath::Vector2;

/// Metrics used to compute intrinsic content sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessConfig {
    /// Advance of one character at the reference font size.
    pub glyph_width: f64,

    /// Height of one line of text at the reference font size.
    pub line_height: f64,

    /// Font size that `glyph_width` and `line_height` are measured at.
    pub reference_font_size: f64,

    /// Padding around the text of buttons and text fields, on every side.
    pub control_padding: f64,

    /// Content hugging priority of views that don't set one.
    pub default_hugging: Priority,

    /// Compression resistance priority of views that don't set one.
    pub default_compression_resistance: Priority,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            glyph_width: 8.0,
            line_height: 20.0,
            reference_font_size: 17.0,
            control_padding: 4.0,
            default_hugging: Priority::DEFAULT_LOW,
            default_compression_resistance: Priority::DEFAULT_HIGH,
        }
    }
}

impl HeadlessConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph_width(mut self, width: f64) -> Self {
        self.glyph_width = width;
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    pub fn with_reference_font_size(mut self, size: f64) -> Self {
        self.reference_font_size = size;
        self
    }

    pub fn with_control_padding(mut self, padding: f64) -> Self {
        self.control_padding = padding;
        self
    }

    pub fn with_default_hugging(mut self, priority: Priority) -> Self {
        self.default_hugging = priority;
        self
    }

    pub fn with_default_compression_resistance(mut self, priority: Priority) -> Self {
        self.default_compression_resistance = priority;
        self
    }

    /// Size of `text` set in `font`, showing at most `max_lines` lines (0 for no limit).
    pub fn text_size(&self, text: &str, font: Option<&Font>, max_lines: usize) -> Vector2<f64> {
        let scale = font.map_or(1., |font| font.size / self.reference_font_size);
        let mut lines: Vec<_> = text.split('\n').collect();
        if max_lines > 0 {
            lines.truncate(max_lines);
        }
        let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        Vector2::new(
            longest as f64 * self.glyph_width * scale,
            lines.len() as f64 * self.line_height * scale,
        )
    }

    /// Size of a control showing `text`, including padding.
    pub fn control_size(&self, text: &str) -> Vector2<f64> {
        let padding = 2. * self.control_padding;
        self.text_size(text, None, 1) + Vector2::new(padding, padding)
    }
}
