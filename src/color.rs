//! Colors.

/// An RGBA color with components from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Color = Color::rgb(2. / 3., 2. / 3., 2. / 3.);
    pub const RED: Color = Color::rgb(1., 0., 0.);
    pub const ORANGE: Color = Color::rgb(1., 0.5, 0.);
    pub const YELLOW: Color = Color::rgb(1., 1., 0.);
    pub const GREEN: Color = Color::rgb(0., 1., 0.);
    pub const BLUE: Color = Color::rgb(0., 0., 1.);

    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1. }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }
}
