//! Rectangles.

use crate::anchor::Insets;
use cgmath::{Point2, Vector2};

/// A rectangle.
///
/// The y-axis points down, so `min_y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Returns true if `rect` lies entirely inside this rectangle.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        rect.min_x() >= self.min_x()
            && rect.min_y() >= self.min_y()
            && rect.max_x() <= self.max_x()
            && rect.max_y() <= self.max_y()
    }

    /// Returns this rectangle shrunk by `insets` on each edge.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect {
            origin: Point2::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Vector2::new(
                self.size.x - insets.left - insets.right,
                self.size.y - insets.top - insets.bottom,
            ),
        }
    }
}

#[test]
fn test_rect_edges() {
    let rect = Rect::new(Point2::new(10., 20.), Vector2::new(30., 40.));
    assert_eq!(rect.max_x(), 40.);
    assert_eq!(rect.max_y(), 60.);
    assert_eq!(rect.center(), Point2::new(25., 40.));

    let inner = rect.inset(Insets::new(1., 2., 3., 4.));
    assert_eq!(inner, Rect::new(Point2::new(12., 21.), Vector2::new(24., 36.)));
    assert!(rect.contains_rect(inner));
    assert!(!inner.contains_rect(rect));
}
