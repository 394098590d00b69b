use crate::color::Color;
use crate::constraint::Priority;
use crate::events::Event;

/// Layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A declarative attribute of a UI element.
///
/// Attributes do nothing until the element is rendered; they are then applied in order, so a
/// later attribute for the same property wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<M> {
    AccessibilityIdentifier(String),
    BackgroundColor(Color),
    ContentCompressionResistancePriority(Axis, Priority),
    ContentHuggingPriority(Axis, Priority),
    /// Sends a message when the event fires.
    On(Event, M),
}

impl<M> Attribute<M> {
    pub fn accessibility_identifier(identifier: impl Into<String>) -> Self {
        Attribute::AccessibilityIdentifier(identifier.into())
    }

    pub fn background_color(color: Color) -> Self {
        Attribute::BackgroundColor(color)
    }

    pub fn content_compression_resistance_priority(axis: Axis, priority: Priority) -> Self {
        Attribute::ContentCompressionResistancePriority(axis, priority)
    }

    pub fn content_hugging_priority(axis: Axis, priority: Priority) -> Self {
        Attribute::ContentHuggingPriority(axis, priority)
    }

    pub fn on_touch_up_inside(message: M) -> Self {
        Attribute::On(Event::TouchUpInside, message)
    }

    pub fn on_editing_changed(message: M) -> Self {
        Attribute::On(Event::EditingChanged, message)
    }

    pub fn on_editing_did_end(message: M) -> Self {
        Attribute::On(Event::EditingDidEnd, message)
    }
}
