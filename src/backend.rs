//! Traits for backends.

use crate::anchor::Property;
use crate::attribute::Axis;
use crate::color::Color;
use crate::constraint::{Priority, Relation};
use crate::events::{Callback, Event};
use crate::ui::{Font, Image, TextAlignment};
use core::fmt;

/// Kinds of native views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Button,
    Image,
    Label,
    /// A stack view that arranges its subviews along an axis.
    Stack,
    TextField,
    /// A plain view, used for custom containers and hosts.
    View,
}

/// A property of a native view.
///
/// Setting a property twice keeps the last value.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeProperty {
    AccessibilityIdentifier(String),
    BackgroundColor(Color),
    CompressionResistance(Axis, Priority),
    Hugging(Axis, Priority),
    /// Button title.
    Title(String),
    /// Label or text field text.
    Text(String),
    Placeholder(String),
    NumberOfLines(usize),
    TextAlignment(TextAlignment),
    TextColor(Color),
    Font(Font),
    Image(Image),
    /// Stack axis.
    Axis(Axis),
}

/// One side of a native constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeAnchor<R> {
    pub view: R,
    pub property: Property,
}

/// A resolved constraint between native views.
///
/// Reads as `first == second * multiplier + constant`, or `first == constant` if there is no
/// second anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeConstraint<R> {
    pub first: NativeAnchor<R>,
    pub relation: Relation,
    pub second: Option<NativeAnchor<R>>,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
}

/// A backend implementation.
pub trait Backend {
    /// A reference to a view in the backend.
    type ViewRef: Clone + fmt::Debug;

    /// Error type.
    type Error;

    /// Creates a new view.
    fn new_view(&mut self, kind: NativeKind) -> Result<Self::ViewRef, Self::Error>;

    /// Sets a property of the view.
    fn set(&mut self, view: &Self::ViewRef, property: NativeProperty) -> Result<(), Self::Error>;

    /// Appends a subview.
    fn add_subview(
        &mut self,
        view: &Self::ViewRef,
        subview: &Self::ViewRef,
    ) -> Result<(), Self::Error>;

    /// Appends an arranged subview to a stack.
    fn add_arranged_subview(
        &mut self,
        stack: &Self::ViewRef,
        subview: &Self::ViewRef,
    ) -> Result<(), Self::Error>;

    /// Removes the view from its superview and releases it along with its subviews.
    fn remove_view(&mut self, view: &Self::ViewRef) -> Result<(), Self::Error>;

    /// Activates a constraint.
    fn activate(&mut self, constraint: NativeConstraint<Self::ViewRef>) -> Result<(), Self::Error>;

    /// Runs `callback` whenever `event` fires on the view.
    ///
    /// Binding the same event on the same view again replaces the previous callback.
    fn bind(
        &mut self,
        view: &Self::ViewRef,
        event: Event,
        callback: Callback,
    ) -> Result<(), Self::Error>;
}
