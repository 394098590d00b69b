//! Declarative UI descriptions.
//!
//! # Conceptual overview
//! Finch describes user interfaces as plain values and renders them onto a native view hierarchy.
//!
//! ## Descriptions
//! A [`Ui`] is an immutable description of one element (a button, label, image, text field, stack,
//! or custom container) along with a list of [`Attribute`]s. Creating one never touches the
//! native toolkit: descriptions can be built, compared, cloned and thrown away freely. They are
//! generic over the message type `M` that controls send to the application.
//!
//! ## Custom containers and constraints
//! Custom containers lay out their children with constraints. Children are anonymous: when a
//! custom container is built, its constraint builder is handed an [`Id`] for the container and
//! one for each child, in declaration order, and uses them to name anchors.
//!
//! ```
//! use finch::{Attribute, Color, Insets, Ui};
//!
//! let square = |color| {
//!     Ui::<()>::custom(vec![Attribute::background_color(color)], (), |view| {
//!         vec![view.width().equal(20.), view.height().equal(20.)]
//!     })
//! };
//! let ui = Ui::custom(
//!     vec![],
//!     (square(Color::RED), square(Color::BLUE)),
//!     |(view, red, blue)| {
//!         vec![
//!             red.edges().equal(view.edges().inset(Insets::new(5., 5., 5., 30.))),
//!             blue.leading().equal(red.trailing() + 5.),
//!             blue.top().equal(red.top()),
//!         ]
//!     },
//! );
//! assert_eq!(ui.len(), 3);
//! ```
//!
//! Anchors are typed by kind: sizes can only be related to sizes (or constants), horizontal
//! positions to horizontal positions, and vertical positions to vertical positions. Mixing them up
//! does not compile.
//!
//! A container's constraints are a set, so the order they are listed in does not matter and
//! duplicates collapse.
//!
//! ## Rendering and hosts
//! [`render`] turns a description into native views through a [`Backend`]. A [`Host`] owns one
//! rendered description and replaces it wholesale whenever it is given a new one; there is no
//! diffing. The host's own view stays put, so anything attached to it from outside survives
//! updates.
//!
//! ## Events
//! Event attributes bind a message to an [`Event`] on a control. When the event fires, the
//! message is sent through the host's [`Dispatch`]. A control holds at most one callback per
//! event; binding again replaces it.
//!
//! ## Screens
//! A [`Screen`] bundles application state with a function that describes it and a function that
//! updates it in response to messages. A [`Controller`] runs a screen in a host, queueing messages
//! and re-rendering after each one.
//!
//! ## Coordinate system
//! The origin is at the top left corner and positive y points down. Leading is left and trailing
//! is right.
//!
//! ## Backends
//! Backends are native UI toolkits abstracted to a common interface. The [`headless`] backend keeps
//! everything in memory and can solve constraints into frames, which makes it useful for tests.

mod anchor;
mod attribute;
pub mod backend;
pub mod color;
mod constraint;
pub mod events;
pub mod headless;
mod host;
mod id;
mod rect;
mod render;
mod screen;
mod ui;

pub use anchor::{
    Anchor, AnchorPair, Center, EdgeAnchors, EdgeTargets, Horizontal, Insets, Offset, Property,
    RawAnchor, RawTarget, Size, Target, TargetPair, Vertical,
};
pub use attribute::{Attribute, Axis};
pub use backend::Backend;
pub use color::Color;
pub use constraint::{equal, priority, Connection, Constraint, Equal, Priority, Relation};
pub use events::{Callback, Event};
pub use host::Host;
pub use id::{Id, IdSpace};
pub use rect::Rect;
pub use render::{render, Dispatch};
pub use screen::{Controller, Screen};
pub use ui::{Children, Element, Font, FontWeight, Image, Label, TextAlignment, TextField, Ui};
