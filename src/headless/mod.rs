//! An in-memory toolkit.
//!
//! [`HeadlessBackend`] keeps the views, properties, constraints and event bindings it is given,
//! lets you look at them, simulate interactions with [`send_actions`](HeadlessBackend::send_actions),
//! and solve the constraints into frames with [`layout`](HeadlessBackend::layout).

mod config;
mod layout;

pub use config::HeadlessConfig;
pub use layout::Frames;

use crate::attribute::Axis;
use crate::backend::{Backend, NativeConstraint, NativeKind, NativeProperty};
use crate::color::Color;
use crate::constraint::Priority;
use crate::events::{Bindings, Callback, Event};
use crate::ui::{Font, Image, TextAlignment};
use cgmath::Vector2;
use core::fmt;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::trace;
use uuid::Uuid;

/// A unique identifier for a headless view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(Uuid);

impl ViewId {
    fn new() -> ViewId {
        ViewId(Uuid::new_v4())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors of the headless toolkit.
#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("no such view: {0}")]
    NoSuchView(ViewId),

    #[error("view {0} is not a stack")]
    NotAStack(ViewId),

    #[error("adding view {0} would create a cycle")]
    Cycle(ViewId),

    #[error("unsatisfiable constraint: {0}")]
    Unsatisfiable(String),

    #[error("internal solver error: {0}")]
    Solver(String),
}

/// Content priorities on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPriorities {
    pub horizontal: Option<Priority>,
    pub vertical: Option<Priority>,
}

impl AxisPriorities {
    pub fn get(&self, axis: Axis) -> Option<Priority> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn set(&mut self, axis: Axis, priority: Priority) {
        match axis {
            Axis::Horizontal => self.horizontal = Some(priority),
            Axis::Vertical => self.vertical = Some(priority),
        }
    }
}

/// Current property values of a headless view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    pub accessibility_identifier: Option<String>,
    pub background_color: Option<Color>,
    pub compression_resistance: AxisPriorities,
    pub hugging: AxisPriorities,
    pub title: Option<String>,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub number_of_lines: Option<usize>,
    pub text_alignment: Option<TextAlignment>,
    pub text_color: Option<Color>,
    pub font: Option<Font>,
    pub image: Option<Image>,
    pub axis: Option<Axis>,
}

impl Properties {
    fn set(&mut self, property: NativeProperty) {
        match property {
            NativeProperty::AccessibilityIdentifier(id) => self.accessibility_identifier = Some(id),
            NativeProperty::BackgroundColor(color) => self.background_color = Some(color),
            NativeProperty::CompressionResistance(axis, p) => self.compression_resistance.set(axis, p),
            NativeProperty::Hugging(axis, p) => self.hugging.set(axis, p),
            NativeProperty::Title(title) => self.title = Some(title),
            NativeProperty::Text(text) => self.text = Some(text),
            NativeProperty::Placeholder(text) => self.placeholder = Some(text),
            NativeProperty::NumberOfLines(lines) => self.number_of_lines = Some(lines),
            NativeProperty::TextAlignment(alignment) => self.text_alignment = Some(alignment),
            NativeProperty::TextColor(color) => self.text_color = Some(color),
            NativeProperty::Font(font) => self.font = Some(font),
            NativeProperty::Image(image) => self.image = Some(image),
            NativeProperty::Axis(axis) => self.axis = Some(axis),
        }
    }
}

/// A headless view.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NativeKind,
    superview: Option<ViewId>,
    subviews: Vec<ViewId>,
    arranged_subviews: Vec<ViewId>,
    properties: Properties,
}

impl Node {
    fn new(kind: NativeKind) -> Node {
        Node {
            kind,
            superview: None,
            subviews: Vec::new(),
            arranged_subviews: Vec::new(),
            properties: Properties::default(),
        }
    }

    pub fn kind(&self) -> NativeKind {
        self.kind
    }

    pub fn superview(&self) -> Option<ViewId> {
        self.superview
    }

    /// All subviews, including arranged ones, in insertion order.
    pub fn subviews(&self) -> &[ViewId] {
        &self.subviews
    }

    /// Arranged subviews of a stack, in order.
    pub fn arranged_subviews(&self) -> &[ViewId] {
        &self.arranged_subviews
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Intrinsic content size, for views that have one.
    pub fn intrinsic_size(&self, config: &HeadlessConfig) -> Option<Vector2<f64>> {
        let properties = &self.properties;
        match self.kind {
            NativeKind::Label => Some(config.text_size(
                properties.text.as_deref().unwrap_or(""),
                properties.font.as_ref(),
                properties.number_of_lines.unwrap_or(1),
            )),
            NativeKind::Button => {
                Some(config.control_size(properties.title.as_deref().unwrap_or("")))
            }
            NativeKind::TextField => {
                let text = properties.text.as_deref().unwrap_or("");
                let placeholder = properties.placeholder.as_deref().unwrap_or("");
                let longer = if placeholder.chars().count() > text.chars().count() {
                    placeholder
                } else {
                    text
                };
                Some(config.control_size(longer))
            }
            NativeKind::Image => properties.image.as_ref().map(|image| image.size),
            NativeKind::Stack | NativeKind::View => None,
        }
    }
}

/// A toolkit that keeps everything in memory.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    nodes: HashMap<ViewId, Node>,
    constraints: Vec<NativeConstraint<ViewId>>,
    bindings: Bindings<ViewId>,
    config: HeadlessConfig,
}

impl HeadlessBackend {
    pub fn new() -> HeadlessBackend {
        HeadlessBackend::default()
    }

    pub fn with_config(config: HeadlessConfig) -> HeadlessBackend {
        HeadlessBackend {
            config,
            ..HeadlessBackend::default()
        }
    }

    pub fn config(&self) -> &HeadlessConfig {
        &self.config
    }

    pub fn view(&self, id: ViewId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All active constraints, in activation order.
    pub fn constraints(&self) -> &[NativeConstraint<ViewId>] {
        &self.constraints
    }

    /// Active constraints that involve a view.
    pub fn constraints_of(
        &self,
        id: ViewId,
    ) -> impl Iterator<Item = &NativeConstraint<ViewId>> + '_ {
        self.constraints
            .iter()
            .filter(move |constraint| involves(constraint, |view| view == id))
    }

    pub fn bindings(&self) -> &Bindings<ViewId> {
        &self.bindings
    }

    /// Finds a live view by accessibility identifier.
    pub fn find(&self, accessibility_identifier: &str) -> Option<ViewId> {
        self.nodes
            .iter()
            .find(|(_, node)| {
                node.properties.accessibility_identifier.as_deref() == Some(accessibility_identifier)
            })
            .map(|(id, _)| *id)
    }

    /// The view and all of its descendants, in pre-order.
    pub fn descendants(&self, id: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(&id) {
                out.push(id);
                stack.extend(node.subviews.iter().rev());
            }
        }
        out
    }

    /// Fires an event on a view, as if the user had interacted with it.
    ///
    /// Returns whether a callback was bound.
    pub fn send_actions(&self, id: ViewId, event: Event) -> bool {
        match self.bindings.get(id, event) {
            Some(callback) => {
                trace!("sending {:?} to {}", event, id);
                callback.call();
                true
            }
            None => false,
        }
    }

    /// Solves the constraints of a view tree into frames.
    ///
    /// If `size` is given, the root is made exactly that large; otherwise it is compressed to the
    /// smallest size its contents allow. Frames are in the root's coordinate space.
    pub fn layout(&self, root: ViewId, size: Option<Vector2<f64>>) -> Result<Frames, HeadlessError> {
        layout::solve(self, root, size)
    }

    fn node_mut(&mut self, id: ViewId) -> Result<&mut Node, HeadlessError> {
        self.nodes.get_mut(&id).ok_or(HeadlessError::NoSuchView(id))
    }

    fn check(&self, id: ViewId) -> Result<(), HeadlessError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(HeadlessError::NoSuchView(id))
        }
    }

    /// Removes a view from its superview's subview lists.
    fn detach(&mut self, id: ViewId) {
        let superview = self.nodes.get_mut(&id).and_then(|node| node.superview.take());
        if let Some(node) = superview.and_then(|id| self.nodes.get_mut(&id)) {
            node.subviews.retain(|subview| *subview != id);
            node.arranged_subviews.retain(|subview| *subview != id);
        }
    }

    fn attach(&mut self, view: ViewId, subview: ViewId) -> Result<(), HeadlessError> {
        self.check(subview)?;
        self.check(view)?;

        // the subview must not be the view or one of its ancestors
        let mut ancestor = Some(view);
        while let Some(id) = ancestor {
            if id == subview {
                return Err(HeadlessError::Cycle(subview));
            }
            ancestor = self.nodes.get(&id).and_then(|node| node.superview);
        }

        self.detach(subview);
        self.node_mut(subview)?.superview = Some(view);
        self.node_mut(view)?.subviews.push(subview);
        Ok(())
    }
}

fn involves(constraint: &NativeConstraint<ViewId>, mut f: impl FnMut(ViewId) -> bool) -> bool {
    f(constraint.first.view) || constraint.second.as_ref().map_or(false, |second| f(second.view))
}

impl Backend for HeadlessBackend {
    type ViewRef = ViewId;
    type Error = HeadlessError;

    fn new_view(&mut self, kind: NativeKind) -> Result<ViewId, HeadlessError> {
        let id = ViewId::new();
        self.nodes.insert(id, Node::new(kind));
        trace!("new {:?} view {}", kind, id);
        Ok(id)
    }

    fn set(&mut self, view: &ViewId, property: NativeProperty) -> Result<(), HeadlessError> {
        let node = self.node_mut(*view)?;
        if let NativeProperty::Axis(_) = property {
            if node.kind != NativeKind::Stack {
                return Err(HeadlessError::NotAStack(*view));
            }
        }
        node.properties.set(property);
        Ok(())
    }

    fn add_subview(&mut self, view: &ViewId, subview: &ViewId) -> Result<(), HeadlessError> {
        self.attach(*view, *subview)
    }

    fn add_arranged_subview(&mut self, stack: &ViewId, subview: &ViewId) -> Result<(), HeadlessError> {
        match self.nodes.get(stack) {
            Some(node) if node.kind == NativeKind::Stack => (),
            Some(_) => return Err(HeadlessError::NotAStack(*stack)),
            None => return Err(HeadlessError::NoSuchView(*stack)),
        }
        self.attach(*stack, *subview)?;
        self.node_mut(*stack)?.arranged_subviews.push(*subview);
        Ok(())
    }

    fn remove_view(&mut self, view: &ViewId) -> Result<(), HeadlessError> {
        self.check(*view)?;
        self.detach(*view);

        let removed: HashSet<_> = self.descendants(*view).into_iter().collect();
        for id in &removed {
            self.nodes.remove(id);
            self.bindings.unbind_view(*id);
        }
        self.constraints
            .retain(|constraint| !involves(constraint, |view| removed.contains(&view)));
        trace!("removed {} and {} descendants", view, removed.len() - 1);
        Ok(())
    }

    fn activate(&mut self, constraint: NativeConstraint<ViewId>) -> Result<(), HeadlessError> {
        self.check(constraint.first.view)?;
        if let Some(second) = &constraint.second {
            self.check(second.view)?;
        }
        self.constraints.push(constraint);
        Ok(())
    }

    fn bind(&mut self, view: &ViewId, event: Event, callback: Callback) -> Result<(), HeadlessError> {
        self.check(*view)?;
        self.bindings.bind(*view, event, callback);
        Ok(())
    }
}
