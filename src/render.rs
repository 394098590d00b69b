//! Rendering UI descriptions into native views.

use crate::attribute::Attribute;
use crate::backend::{Backend, NativeAnchor, NativeConstraint, NativeKind, NativeProperty};
use crate::constraint::Constraint;
use crate::events::Callback;
use crate::ui::{Element, Ui};
use crossbeam::channel::{self, Receiver};
use core::fmt;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{trace, warn};

/// Delivers messages to the application.
pub struct Dispatch<M>(Arc<dyn Fn(M) + Send + Sync>);

impl<M> Clone for Dispatch<M> {
    fn clone(&self) -> Self {
        Dispatch(Arc::clone(&self.0))
    }
}

impl<M> Dispatch<M> {
    pub fn new<F: 'static + Fn(M) + Send + Sync>(f: F) -> Self {
        Dispatch(Arc::new(f))
    }

    pub fn send(&self, message: M) {
        (self.0)(message)
    }
}

impl<M: 'static + Send> Dispatch<M> {
    /// Creates a dispatch that queues messages on a channel.
    pub fn channel() -> (Dispatch<M>, Receiver<M>) {
        let (sender, receiver) = channel::unbounded();
        let dispatch = Dispatch::new(move |message| {
            if sender.send(message).is_err() {
                warn!("dropping message: receiver has been disconnected");
            }
        });
        (dispatch, receiver)
    }
}

impl<M> fmt::Debug for Dispatch<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dispatch")
    }
}

/// Renders a UI description into a new native view tree and returns its root view.
///
/// Every node gets a fresh native view; nothing is reused. Event attributes are bound so that
/// they send their message through `dispatch`.
///
/// If the backend fails, every view created so far is removed again before the error is returned.
///
/// # Panics
/// If a custom container has a constraint that refers to a child it does not have. This is
/// checked before the container's view is created.
pub fn render<B, M>(
    backend: &mut B,
    ui: &Ui<M>,
    dispatch: &Dispatch<M>,
) -> Result<B::ViewRef, B::Error>
where
    B: Backend,
    M: 'static + Clone + Send,
{
    let kind = match ui.element() {
        Element::Button { .. } => NativeKind::Button,
        Element::Image(_) => NativeKind::Image,
        Element::Label(_) => NativeKind::Label,
        Element::TextField(_) => NativeKind::TextField,
        Element::Stack { .. } => NativeKind::Stack,
        Element::Custom {
            constraints,
            children,
        } => {
            check_ids(constraints, children.len());
            NativeKind::View
        }
    };

    let view = backend.new_view(kind)?;
    match populate(backend, &view, ui, dispatch) {
        Ok(()) => {
            trace!("rendered {:?} {:?}", kind, view);
            Ok(view)
        }
        Err(error) => {
            discard(backend, &view);
            Err(error)
        }
    }
}

/// Removes a view that will not be shown, along with its subviews.
///
/// Used on error paths, where the original error matters more than a failed removal.
pub(crate) fn discard<B: Backend>(backend: &mut B, view: &B::ViewRef) {
    trace!("discarding {:?}", view);
    if backend.remove_view(view).is_err() {
        warn!("could not remove {:?}", view);
    }
}

fn check_ids(constraints: &HashSet<Constraint>, children: usize) {
    for constraint in constraints {
        let max_id = constraint.max_id();
        if max_id.index() > children {
            panic!(
                "render: constraint {:?} refers to {:?}, but the container only has {} children",
                constraint, max_id, children
            );
        }
    }
}

/// Sets up a freshly created view: element properties, then attributes, then children.
fn populate<B, M>(
    backend: &mut B,
    view: &B::ViewRef,
    ui: &Ui<M>,
    dispatch: &Dispatch<M>,
) -> Result<(), B::Error>
where
    B: Backend,
    M: 'static + Clone + Send,
{
    match ui.element() {
        Element::Button { title } => {
            backend.set(view, NativeProperty::Title(title.clone()))?;
        }
        Element::Image(image) => {
            backend.set(view, NativeProperty::Image(image.clone()))?;
        }
        Element::Label(label) => {
            backend.set(view, NativeProperty::NumberOfLines(label.number_of_lines))?;
            backend.set(view, NativeProperty::Text(label.text.clone()))?;
            backend.set(view, NativeProperty::TextAlignment(label.alignment))?;
            if let Some(color) = label.color {
                backend.set(view, NativeProperty::TextColor(color))?;
            }
            if let Some(font) = &label.font {
                backend.set(view, NativeProperty::Font(font.clone()))?;
            }
        }
        Element::TextField(text_field) => {
            backend.set(view, NativeProperty::Placeholder(text_field.placeholder.clone()))?;
            backend.set(view, NativeProperty::Text(text_field.text.clone()))?;
        }
        Element::Stack { axis, .. } => {
            backend.set(view, NativeProperty::Axis(*axis))?;
        }
        Element::Custom { .. } => (),
    }
    apply_attributes(backend, view, ui.attributes(), dispatch)?;

    match ui.element() {
        Element::Stack { children, .. } => render_stack(backend, view, children, dispatch),
        Element::Custom {
            constraints,
            children,
        } => render_custom(backend, view, constraints, children, dispatch),
        _ => Ok(()),
    }
}

fn render_stack<B, M>(
    backend: &mut B,
    stack: &B::ViewRef,
    children: &[Ui<M>],
    dispatch: &Dispatch<M>,
) -> Result<(), B::Error>
where
    B: Backend,
    M: 'static + Clone + Send,
{
    for child in children {
        let view = render(backend, child, dispatch)?;
        if let Err(error) = backend.add_arranged_subview(stack, &view) {
            discard(backend, &view);
            return Err(error);
        }
    }
    trace!("arranged {} subviews in {:?}", children.len(), stack);
    Ok(())
}

fn render_custom<B, M>(
    backend: &mut B,
    container: &B::ViewRef,
    constraints: &HashSet<Constraint>,
    children: &[Ui<M>],
    dispatch: &Dispatch<M>,
) -> Result<(), B::Error>
where
    B: Backend,
    M: 'static + Clone + Send,
{
    // index 0 is the container, so that ids index directly
    let mut views = Vec::with_capacity(children.len() + 1);
    views.push(container.clone());
    for child in children {
        let view = render(backend, child, dispatch)?;
        if let Err(error) = backend.add_subview(container, &view) {
            discard(backend, &view);
            return Err(error);
        }
        views.push(view);
    }

    for constraint in constraints {
        for connection in constraint.connections() {
            let native = NativeConstraint {
                first: NativeAnchor {
                    view: views[connection.anchor.id.index()].clone(),
                    property: connection.anchor.property,
                },
                relation: constraint.relation(),
                second: connection.target.anchor.map(|anchor| NativeAnchor {
                    view: views[anchor.id.index()].clone(),
                    property: anchor.property,
                }),
                multiplier: 1.,
                constant: connection.target.offset.value(),
                priority: constraint.priority(),
            };
            trace!("activating {} ({:?})", connection, constraint.priority());
            backend.activate(native)?;
        }
    }

    trace!("laid out {} children in {:?}", children.len(), container);
    Ok(())
}

/// Applies attributes in order.
fn apply_attributes<B, M>(
    backend: &mut B,
    view: &B::ViewRef,
    attributes: &[Attribute<M>],
    dispatch: &Dispatch<M>,
) -> Result<(), B::Error>
where
    B: Backend,
    M: 'static + Clone + Send,
{
    for attribute in attributes {
        match attribute {
            Attribute::AccessibilityIdentifier(identifier) => {
                backend.set(view, NativeProperty::AccessibilityIdentifier(identifier.clone()))?
            }
            Attribute::BackgroundColor(color) => {
                backend.set(view, NativeProperty::BackgroundColor(*color))?
            }
            Attribute::ContentCompressionResistancePriority(axis, priority) => {
                backend.set(view, NativeProperty::CompressionResistance(*axis, *priority))?
            }
            Attribute::ContentHuggingPriority(axis, priority) => {
                backend.set(view, NativeProperty::Hugging(*axis, *priority))?
            }
            Attribute::On(event, message) => {
                let dispatch = dispatch.clone();
                let message = message.clone();
                backend.bind(
                    view,
                    *event,
                    Callback::new(move || dispatch.send(message.clone())),
                )?
            }
        }
    }
    Ok(())
}
