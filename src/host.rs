use crate::anchor::Property;
use crate::backend::{Backend, NativeAnchor, NativeConstraint, NativeKind};
use crate::constraint::{Priority, Relation};
use crate::render::{discard, render, Dispatch};
use crate::ui::Ui;
use tracing::debug;

enum State<R> {
    Empty,
    Populated(R),
}

/// Hosts a rendered UI description in a view of its own.
///
/// The host view is created once and never replaced, so constraints that attach it to the outside
/// world stay valid. Every new description tears down the previous content and renders from
/// scratch.
pub struct Host<B: Backend, M> {
    backend: B,
    view: B::ViewRef,
    dispatch: Dispatch<M>,
    state: State<B::ViewRef>,
    ui: Option<Ui<M>>,
}

impl<B: Backend, M: 'static + Clone + Send> Host<B, M> {
    /// Creates a new, empty host.
    pub fn new(mut backend: B, dispatch: Dispatch<M>) -> Result<Host<B, M>, B::Error> {
        let view = backend.new_view(NativeKind::View)?;
        debug!("created host view {:?}", view);
        Ok(Host {
            backend,
            view,
            dispatch,
            state: State::Empty,
            ui: None,
        })
    }

    /// Replaces the hosted content with a rendering of `ui`.
    ///
    /// The new content is rendered before the old content is removed, so a description with
    /// invalid constraints panics while the old content is still in place.
    ///
    /// On a backend error no partially built content stays attached to the host view. If the
    /// old content was already removed at that point, the host is left empty.
    pub fn set_ui(&mut self, ui: Ui<M>) -> Result<(), B::Error> {
        let content = render(&mut self.backend, &ui, &self.dispatch)?;

        let removed = match &self.state {
            State::Populated(old) => {
                debug!("removing content {:?}", old);
                Some(self.backend.remove_view(old))
            }
            State::Empty => None,
        };
        if let Some(result) = removed {
            if let Err(error) = result {
                discard(&mut self.backend, &content);
                return Err(error);
            }
            self.state = State::Empty;
            self.ui = None;
        }

        if let Err(error) = self.attach(&content) {
            discard(&mut self.backend, &content);
            return Err(error);
        }
        debug!("host {:?} now shows {:?} ({} elements)", self.view, content, ui.len());

        self.state = State::Populated(content);
        self.ui = Some(ui);
        Ok(())
    }

    /// Adds `content` to the host view and pins its edges to the host's.
    fn attach(&mut self, content: &B::ViewRef) -> Result<(), B::Error> {
        self.backend.add_subview(&self.view, content)?;
        for property in &[
            Property::Top,
            Property::Leading,
            Property::Trailing,
            Property::Bottom,
        ] {
            self.backend.activate(NativeConstraint {
                first: NativeAnchor {
                    view: content.clone(),
                    property: *property,
                },
                relation: Relation::Equal,
                second: Some(NativeAnchor {
                    view: self.view.clone(),
                    property: *property,
                }),
                multiplier: 1.,
                constant: 0.,
                priority: Priority::REQUIRED,
            })?;
        }
        Ok(())
    }
}

impl<B: Backend, M> Host<B, M> {
    /// The host view.
    pub fn view(&self) -> &B::ViewRef {
        &self.view
    }

    /// The root view of the current content, if any.
    pub fn content(&self) -> Option<&B::ViewRef> {
        match &self.state {
            State::Empty => None,
            State::Populated(view) => Some(view),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.content().is_some()
    }

    /// The description currently shown.
    pub fn ui(&self) -> Option<&Ui<M>> {
        self.ui.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
