//! Screens and their controllers.

use crate::backend::Backend;
use crate::host::Host;
use crate::render::Dispatch;
use crate::ui::Ui;
use crossbeam::channel::{Receiver, TryRecvError};
use core::fmt;
use tracing::debug;

/// A screen of an application: some state, a way to describe it, and a way to change it.
pub struct Screen<S, M> {
    pub title: String,
    pub state: S,
    render: Box<dyn Fn(&S) -> Ui<M>>,
    update: Box<dyn FnMut(&mut S, M)>,
}

impl<S, M> Screen<S, M> {
    pub fn new<R, U>(title: impl Into<String>, state: S, render: R, update: U) -> Screen<S, M>
    where
        R: 'static + Fn(&S) -> Ui<M>,
        U: 'static + FnMut(&mut S, M),
    {
        Screen {
            title: title.into(),
            state,
            render: Box::new(render),
            update: Box::new(update),
        }
    }

    /// Describes the current state.
    pub fn render(&self) -> Ui<M> {
        (self.render)(&self.state)
    }

    /// Handles one message.
    pub fn update(&mut self, message: M) {
        (self.update)(&mut self.state, message)
    }
}

impl<S: fmt::Debug, M> fmt::Debug for Screen<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Screen")
            .field("title", &self.title)
            .field("state", &self.state)
            .finish()
    }
}

/// Runs a screen in a host.
///
/// Messages sent by controls are queued and handled in [`poll`](Controller::poll).
pub struct Controller<B: Backend, S, M> {
    screen: Screen<S, M>,
    host: Host<B, M>,
    messages: Receiver<M>,
    stale: bool,
}

impl<B: Backend, S, M: 'static + Clone + Send> Controller<B, S, M> {
    /// Creates a controller and renders the initial state.
    pub fn new(backend: B, screen: Screen<S, M>) -> Result<Controller<B, S, M>, B::Error> {
        let (dispatch, messages) = Dispatch::channel();
        let mut host = Host::new(backend, dispatch)?;
        host.set_ui(screen.render())?;
        debug!("controller for {:?} is ready", screen.title);
        Ok(Controller {
            screen,
            host,
            messages,
            stale: false,
        })
    }

    /// Handles all queued messages, re-rendering after each one.
    ///
    /// Returns the number of messages handled. If rendering fails, the message has still been
    /// applied to the state; the next call renders the current state before handling anything
    /// else.
    pub fn poll(&mut self) -> Result<usize, B::Error> {
        if self.stale {
            debug!("{:?} is out of date, rendering again", self.screen.title);
            self.render()?;
        }
        let mut handled = 0;
        loop {
            match self.messages.try_recv() {
                Ok(message) => {
                    self.screen.update(message);
                    self.stale = true;
                    handled += 1;
                    self.render()?;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => panic!("message receiver has been disconnected"),
            }
        }
        if handled > 0 {
            debug!("{:?} handled {} messages", self.screen.title, handled);
        }
        Ok(handled)
    }

    fn render(&mut self) -> Result<(), B::Error> {
        self.host.set_ui(self.screen.render())?;
        self.stale = false;
        Ok(())
    }
}

impl<B: Backend, S, M> Controller<B, S, M> {
    pub fn title(&self) -> &str {
        &self.screen.title
    }

    pub fn state(&self) -> &S {
        &self.screen.state
    }

    pub fn host(&self) -> &Host<B, M> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host<B, M> {
        &mut self.host
    }
}
