//! Events.
//!
//! Controls report interactions as [`Event`]s. The library only ever asks a backend for one
//! thing: "run this callback when this event fires on this control", where a new callback for
//! the same control and event replaces the old one.

use core::fmt;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Interaction events a control can report.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// The text of a text field changed.
    EditingChanged = 0,
    /// A text field stopped editing.
    EditingDidEnd = 1,
    /// A touch or click ended inside the control.
    TouchUpInside = 2,
}

impl Event {
    // smallest and largest values in Ord
    pub(crate) const MIN: Self = Event::EditingChanged;
    pub(crate) const MAX: Self = Event::TouchUpInside;
}

/// A callback bound to an event.
pub struct Callback(Arc<Mutex<dyn FnMut() + Send>>);

impl Clone for Callback {
    fn clone(&self) -> Self {
        Callback(Arc::clone(&self.0))
    }
}

impl Callback {
    pub fn new<F: 'static + FnMut() + Send>(callback: F) -> Self {
        Callback(Arc::new(Mutex::new(callback)))
    }

    /// Runs the callback.
    ///
    /// # Panics
    /// If called from inside itself.
    pub fn call(&self) {
        let mut callback = self
            .0
            .try_lock()
            .expect("Callback::call: callback re-entered itself");
        (&mut *callback)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Callback")
    }
}

/// Event callbacks keyed by view.
///
/// Holds at most one callback per (view, event) pair.
#[derive(Debug)]
pub struct Bindings<K> {
    map: BTreeMap<(K, Event), Callback>,
}

impl<K: Ord + Copy> Bindings<K> {
    pub fn new() -> Bindings<K> {
        Bindings {
            map: BTreeMap::new(),
        }
    }

    /// Binds a callback, replacing whatever was bound to the same view and event.
    pub fn bind(&mut self, view: K, event: Event, callback: Callback) {
        self.map.insert((view, event), callback);
    }

    pub fn unbind(&mut self, view: K, event: Event) {
        self.map.remove(&(view, event));
    }

    /// Removes every binding of a view.
    pub fn unbind_view(&mut self, view: K) {
        let keys_to_remove: Vec<_> = self
            .map
            .range((view, Event::MIN)..=(view, Event::MAX))
            .map(|(k, _)| *k)
            .collect();
        for key in keys_to_remove {
            self.map.remove(&key);
        }
    }

    pub fn get(&self, view: K, event: Event) -> Option<&Callback> {
        self.map.get(&(view, event))
    }

    /// Events that have a callback on this view.
    pub fn events(&self, view: K) -> impl Iterator<Item = Event> + '_ {
        self.map
            .range((view, Event::MIN)..=(view, Event::MAX))
            .map(|((_, event), _)| *event)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord + Copy> Default for Bindings<K> {
    fn default() -> Self {
        Bindings::new()
    }
}
