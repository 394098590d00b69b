//! A headless backend that refuses selected calls.
#![allow(dead_code)]

use finch::backend::{Backend, NativeConstraint, NativeKind, NativeProperty};
use finch::headless::{HeadlessBackend, ViewId};
use finch::{Callback, Event};

#[derive(Debug, Default)]
pub struct Flaky {
    pub inner: HeadlessBackend,
    pub fail_add_subview: bool,
    pub fail_activate: bool,
}

impl Flaky {
    pub fn new() -> Flaky {
        Flaky::default()
    }
}

impl Backend for Flaky {
    type ViewRef = ViewId;
    type Error = String;

    fn new_view(&mut self, kind: NativeKind) -> Result<ViewId, String> {
        self.inner.new_view(kind).map_err(|e| e.to_string())
    }

    fn set(&mut self, view: &ViewId, property: NativeProperty) -> Result<(), String> {
        self.inner.set(view, property).map_err(|e| e.to_string())
    }

    fn add_subview(&mut self, view: &ViewId, subview: &ViewId) -> Result<(), String> {
        if self.fail_add_subview {
            return Err("add_subview refused".to_string());
        }
        self.inner.add_subview(view, subview).map_err(|e| e.to_string())
    }

    fn add_arranged_subview(&mut self, stack: &ViewId, subview: &ViewId) -> Result<(), String> {
        if self.fail_add_subview {
            return Err("add_arranged_subview refused".to_string());
        }
        self.inner
            .add_arranged_subview(stack, subview)
            .map_err(|e| e.to_string())
    }

    fn remove_view(&mut self, view: &ViewId) -> Result<(), String> {
        self.inner.remove_view(view).map_err(|e| e.to_string())
    }

    fn activate(&mut self, constraint: NativeConstraint<ViewId>) -> Result<(), String> {
        if self.fail_activate {
            return Err("activate refused".to_string());
        }
        self.inner.activate(constraint).map_err(|e| e.to_string())
    }

    fn bind(&mut self, view: &ViewId, event: Event, callback: Callback) -> Result<(), String> {
        self.inner.bind(view, event, callback).map_err(|e| e.to_string())
    }
}
