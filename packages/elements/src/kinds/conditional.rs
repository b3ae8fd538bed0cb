use crate::{
    behavior::{ElementBehavior, Identity},
    hook::Hook,
};
use celem_core::{GenericNode, NodeType, Payload};
use std::{cell::RefCell, rc::Rc};

/// A payload slot filled by the first hook delivered to a [`Conditional`].
///
/// Content rendered before that can keep a clone and read it later, e.g.
/// from an event listener.
#[derive(Clone, Debug, Default)]
pub struct Handle {
    inner: Rc<RefCell<Option<Payload>>>,
}

impl Handle {
    pub fn get(&self) -> Option<Payload> {
        self.inner.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.inner.borrow().is_some()
    }

    fn set(&self, payload: Payload) {
        *self.inner.borrow_mut() = Some(payload);
    }
}

/// Captures its original children and renders them once on connection. The
/// first payload is stored as a [`Handle`] and shows nothing new, every later
/// payload re-renders.
///
/// The render closure receives the host, the handle and a fresh copy of the
/// captured children as a fragment.
pub struct Conditional<N> {
    identity: Identity,
    handle: Handle,
    captured: Option<N>,
    render: Box<dyn FnMut(&N, &Handle, N) -> N>,
}

impl<N: GenericNode> Conditional<N> {
    pub fn new(render: impl 'static + FnMut(&N, &Handle, N) -> N) -> Self {
        Self {
            identity: Identity::default(),
            handle: Handle::default(),
            captured: None,
            render: Box::new(render),
        }
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    fn render(&mut self, host: &N) {
        let captured = match &self.captured {
            Some(fragment) => fragment.deep_clone(),
            None => N::create(NodeType::Fragment),
        };
        host.remove_children();
        let content = (self.render)(host, &self.handle, captured);
        host.append_child(&content);
    }
}

impl<N: GenericNode> ElementBehavior<N> for Conditional<N> {
    fn is_same_node(&self, host: &N, candidate: &N) -> bool {
        self.identity.matches(host, candidate)
    }

    fn connected(&mut self, host: &N) {
        let fragment = N::create(NodeType::Fragment);
        for child in host.children() {
            fragment.append_child(&child);
        }
        self.captured = Some(fragment);
        self.render(host);
    }

    fn update(&mut self, host: &N, hook: Hook, payload: &Payload) {
        if !self.handle.is_set() {
            tracing::trace!(?host, %hook, "store handle");
            self.handle.set(payload.clone());
            return;
        }
        self.render(host);
    }
}
