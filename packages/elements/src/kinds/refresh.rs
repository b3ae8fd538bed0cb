use crate::{
    behavior::{ElementBehavior, Identity},
    hook::Hook,
};
use celem_core::{GenericNode, Payload};

/// Rebuilds its whole content from the host attributes and the payload on
/// every render cycle.
pub struct Refresh<N> {
    identity: Identity,
    render: Box<dyn FnMut(&N, &Payload) -> N>,
}

impl<N: GenericNode> Refresh<N> {
    pub fn new(render: impl 'static + FnMut(&N, &Payload) -> N) -> Self {
        Self {
            identity: Identity::default(),
            render: Box::new(render),
        }
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }
}

impl<N: GenericNode> ElementBehavior<N> for Refresh<N> {
    fn is_same_node(&self, host: &N, candidate: &N) -> bool {
        self.identity.matches(host, candidate)
    }

    fn update(&mut self, host: &N, hook: Hook, payload: &Payload) {
        tracing::trace!(?host, %hook, "refresh");
        host.remove_children();
        let content = (self.render)(host, payload);
        host.append_child(&content);
    }
}
