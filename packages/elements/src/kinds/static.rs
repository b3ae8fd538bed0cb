use crate::{
    behavior::{ElementBehavior, Identity},
    hook::Hook,
};
use celem_core::{GenericNode, Payload};

/// Renders once on connection and is never refreshed.
pub struct Static<N> {
    identity: Identity,
    render: Box<dyn FnMut(&N) -> N>,
}

impl<N: GenericNode> Static<N> {
    pub fn new(render: impl 'static + FnMut(&N) -> N) -> Self {
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

impl<N: GenericNode> ElementBehavior<N> for Static<N> {
    fn is_same_node(&self, host: &N, candidate: &N) -> bool {
        self.identity.matches(host, candidate)
    }

    fn connected(&mut self, host: &N) {
        let content = (self.render)(host);
        host.append_child(&content);
    }

    fn update(&mut self, host: &N, hook: Hook, _: &Payload) {
        tracing::trace!(?host, %hook, "static element ignores payload");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celem_core::NodeType;
    use celem_dom::MemNode;

    fn heading(title: &'static str) -> Static<MemNode> {
        Static::new(move |_| {
            let h1 = MemNode::create(NodeType::Tag("h1".into()));
            h1.set_text(title.into());
            h1
        })
    }

    #[test]
    fn instances_are_independent() {
        let host1 = MemNode::create(NodeType::Tag("my-heading".into()));
        let host2 = MemNode::create(NodeType::Tag("my-heading".into()));
        let mut first = heading("Custom elements");
        let mut second = heading("Custom elements");
        first.connected(&host1);
        second.connected(&host2);
        assert_eq!(host1.text_content(), "Custom elements");
        assert_eq!(host2.text_content(), "Custom elements");

        host1.first_child().unwrap().set_text("changed".into());
        assert_eq!(host2.text_content(), "Custom elements");
        assert_ne!(host1.first_child(), host2.first_child());
    }

    #[test]
    fn ignores_payloads() {
        let host = MemNode::create(NodeType::Tag("my-heading".into()));
        let mut element = heading("Title");
        element.connected(&host);
        element.update(&host, Hook::Render, &Payload::new(1));
        element.update(&host, Hook::Init, &Payload::new("other"));
        assert_eq!(host.child_count(), 1);
        assert_eq!(host.text_content(), "Title");
    }
}
