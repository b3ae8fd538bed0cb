use crate::behavior::{Content, ElementBehavior, Identity, Removal};
use celem_core::{GenericNode, RcStr};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WrapperRemoval {
    /// Remove the child from the slot.
    #[default]
    Delegate,
    /// Do nothing and let the reconciler replace the whole element.
    Unsupported,
}

/// Keeps a fixed wrapper around content that changes between cycles.
///
/// The wrapper is built by the template closure on the first append and the
/// first node carrying the slot class (`content` by default) becomes the
/// slot for every appended child.
pub struct Wrapper<N> {
    identity: Identity,
    template: Box<dyn FnMut() -> N>,
    slot_class: RcStr,
    removal: WrapperRemoval,
    slot: Option<N>,
}

impl<N: GenericNode> Wrapper<N> {
    pub fn new(template: impl 'static + FnMut() -> N) -> Self {
        Self {
            identity: Identity::default(),
            template: Box::new(template),
            slot_class: "content".into(),
            removal: WrapperRemoval::default(),
            slot: None,
        }
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    pub fn slot_class(mut self, class: impl Into<RcStr>) -> Self {
        self.slot_class = class.into();
        self
    }

    pub fn removal(mut self, removal: WrapperRemoval) -> Self {
        self.removal = removal;
        self
    }

    fn slot(&mut self, host: &N) -> N {
        if let Some(slot) = &self.slot {
            return slot.clone();
        }
        let wrapper = (self.template)();
        let slot = if wrapper.has_class(&self.slot_class) {
            wrapper.clone()
        } else {
            wrapper.find_by_class(&self.slot_class).unwrap_or_else(|| {
                panic!("tried to build a wrapper without a `.{}` slot", self.slot_class)
            })
        };
        host.append_child(&wrapper);
        self.slot = Some(slot.clone());
        slot
    }
}

impl<N: GenericNode> ElementBehavior<N> for Wrapper<N> {
    fn is_same_node(&self, host: &N, candidate: &N) -> bool {
        self.identity.matches(host, candidate)
    }

    fn content_policy(&self) -> Content {
        Content::Slotted
    }

    fn content_children(&self, _: &N) -> Vec<N> {
        self.slot
            .as_ref()
            .map(GenericNode::children)
            .unwrap_or_default()
    }

    fn append_content(&mut self, host: &N, child: &N) {
        self.slot(host).append_child(child);
    }

    fn remove_content(&mut self, host: &N, child: &N) -> Removal {
        match self.removal {
            WrapperRemoval::Delegate => {
                let slot = self
                    .slot
                    .as_ref()
                    .unwrap_or_else(|| panic!("tried to remove content before any was appended"));
                slot.remove_child(child);
                Removal::Removed
            }
            WrapperRemoval::Unsupported => {
                tracing::trace!(?host, "wrapper does not remove content");
                Removal::Unsupported
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celem_core::NodeType;
    use celem_dom::MemNode;

    fn element(tag: &'static str) -> MemNode {
        MemNode::create(NodeType::Tag(tag.into()))
    }

    fn text(data: &'static str) -> MemNode {
        MemNode::create(NodeType::Text(data.into()))
    }

    fn pre() -> Wrapper<MemNode> {
        Wrapper::new(|| {
            let pre = element("pre");
            pre.set_attribute("class".into(), "content".into());
            pre
        })
    }

    #[test]
    fn wrapper_is_built_once() {
        let host = element("my-state");
        let mut state = pre();
        assert!(state.content_children(&host).is_empty());
        for data in ["a", "b", "c"] {
            state.append_content(&host, &text(data));
        }
        assert_eq!(host.child_count(), 1);
        let slot = host.first_child().unwrap();
        assert_eq!(slot.tag(), Some("pre".into()));
        assert_eq!(slot.child_count(), 3);
        assert_eq!(state.content_children(&host).len(), 3);
        assert_eq!(host.to_html(), "<my-state><pre class=\"content\">abc</pre></my-state>");
    }

    #[test]
    fn nested_slot() {
        let host = element("my-card");
        let mut card = Wrapper::new(|| {
            let outer = element("div");
            let inner = element("main");
            inner.set_attribute("class".into(), "body".into());
            outer.append_child(&inner);
            outer
        })
        .slot_class("body");
        card.append_content(&host, &text("x"));
        assert_eq!(host.to_html(), "<my-card><div><main class=\"body\">x</main></div></my-card>");
    }

    #[test]
    fn removal_policies() {
        let host = element("my-state");
        let mut delegate = pre();
        let child = text("a");
        delegate.append_content(&host, &child);
        assert_eq!(delegate.remove_content(&host, &child), Removal::Removed);
        assert!(delegate.content_children(&host).is_empty());

        let host = element("my-state");
        let mut unsupported = pre().removal(WrapperRemoval::Unsupported);
        let child = text("a");
        unsupported.append_content(&host, &child);
        assert_eq!(unsupported.remove_content(&host, &child), Removal::Unsupported);
        assert_eq!(unsupported.content_children(&host), vec![child]);
    }

    #[test]
    #[should_panic = "tried to build a wrapper without a `.content` slot"]
    fn missing_slot() {
        let mut state = Wrapper::new(|| element("pre"));
        state.append_content(&element("my-state"), &text("a"));
    }
}
