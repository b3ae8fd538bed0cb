use crate::hook::Hook;
use celem_core::{GenericNode, Payload, RcStr};

/// Who decides what lives inside the host after it has been connected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Content {
    /// The element renders its own content; template children are only
    /// handed over once, before connection.
    ///
    /// Nothing below the host is diffed again afterwards. A custom element
    /// nested in the template children keeps the attributes it was created
    /// with and receives no further hooks, so an element needing updates
    /// must not be placed inside an owned one.
    Owned,
    /// Template children are diffed on every cycle against
    /// [`ElementBehavior::content_children`] through the append/remove
    /// overrides.
    Slotted,
}

/// Outcome of [`ElementBehavior::remove_content`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Removal {
    Removed,
    /// The element does not support incremental removal. The reconciler
    /// replaces the whole element instead.
    Unsupported,
}

/// Decides whether a live instance may be reused for a template node.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Identity {
    /// Any two nodes with the same tag are interchangeable.
    #[default]
    TagName,
    /// Same tag and the same value of the given attribute, e.g. a stable key.
    Attribute(RcStr),
    /// Never reuse, every cycle creates a fresh instance.
    Never,
}

impl Identity {
    pub fn matches<N: GenericNode>(&self, host: &N, candidate: &N) -> bool {
        match self {
            Identity::TagName => host.tag() == candidate.tag(),
            Identity::Attribute(name) => {
                host.tag() == candidate.tag() && host.attribute(name) == candidate.attribute(name)
            }
            Identity::Never => false,
        }
    }
}

/// The capabilities of a custom element. Every method has a default, so a
/// kind only implements what it needs.
pub trait ElementBehavior<N: GenericNode>: 'static {
    /// Whether the live `host` can stand for `candidate`, a freshly rendered
    /// template node with the same tag.
    fn is_same_node(&self, host: &N, candidate: &N) -> bool {
        Identity::TagName.matches(host, candidate)
    }

    /// Runs once, right after the host is inserted into the live tree.
    fn connected(&mut self, _host: &N) {}

    /// Runs for each bound hook present on the template node, on every
    /// render cycle, always after [`ElementBehavior::connected`].
    fn update(&mut self, _host: &N, _hook: Hook, _payload: &Payload) {}

    fn content_policy(&self) -> Content {
        Content::Owned
    }

    /// The nodes diffed against template children under [`Content::Slotted`].
    fn content_children(&self, host: &N) -> Vec<N> {
        host.children()
    }

    fn append_content(&mut self, host: &N, child: &N) {
        host.append_child(child);
    }

    fn remove_content(&mut self, host: &N, child: &N) -> Removal {
        host.remove_child(child);
        Removal::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celem_core::NodeType;
    use celem_dom::MemNode;

    fn keyed(tag: &'static str, key: &'static str) -> MemNode {
        let node = MemNode::create(NodeType::Tag(tag.into()));
        node.set_attribute("key".into(), key.into());
        node
    }

    #[test]
    fn identity() {
        let a = keyed("my-item", "1");
        let b = keyed("my-item", "2");
        let c = keyed("my-other", "1");
        assert!(Identity::TagName.matches(&a, &b));
        assert!(!Identity::TagName.matches(&a, &c));
        let by_key = Identity::Attribute("key".into());
        assert!(by_key.matches(&a, &keyed("my-item", "1")));
        assert!(!by_key.matches(&a, &b));
        assert!(!by_key.matches(&a, &c));
        assert!(!Identity::Never.matches(&a, &a));
    }
}
