//! Building templates for the render function.
//!
//! A template is a detached [`MemNode`] tree. The reconciler copies what it
//! needs onto the live tree, so templates can be dropped after each cycle.

use celem_core::{EventHandler, GenericNode, NodeType, Payload, RcStr, StringLike};
use celem_dom::{Event, MemNode};
use celem_elements::Hook;

/// Start an element template.
pub fn h(tag: impl Into<RcStr>) -> Element {
    Element {
        node: MemNode::create(NodeType::Tag(tag.into())),
    }
}

pub fn text(data: impl Into<StringLike>) -> MemNode {
    MemNode::create(NodeType::Text(data.into().into_string()))
}

/// Group several nodes without a wrapper element. Appending the fragment
/// anywhere moves its children in its place.
pub fn fragment(children: impl IntoIterator<Item = MemNode>) -> MemNode {
    let node = MemNode::create(NodeType::Fragment);
    for child in children {
        node.append_child(&child);
    }
    node
}

#[derive(Debug)]
pub struct Element {
    node: MemNode,
}

impl Element {
    pub fn attr(self, name: impl Into<RcStr>, val: impl Into<StringLike>) -> Self {
        self.node.set_attribute(name.into(), val.into());
        self
    }

    pub fn class(self, val: impl Into<StringLike>) -> Self {
        self.attr("class", val)
    }

    pub fn id(self, val: impl Into<StringLike>) -> Self {
        self.attr("id", val)
    }

    pub fn prop(self, name: impl Into<RcStr>, val: Payload) -> Self {
        self.node.set_property(name.into(), val);
        self
    }

    /// Pass `payload` to the element through `hook`. Ignored unless the
    /// element's definition binds the hook.
    pub fn hook(self, hook: Hook, payload: Payload) -> Self {
        self.prop(hook.name(), payload)
    }

    pub fn on(self, event: impl Into<RcStr>, handler: impl Into<EventHandler<Event>>) -> Self {
        self.node.listen_event(event.into(), handler.into());
        self
    }

    pub fn child(self, child: impl Into<MemNode>) -> Self {
        self.node.append_child(&child.into());
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = MemNode>) -> Self {
        for child in children {
            self.node.append_child(&child);
        }
        self
    }

    pub fn text(self, data: impl Into<StringLike>) -> Self {
        self.child(text(data))
    }

    pub fn build(self) -> MemNode {
        self.node
    }
}

impl From<Element> for MemNode {
    fn from(t: Element) -> Self {
        t.build()
    }
}
