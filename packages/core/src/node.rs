use crate::{event::EventHandler, payload::Payload, str::RcStr, StringLike};
use std::{fmt, hash::Hash};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NodeType {
    Tag(RcStr),
    Text(RcStr),
    Fragment,
}

/// A handle to a node of some host document. Clones refer to the same node,
/// equality and hashing are by identity.
pub trait GenericNode: 'static + Clone + Eq + Hash + fmt::Debug {
    type Event;

    fn create(ty: NodeType) -> Self;
    fn node_type(&self) -> NodeType;
    /// Copy this node with its attributes, properties and descendants, but
    /// without listeners.
    fn deep_clone(&self) -> Self;

    fn tag(&self) -> Option<RcStr> {
        match self.node_type() {
            NodeType::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Data of a text node, the concatenated descendant text otherwise.
    fn text_content(&self) -> String;
    fn set_text(&self, data: StringLike);

    fn attribute(&self, name: &str) -> Option<RcStr>;
    fn attributes(&self) -> Vec<(RcStr, RcStr)>;
    fn set_attribute(&self, name: RcStr, val: StringLike);
    fn remove_attribute(&self, name: &str);

    fn property(&self, name: &str) -> Option<Payload>;
    fn properties(&self) -> Vec<(RcStr, Payload)>;
    fn set_property(&self, name: RcStr, val: Payload);

    fn listen_event(&self, event: RcStr, handler: EventHandler<Self::Event>);
    fn listeners(&self) -> Vec<(RcStr, EventHandler<Self::Event>)>;
    fn clear_listeners(&self);

    fn parent(&self) -> Option<Self>;
    fn first_child(&self) -> Option<Self>;
    fn next_sibling(&self) -> Option<Self>;
    fn children(&self) -> Vec<Self>;
    fn append_child(&self, child: &Self);
    fn insert_before(&self, new_node: &Self, ref_node: Option<&Self>);
    fn replace_child(&self, new_node: &Self, old_node: &Self);
    fn remove_child(&self, node: &Self);

    fn remove_children(&self) {
        for child in self.children() {
            self.remove_child(&child);
        }
    }

    /// Whether `class` is one of the whitespace separated classes of this node.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Find the first descendant (excluding this node) carrying `class`.
    fn find_by_class(&self, class: &str) -> Option<Self> {
        let mut current = self.first_child();
        while let Some(node) = current {
            if node.has_class(class) {
                return Some(node);
            }
            if let Some(found) = node.find_by_class(class) {
                return Some(found);
            }
            current = node.next_sibling();
        }
        None
    }
}
