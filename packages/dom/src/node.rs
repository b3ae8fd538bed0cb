use crate::event::Event;
use celem_core::{
    EventHandler, GenericNode, NodeType, Payload, RandomState, RcStr, StringLike,
};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::{
    cell::{Ref, RefCell, RefMut},
    fmt, hash,
    rc::{Rc, Weak},
};

const INITIAL_LISTENER_SLOTS: usize = 2;

type Attributes = IndexMap<RcStr, RcStr, RandomState>;
type Properties = IndexMap<RcStr, Payload, RandomState>;
type Listeners = SmallVec<[(RcStr, EventHandler<Event>); INITIAL_LISTENER_SLOTS]>;

pub(crate) struct RawNode {
    ty: NodeType,
    attributes: Attributes,
    properties: Properties,
    listeners: Listeners,
    parent: Weak<RefCell<RawNode>>,
    children: Vec<MemNode>,
}

/// A node of the in-memory document.
#[derive(Clone)]
pub struct MemNode {
    inner: Rc<RefCell<RawNode>>,
}

impl PartialEq for MemNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MemNode {}

impl hash::Hash for MemNode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.inner) as *const ()).hash(state)
    }
}

impl fmt::Debug for MemNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(raw) => match &raw.ty {
                NodeType::Tag(tag) => f
                    .debug_struct("Element")
                    .field("tag", tag)
                    .field("children", &raw.children.len())
                    .finish(),
                NodeType::Text(data) => f.debug_tuple("Text").field(data).finish(),
                NodeType::Fragment => f
                    .debug_struct("Fragment")
                    .field("children", &raw.children.len())
                    .finish(),
            },
            Err(_) => f.debug_struct("MemNode").finish_non_exhaustive(),
        }
    }
}

impl MemNode {
    fn raw(&self) -> Ref<'_, RawNode> {
        self.inner.borrow()
    }

    fn raw_mut(&self) -> RefMut<'_, RawNode> {
        self.inner.borrow_mut()
    }

    fn is_fragment(&self) -> bool {
        matches!(self.raw().ty, NodeType::Fragment)
    }

    fn index_of(&self, child: &Self) -> Option<usize> {
        self.raw().children.iter().position(|c| c == child)
    }

    /// Whether `self` is `node` or one of its ancestors.
    pub fn contains(&self, node: &Self) -> bool {
        let mut current = Some(node.clone());
        while let Some(t) = current {
            if t == *self {
                return true;
            }
            current = t.parent();
        }
        false
    }

    pub fn child_count(&self) -> usize {
        self.raw().children.len()
    }

    pub fn remove_event_listener(&self, event: &str, handler: &EventHandler<Event>) {
        self.raw_mut()
            .listeners
            .retain(|(name, h)| !(name.as_str() == event && h.ptr_eq(handler)));
    }

    fn detach(&self) {
        let parent = self.raw().parent.upgrade().map(|inner| MemNode { inner });
        if let Some(parent) = parent {
            parent.remove_child(self);
        }
    }

    fn check_insertion(&self, child: &Self) {
        if child.contains(self) {
            panic!("tried to insert a node into itself or its descendant");
        }
    }

    fn move_children_before(&self, fragment: &Self, position: Option<usize>) {
        let children = std::mem::take(&mut fragment.raw_mut().children);
        let mut raw = self.raw_mut();
        let mut index = position.unwrap_or(raw.children.len());
        for child in children {
            child.raw_mut().parent = Rc::downgrade(&self.inner);
            raw.children.insert(index, child);
            index += 1;
        }
    }

    fn insert_at(&self, child: &Self, position: Option<usize>) {
        child.raw_mut().parent = Rc::downgrade(&self.inner);
        let mut raw = self.raw_mut();
        let index = position.unwrap_or(raw.children.len());
        raw.children.insert(index, child.clone());
    }
}

impl GenericNode for MemNode {
    type Event = Event;

    fn create(ty: NodeType) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RawNode {
                ty,
                attributes: Default::default(),
                properties: Default::default(),
                listeners: Default::default(),
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    fn node_type(&self) -> NodeType {
        self.raw().ty.clone()
    }

    fn deep_clone(&self) -> Self {
        let raw = self.raw();
        let node = Self::create(raw.ty.clone());
        {
            let mut new = node.raw_mut();
            new.attributes = raw.attributes.clone();
            new.properties = raw.properties.clone();
        }
        for child in raw.children.iter() {
            node.insert_at(&child.deep_clone(), None);
        }
        node
    }

    fn text_content(&self) -> String {
        let raw = self.raw();
        match &raw.ty {
            NodeType::Text(data) => data.to_string(),
            _ => raw.children.iter().map(|c| c.text_content()).collect(),
        }
    }

    fn set_text(&self, data: StringLike) {
        let data = data.into_string();
        if let NodeType::Text(t) = &mut self.raw_mut().ty {
            *t = data;
            return;
        }
        self.remove_children();
        if !data.is_empty() {
            self.append_child(&Self::create(NodeType::Text(data)));
        }
    }

    fn attribute(&self, name: &str) -> Option<RcStr> {
        self.raw().attributes.get(name).cloned()
    }

    fn attributes(&self) -> Vec<(RcStr, RcStr)> {
        self.raw()
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set_attribute(&self, name: RcStr, val: StringLike) {
        self.raw_mut().attributes.insert(name, val.into_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.raw_mut().attributes.shift_remove(name);
    }

    fn property(&self, name: &str) -> Option<Payload> {
        self.raw().properties.get(name).cloned()
    }

    fn properties(&self) -> Vec<(RcStr, Payload)> {
        self.raw()
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set_property(&self, name: RcStr, val: Payload) {
        self.raw_mut().properties.insert(name, val);
    }

    fn listen_event(&self, event: RcStr, handler: EventHandler<Event>) {
        self.raw_mut().listeners.push((event, handler));
    }

    fn listeners(&self) -> Vec<(RcStr, EventHandler<Event>)> {
        self.raw().listeners.iter().cloned().collect()
    }

    fn clear_listeners(&self) {
        self.raw_mut().listeners.clear();
    }

    fn parent(&self) -> Option<Self> {
        self.raw().parent.upgrade().map(|inner| Self { inner })
    }

    fn first_child(&self) -> Option<Self> {
        self.raw().children.first().cloned()
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.parent()?;
        let index = parent.index_of(self)?;
        let sibling = parent.raw().children.get(index + 1).cloned();
        sibling
    }

    fn children(&self) -> Vec<Self> {
        self.raw().children.clone()
    }

    fn append_child(&self, child: &Self) {
        self.insert_before(child, None);
    }

    fn insert_before(&self, new_node: &Self, ref_node: Option<&Self>) {
        if ref_node == Some(new_node) {
            return;
        }
        self.check_insertion(new_node);
        if new_node.is_fragment() {
            let position = ref_node.map(|r| self.index_of(r).unwrap_or_else(not_a_child));
            self.move_children_before(new_node, position);
            return;
        }
        new_node.detach();
        // Detaching may shift the reference node.
        let position = ref_node.map(|r| self.index_of(r).unwrap_or_else(not_a_child));
        tracing::trace!(parent = ?self, child = ?new_node, "insert");
        self.insert_at(new_node, position);
    }

    fn replace_child(&self, new_node: &Self, old_node: &Self) {
        if new_node == old_node {
            return;
        }
        self.insert_before(new_node, Some(old_node));
        self.remove_child(old_node);
    }

    fn remove_child(&self, node: &Self) {
        let index = self.index_of(node).unwrap_or_else(not_a_child);
        tracing::trace!(parent = ?self, child = ?node, "remove");
        let child = self.raw_mut().children.remove(index);
        child.raw_mut().parent = Weak::new();
    }
}

fn not_a_child<T>() -> T {
    panic!("tried to use a node that is not a child of this node")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &'static str) -> MemNode {
        MemNode::create(NodeType::Tag(tag.into()))
    }

    fn text(data: &'static str) -> MemNode {
        MemNode::create(NodeType::Text(data.into()))
    }

    #[test]
    fn append_moves_from_previous_parent() {
        let a = element("div");
        let b = element("div");
        let child = text("x");
        a.append_child(&child);
        b.append_child(&child);
        assert_eq!(a.child_count(), 0);
        assert_eq!(b.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(b));
    }

    #[test]
    fn append_fragment_moves_its_children() {
        let fragment = MemNode::create(NodeType::Fragment);
        fragment.append_child(&text("a"));
        fragment.append_child(&text("b"));
        let host = element("div");
        host.append_child(&fragment);
        assert_eq!(host.text_content(), "ab");
        assert_eq!(fragment.child_count(), 0);
        assert_eq!(host.first_child().unwrap().parent(), Some(host.clone()));
    }

    #[test]
    fn insert_and_replace() {
        let parent = element("ul");
        let (a, b, c) = (text("a"), text("b"), text("c"));
        parent.append_child(&a);
        parent.append_child(&c);
        parent.insert_before(&b, Some(&c));
        assert_eq!(parent.text_content(), "abc");

        let d = text("d");
        parent.replace_child(&d, &b);
        assert_eq!(parent.text_content(), "adc");
        assert!(b.parent().is_none());
        assert_eq!(a.next_sibling(), Some(d.clone()));
        assert_eq!(c.next_sibling(), None);
    }

    #[test]
    fn reinsert_within_same_parent() {
        let parent = element("ul");
        let (a, b, c) = (text("a"), text("b"), text("c"));
        parent.append_child(&a);
        parent.append_child(&b);
        parent.append_child(&c);
        parent.insert_before(&a, Some(&c));
        assert_eq!(parent.text_content(), "bac");
    }

    #[test]
    fn deep_clone_skips_listeners() {
        let node = element("button");
        node.set_attribute("class".into(), "primary".into());
        node.listen_event("click".into(), (|_: Event| {}).into());
        node.append_child(&text("Click me!"));
        let cloned = node.deep_clone();
        assert_ne!(cloned, node);
        assert_eq!(cloned.attribute("class"), Some("primary".into()));
        assert_eq!(cloned.text_content(), "Click me!");
        assert!(cloned.listeners().is_empty());
        assert_eq!(node.listeners().len(), 1);
    }

    #[test]
    fn set_text_on_element_replaces_children() {
        let node = element("p");
        node.append_child(&text("a"));
        node.append_child(&element("span"));
        node.set_text("Clicks: 1".into());
        assert_eq!(node.child_count(), 1);
        assert_eq!(node.text_content(), "Clicks: 1");
    }

    #[test]
    fn find_by_class() {
        let root = element("div");
        let pre = element("pre");
        pre.set_attribute("class".into(), "big content".into());
        let wrapper = element("section");
        wrapper.append_child(&pre);
        root.append_child(&wrapper);
        assert_eq!(root.find_by_class("content"), Some(pre.clone()));
        assert!(pre.has_class("big"));
        assert!(root.find_by_class("missing").is_none());
    }

    #[test]
    #[should_panic = "tried to use a node that is not a child of this node"]
    fn remove_foreign_child() {
        element("div").remove_child(&text("x"));
    }

    #[test]
    #[should_panic = "tried to insert a node into itself or its descendant"]
    fn insert_into_descendant() {
        let parent = element("div");
        let child = element("div");
        parent.append_child(&child);
        child.append_child(&parent);
    }
}
