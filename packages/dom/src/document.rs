use crate::{
    selector::{query_selector, Selector},
    MemNode,
};
use celem_core::{GenericNode, NodeType, RcStr, StringLike};

/// The live host document: `html > (head > title), body`.
#[derive(Clone, Debug)]
pub struct Document {
    root: MemNode,
    title: MemNode,
    body: MemNode,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = MemNode::create(NodeType::Tag("html".into()));
        let head = MemNode::create(NodeType::Tag("head".into()));
        let title = MemNode::create(NodeType::Tag("title".into()));
        let body = MemNode::create(NodeType::Tag("body".into()));
        head.append_child(&title);
        root.append_child(&head);
        root.append_child(&body);
        Self { root, title, body }
    }

    pub fn root(&self) -> &MemNode {
        &self.root
    }

    /// The `<body>` node the document was created with. Mounting may
    /// replace it; use `query_selector("body")` for the current one.
    pub fn body(&self) -> &MemNode {
        &self.body
    }

    pub fn title(&self) -> String {
        self.title.text_content()
    }

    pub fn set_title(&self, title: impl Into<StringLike>) {
        self.title.set_text(title.into());
    }

    pub fn create_element(&self, tag: impl Into<RcStr>) -> MemNode {
        MemNode::create(NodeType::Tag(tag.into()))
    }

    pub fn create_text(&self, data: impl Into<RcStr>) -> MemNode {
        MemNode::create(NodeType::Text(data.into()))
    }

    pub fn create_fragment(&self) -> MemNode {
        MemNode::create(NodeType::Fragment)
    }

    /// # Panics
    ///
    /// Panics if `selector` is not a single compound selector.
    pub fn query_selector(&self, selector: &str) -> Option<MemNode> {
        let selector = Selector::parse(selector)
            .unwrap_or_else(|| panic!("tried to query with an unsupported selector"));
        query_selector(&self.root, &selector)
    }

    /// Whether `node` is attached to this document.
    pub fn contains(&self, node: &MemNode) -> bool {
        self.root.contains(node)
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}
