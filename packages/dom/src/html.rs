use crate::MemNode;
use celem_core::{GenericNode, NodeType};
use std::fmt::{self, Write};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl MemNode {
    /// Serialize this node and its descendants. Properties and listeners are
    /// not part of the markup.
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        write_node(&mut buf, self).unwrap_or_else(|_| unreachable!());
        buf
    }
}

fn write_node(buf: &mut String, node: &MemNode) -> fmt::Result {
    match node.node_type() {
        NodeType::Text(data) => write_escaped(buf, &data, false),
        NodeType::Fragment => node.children().iter().try_for_each(|c| write_node(buf, c)),
        NodeType::Tag(tag) => {
            write!(buf, "<{tag}")?;
            for (name, value) in node.attributes() {
                write!(buf, " {name}=\"")?;
                write_escaped(buf, &value, true)?;
                buf.push('"');
            }
            buf.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return Ok(());
            }
            for child in node.children() {
                write_node(buf, &child)?;
            }
            write!(buf, "</{tag}>")
        }
    }
}

fn write_escaped(buf: &mut String, s: &str, attribute: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' if attribute => buf.push_str("&quot;"),
            _ => buf.push(c),
        }
    }
    Ok(())
}
