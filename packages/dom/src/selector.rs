use crate::MemNode;
use celem_core::GenericNode;
use smallvec::SmallVec;

/// A compound selector such as `body`, `#app`, `.content` or `pre.content`.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Selector<'a> {
    tag: Option<&'a str>,
    id: Option<&'a str>,
    classes: SmallVec<[&'a str; 2]>,
}

impl<'a> Selector<'a> {
    /// Returns `None` for anything beyond a single compound selector.
    pub fn parse(input: &'a str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let mut selector = Selector::default();
        let start = input.find(is_delimiter).unwrap_or(input.len());
        if start > 0 {
            selector.tag = Some(valid_name(&input[..start])?);
        }
        let mut rest = &input[start..];
        while let Some(prefix) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(is_delimiter).unwrap_or(body.len());
            let name = valid_name(&body[..end])?;
            match prefix {
                '#' if selector.id.is_none() => selector.id = Some(name),
                '.' => selector.classes.push(name),
                _ => return None,
            }
            rest = &body[end..];
        }
        Some(selector)
    }

    pub fn matches(&self, node: &MemNode) -> bool {
        let Some(tag) = node.tag() else {
            return false;
        };
        if let Some(expected) = self.tag {
            if !tag.eq_ignore_ascii_case(expected) {
                return false;
            }
        }
        if let Some(expected) = self.id {
            if node.attribute("id").as_deref() != Some(expected) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}

fn is_delimiter(c: char) -> bool {
    c == '#' || c == '.'
}

fn valid_name(name: &str) -> Option<&str> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(name)
}

/// Find the first node matching `selector` in tree order, starting with `root`.
pub fn query_selector(root: &MemNode, selector: &Selector) -> Option<MemNode> {
    if selector.matches(root) {
        return Some(root.clone());
    }
    root.children()
        .iter()
        .find_map(|child| query_selector(child, selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            Selector::parse("pre.content"),
            Some(Selector {
                tag: Some("pre"),
                id: None,
                classes: SmallVec::from_slice(&["content"]),
            })
        );
        assert_eq!(
            Selector::parse("#app"),
            Some(Selector {
                id: Some("app"),
                ..Default::default()
            })
        );
        assert!(Selector::parse("body > main").is_none());
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("#a#b").is_none());
        assert!(Selector::parse("div.").is_none());
    }
}
