//! Owned document tree used by the extraction core.
//!
//! Parsing is delegated to the `scraper` crate (html5ever underneath); the
//! recovered tree is then projected into an owned [`Node`] value that the
//! selector primitives and site adapters walk. A `Node` is immutable once
//! built and lives only for the request that parsed it.
//!
//! Doctype, comment, and processing-instruction nodes are dropped during
//! conversion; only elements and text leaves survive. Malformed markup is
//! represented by whatever tree html5ever recovers — no repair guarantees
//! beyond that.

use scraper::{ElementRef, Html};
use std::collections::HashMap;

/// A single parsed unit of a document: an element or a text leaf.
///
/// Text leaves have an empty `tag` and carry their literal payload in `text`;
/// elements have a non-empty `tag`, an attribute map, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name; empty for text nodes.
    pub tag: String,
    /// Attribute key/value pairs. Keys are unique.
    pub attrs: HashMap<String, String>,
    /// Literal content of a text leaf; empty for elements.
    pub text: String,
    /// Ordered child nodes. Text leaves have none.
    pub children: Vec<Node>,
}

impl Node {
    /// Build an element node. Mostly useful for constructing fixtures.
    pub fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Self {
        Node {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: String::new(),
            children,
        }
    }

    /// Build a text leaf.
    pub fn text(payload: &str) -> Self {
        Node {
            tag: String::new(),
            attrs: HashMap::new(),
            text: payload.to_string(),
            children: Vec::new(),
        }
    }

    /// Whether this node is a text leaf.
    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Parse raw document bytes into an owned [`Node`] tree.
///
/// Returns the `<html>` element that html5ever recovers; even fragmentary
/// input gets wrapped in a full document envelope, so there is always an
/// element to return.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    convert_element(document.root_element())
}

fn convert_element(el: ElementRef<'_>) -> Node {
    Node {
        tag: el.value().name().to_string(),
        attrs: el
            .value()
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        text: String::new(),
        children: el.children().filter_map(convert_node).collect(),
    }
}

fn convert_node(node: ego_tree::NodeRef<'_, scraper::Node>) -> Option<Node> {
    if let Some(el) = ElementRef::wrap(node) {
        Some(convert_element(el))
    } else if let Some(text) = node.value().as_text() {
        Some(Node::text(&text.text))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_basic_structure() {
        let root = parse_document("<html><body><p class=\"x\">hi</p></body></html>");
        assert_eq!(root.tag, "html");

        let body = root
            .children
            .iter()
            .find(|c| c.tag == "body")
            .expect("body present");
        let p = &body.children[0];
        assert_eq!(p.tag, "p");
        assert_eq!(p.attr("class"), Some("x"));
        assert_eq!(p.children[0].text, "hi");
        assert!(p.children[0].is_text());
    }

    #[test]
    fn test_parse_document_recovers_fragment() {
        // html5ever wraps bare fragments in html/head/body
        let root = parse_document("<div>loose</div>");
        assert_eq!(root.tag, "html");
    }

    #[test]
    fn test_parse_document_drops_comments() {
        let root = parse_document("<html><body><!-- hidden --><p>ok</p></body></html>");
        let body = root.children.iter().find(|c| c.tag == "body").unwrap();
        assert!(body.children.iter().all(|c| c.tag == "p" || c.is_text()));
    }

    #[test]
    fn test_attr_missing() {
        let n = Node::element("a", &[("href", "/x")], vec![]);
        assert_eq!(n.attr("href"), Some("/x"));
        assert_eq!(n.attr("class"), None);
    }
}
