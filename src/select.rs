//! Traversal primitives over the owned document tree.
//!
//! Three pre-order walks are enough to express every extraction rule the site
//! adapters need: match by attribute token, match by tag name, and flatten a
//! subtree to its text. The engine knows nothing about any particular site;
//! class names and structural assumptions live in the adapters.
//!
//! A query that matches nothing returns an empty vector, never an error.
//! Callers treat "no match" as an expected outcome.

use crate::dom::Node;

/// Whether `attr` on this node, read as a whitespace-separated token list,
/// contains `token` exactly. A missing attribute is simply `false`.
///
/// This is the class-matching test: `class="a b c"` contains the tokens
/// `a`, `b`, and `c`, but not `a b` or any substring.
pub fn has_attr_token(node: &Node, attr: &str, token: &str) -> bool {
    node.attr(attr)
        .map(|value| value.split_whitespace().any(|t| t == token))
        .unwrap_or(false)
}

/// All descendants of `root` (inclusive), in document order, whose `attr`
/// value contains `token` as an exact whitespace-separated token.
pub fn find_by_attr_token<'a>(root: &'a Node, attr: &str, token: &str) -> Vec<&'a Node> {
    let mut matches = Vec::new();
    walk_attr_token(root, attr, token, &mut matches);
    matches
}

fn walk_attr_token<'a>(node: &'a Node, attr: &str, token: &str, out: &mut Vec<&'a Node>) {
    if has_attr_token(node, attr, token) {
        out.push(node);
    }
    for child in &node.children {
        walk_attr_token(child, attr, token, out);
    }
}

/// All descendants of `root` (inclusive), in document order, whose tag name
/// equals `tag` exactly. Text leaves never match.
pub fn find_by_tag<'a>(root: &'a Node, tag: &str) -> Vec<&'a Node> {
    let mut matches = Vec::new();
    walk_tag(root, tag, &mut matches);
    matches
}

fn walk_tag<'a>(node: &'a Node, tag: &str, out: &mut Vec<&'a Node>) {
    if !node.is_text() && node.tag == tag {
        out.push(node);
    }
    for child in &node.children {
        walk_tag(child, tag, out);
    }
}

/// Concatenation, in document order, of every text-leaf payload in the
/// subtree rooted at `root`. Elements contribute nothing directly, only
/// through their children; markup structure is discarded, reading order kept.
pub fn collect_text(root: &Node) -> String {
    let mut text = String::new();
    append_text(root, &mut text);
    text
}

fn append_text(node: &Node, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text);
        return;
    }
    for child in &node.children {
        append_text(child, out);
    }
}
