//! Paragraph text flattening

use crate::tree::Node;

/// Key of a nested paragraph element
const PARAGRAPH_KEY: &str = "p";

/// Collapse a text-bearing node into flat text.
///
/// Every piece of text found is followed by a single space, so consecutive
/// calls can be concatenated directly. Missing or empty text contributes
/// nothing.
///
/// - text: the text itself
/// - list: each element's own text, in order
/// - element with a nested `p`: that paragraph's text
/// - any other element: its own text
pub fn normalize_text(node: Option<&Node>) -> String {
    let mut out = String::new();
    let Some(node) = node else {
        return out;
    };

    match node {
        Node::Text(_) => push_text(&mut out, node.text()),
        Node::List(items) => {
            for item in items {
                push_text(&mut out, item.text());
            }
        }
        Node::Map(_) => match node.get(PARAGRAPH_KEY) {
            Some(paragraph) => out.push_str(&normalize_text(Some(paragraph))),
            None => push_text(&mut out, node.text()),
        },
    }

    out
}

fn push_text(out: &mut String, text: Option<&str>) {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        out.push_str(text);
        out.push(' ');
    }
}
