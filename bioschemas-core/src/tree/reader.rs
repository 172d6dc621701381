//! Builds a [`Node`] tree from raw XML with `quick_xml::Reader`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;
use tracing::debug;

use super::{ATTR_PREFIX, Node, TEXT_KEY};
use crate::error::{MappingError, Result};

/// Strip inline formatting tags from JATS content.
///
/// Tags like `<italic>`, `<bold>`, `<sup>` and `<sub>` would otherwise split a
/// title or paragraph into a map of fragments. Their text is kept in place.
pub fn strip_inline_formatting(xml: &str) -> Cow<'_, str> {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(
            r"</?(?:italic|bold|underline|monospace|sc|sup|sub|i|b|u|em|strong)(?:\s[^>]*)?>",
        )
        .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if let Cow::Owned(ref s) = cleaned {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = s.len(),
            "Stripped inline formatting tags"
        );
    }

    cleaned
}

/// An element whose end tag has not been read yet
struct OpenElement {
    name: String,
    children: BTreeMap<String, Node>,
    text: Vec<String>,
}

impl OpenElement {
    fn from_start(e: &BytesStart) -> Result<Self> {
        let mut children = BTreeMap::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| MappingError::Xml(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref());
            let value = attr
                .unescape_value()
                .map_err(|err| MappingError::Xml(err.to_string()))?;
            children.insert(
                format!("{ATTR_PREFIX}{key}"),
                Node::Text(value.into_owned()),
            );
        }

        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            children,
            text: Vec::new(),
        })
    }

    fn push_text(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.text.push(trimmed.to_string());
        }
    }

    fn into_node(self) -> (String, Node) {
        let text = self.text.join(" ");
        let node = if self.children.is_empty() {
            Node::Text(text)
        } else {
            let mut children = self.children;
            if !text.is_empty() {
                children.insert(TEXT_KEY.to_string(), Node::Text(text));
            }
            Node::Map(children)
        };
        (self.name, node)
    }
}

/// Parse an XML document into a generic tree.
///
/// The returned node is a map holding the root element under its own name,
/// e.g. `{"OAI-PMH": {...}}`. Inline formatting is stripped first.
pub fn parse_xml(xml: &str) -> Result<Node> {
    let cleaned = strip_inline_formatting(xml);
    let mut reader = Reader::from_str(&cleaned);
    reader.config_mut().expand_empty_elements = true;

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<(String, Node)> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => stack.push(OpenElement::from_start(e)?),
            Ok(Event::Text(ref e)) => {
                if let Some(open) = stack.last_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| MappingError::Xml(err.to_string()))?;
                    open.push_text(&unescaped);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(open) = stack.last_mut() {
                    open.push_text(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                let Some(open) = stack.pop() else {
                    return Err(MappingError::Xml("unmatched end tag".to_string()));
                };
                let (name, node) = open.into_node();
                match stack.last_mut() {
                    Some(parent) => Node::push_child(&mut parent.children, name, node),
                    None if root.is_none() => root = Some((name, node)),
                    None => {
                        return Err(MappingError::Xml(
                            "multiple root elements".to_string(),
                        ));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MappingError::Xml(e.to_string())),
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(MappingError::Xml(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    let (name, node) =
        root.ok_or_else(|| MappingError::Xml("document has no root element".to_string()))?;
    Ok(Node::Map(BTreeMap::from([(name, node)])))
}
