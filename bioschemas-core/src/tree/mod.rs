//! Generic parsed-XML tree
//!
//! A record is represented the way common XML-to-object converters shape it:
//! attributes live under keys prefixed with [`ATTR_PREFIX`], element text under
//! [`TEXT_KEY`], and an element that occurs more than once under the same parent
//! becomes a list. Nothing about the cardinality of a given element is known in
//! advance, so every accessor here is total and the mappers normalize with
//! [`Node::as_list`] wherever an element may repeat.

use std::collections::BTreeMap;
use std::fmt;
use std::result;
use std::slice;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

mod reader;

pub use reader::{parse_xml, strip_inline_formatting};

/// Key prefix under which element attributes are stored
pub const ATTR_PREFIX: &str = "@_";

/// Key under which the text content of a non-leaf element is stored
pub const TEXT_KEY: &str = "#text";

/// A node of the parsed record tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text-only element or text value
    Text(String),
    /// Element with attributes and/or children
    Map(BTreeMap<String, Node>),
    /// Repeated sibling elements sharing one name
    List(Vec<Node>),
}

impl Node {
    /// Create a text node
    pub fn text_node(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// View this node as a sequence.
    ///
    /// A list yields its elements; any other node yields itself as a
    /// one-element sequence.
    pub fn as_list(&self) -> &[Node] {
        match self {
            Node::List(items) => items,
            other => slice::from_ref(other),
        }
    }

    /// Child element by name. Lists and text have no children.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Walk a path of child names from this node
    pub fn path(&self, keys: &[&str]) -> Option<&Node> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Attribute value by its bare name (e.g. `"pub-id-type"`)
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self.get(&format!("{ATTR_PREFIX}{name}"))? {
            Node::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The node's own text content.
    ///
    /// Text nodes return themselves; elements return their [`TEXT_KEY`] entry.
    /// Lists have no text of their own.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text(value) => Some(value),
            Node::Map(map) => match map.get(TEXT_KEY) {
                Some(Node::Text(value)) => Some(value),
                _ => None,
            },
            Node::List(_) => None,
        }
    }

    /// Text of a child element, if both exist
    pub fn child_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::text)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Append a child under `key`, turning a repeated key into a list
    pub(crate) fn push_child(map: &mut BTreeMap<String, Node>, key: String, child: Node) {
        match map.remove(&key) {
            None => {
                map.insert(key, child);
            }
            Some(Node::List(mut items)) => {
                items.push(child);
                map.insert(key, Node::List(items));
            }
            Some(existing) => {
                map.insert(key, Node::List(vec![existing, child]));
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Text(value) => serializer.serialize_str(value),
            Node::Map(map) => serializer.collect_map(map),
            Node::List(items) => serializer.collect_seq(items),
        }
    }
}

/// Accepts any JSON-like value. Scalars other than strings are coerced to text,
/// since converters that guess value types emit numeric years and page numbers.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> result::Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, boolean, object or array")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value))
            }

            fn visit_bool<E>(self, value: bool) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(value.to_string()))
            }

            // null marks an empty element
            fn visit_unit<E>(self) -> result::Result<Node, E>
            where
                E: de::Error,
            {
                Ok(Node::Text(String::new()))
            }

            fn visit_seq<A>(self, mut seq: A) -> result::Result<Node, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<Node>()? {
                    items.push(item);
                }
                Ok(Node::List(items))
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<Node, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut children = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    children.insert(key, value);
                }
                Ok(Node::Map(children))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}
