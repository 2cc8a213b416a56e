use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DocumentError;

/// Boolean style attributes attached to a node.
///
/// Marks govern the entire rendered subtree of the node that carries them,
/// not just its literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Marks {
    pub const NONE: Marks = Marks {
        bold: false,
        italic: false,
        underline: false,
    };

    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.underline
    }
}

/// Element type tag (closed set plus a forward-compatible fallback)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Block,
    H1,
    H4,
    P,
    Ul,
    Li,
    Lic,
    Clause,
    Mention,
    /// Unrecognized tag, preserved verbatim so the renderer can fall back
    /// to a generic container
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Block => "block",
            ElementKind::H1 => "h1",
            ElementKind::H4 => "h4",
            ElementKind::P => "p",
            ElementKind::Ul => "ul",
            ElementKind::Li => "li",
            ElementKind::Lic => "lic",
            ElementKind::Clause => "clause",
            ElementKind::Mention => "mention",
            ElementKind::Other(s) => s,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(s: &str) -> Self {
        match s {
            "block" => ElementKind::Block,
            "h1" => ElementKind::H1,
            "h4" => ElementKind::H4,
            "p" => ElementKind::P,
            "ul" => ElementKind::Ul,
            "li" => ElementKind::Li,
            "lic" => ElementKind::Lic,
            "clause" => ElementKind::Clause,
            "mention" => ElementKind::Mention,
            other => ElementKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementKind::from(s.as_str()))
    }
}

/// Leaf prose node
///
/// Children, when present, are rendered after the text inside the same mark
/// wrappers as the text itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextNode {
    pub text: String,
    pub marks: Marks,
    pub color: Option<String>,
    pub children: Vec<ContractNode>,
}

/// Structural node (heading, paragraph, list, clause, mention, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub kind: ElementKind,
    pub children: Vec<ContractNode>,
    /// Fallback leaf content used when `children` is empty
    pub text: Option<String>,
    pub marks: Marks,
    pub color: Option<String>,
    /// Mention identifier; mentions sharing an id are the same logical variable
    pub id: Option<String>,
    /// Literal mention value as authored in the document
    pub value: Option<String>,
    pub title: Option<String>,
    pub variable_type: Option<String>,
}

impl ElementNode {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            text: None,
            marks: Marks::NONE,
            color: None,
            id: None,
            value: None,
            title: None,
            variable_type: None,
        }
    }
}

/// Universal contract node: either prose or a typed element.
///
/// The wire shape is duck-typed: a node is a text node iff it carries a
/// `text` key and no `type` key. The classification happens once, at the
/// serde boundary, so every consumer works with an explicit sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractNode {
    Text(TextNode),
    Element(ElementNode),
}

impl ContractNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContractNode::Text(TextNode {
            text: text.into(),
            ..TextNode::default()
        })
    }

    pub fn element(kind: ElementKind) -> Self {
        ContractNode::Element(ElementNode::new(kind))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContractNode::Text(_))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            ContractNode::Text(t) => Some(t),
            ContractNode::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            ContractNode::Element(e) => Some(e),
            ContractNode::Text(_) => None,
        }
    }

    /// Child nodes, for either variant
    pub fn children(&self) -> &[ContractNode] {
        match self {
            ContractNode::Text(t) => &t.children,
            ContractNode::Element(e) => &e.children,
        }
    }
}

/// Wire-level node shape with every key optional.
///
/// Used internally by the serde implementations; classification into the two
/// `ContractNode` variants happens in `From<RawNode>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RawNode {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<ElementKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<ContractNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "variableType", skip_serializing_if = "Option::is_none")]
    variable_type: Option<String>,
}

impl RawNode {
    fn marks(&self) -> Marks {
        Marks {
            bold: self.bold.unwrap_or(false),
            italic: self.italic.unwrap_or(false),
            underline: self.underline.unwrap_or(false),
        }
    }
}

impl From<RawNode> for ContractNode {
    fn from(raw: RawNode) -> Self {
        // Discrimination rule: `text` present and `type` absent means prose.
        // Everything else, including nodes with neither key, is an element;
        // the untyped case renders through the dispatcher fallback.
        let is_text = raw.text.is_some() && raw.kind.is_none();
        let marks = raw.marks();

        if is_text {
            ContractNode::Text(TextNode {
                text: raw.text.unwrap_or_default(),
                marks,
                color: raw.color,
                children: raw.children.unwrap_or_default(),
            })
        } else {
            ContractNode::Element(ElementNode {
                kind: raw
                    .kind
                    .unwrap_or_else(|| ElementKind::Other("unknown".to_string())),
                children: raw.children.unwrap_or_default(),
                text: raw.text,
                marks,
                color: raw.color,
                id: raw.id,
                value: raw.value,
                title: raw.title,
                variable_type: raw.variable_type,
            })
        }
    }
}

fn mark_flag(set: bool) -> Option<bool> {
    if set {
        Some(true)
    } else {
        None
    }
}

impl From<&ContractNode> for RawNode {
    fn from(node: &ContractNode) -> Self {
        match node {
            ContractNode::Text(t) => RawNode {
                kind: None,
                text: Some(t.text.clone()),
                children: if t.children.is_empty() {
                    None
                } else {
                    Some(t.children.clone())
                },
                bold: mark_flag(t.marks.bold),
                italic: mark_flag(t.marks.italic),
                underline: mark_flag(t.marks.underline),
                color: t.color.clone(),
                ..RawNode::default()
            },
            ContractNode::Element(e) => RawNode {
                // Elements always serialize their `type` key, even empty
                // children, so the duck-typed variants stay distinguishable.
                kind: Some(e.kind.clone()),
                text: e.text.clone(),
                children: Some(e.children.clone()),
                bold: mark_flag(e.marks.bold),
                italic: mark_flag(e.marks.italic),
                underline: mark_flag(e.marks.underline),
                color: e.color.clone(),
                id: e.id.clone(),
                value: e.value.clone(),
                title: e.title.clone(),
                variable_type: e.variable_type.clone(),
            },
        }
    }
}

impl Serialize for ContractNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawNode::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContractNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawNode::deserialize(deserializer)?;
        Ok(ContractNode::from(raw))
    }
}

/// Parse a JSON array of contract nodes
pub fn parse_document(source: &str) -> Result<Vec<ContractNode>, DocumentError> {
    let nodes: Vec<ContractNode> = serde_json::from_str(source)?;
    Ok(nodes)
}

/// Serialize a document back to its duck-typed JSON shape
pub fn to_json(nodes: &[ContractNode], pretty: bool) -> Result<String, DocumentError> {
    let out = if pretty {
        serde_json::to_string_pretty(nodes)?
    } else {
        serde_json::to_string(nodes)?
    };
    Ok(out)
}
