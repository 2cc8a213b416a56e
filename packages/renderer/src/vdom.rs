use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Styled output node, ready for a presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// Container element
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        styles: HashMap<String, String>,
        children: Vec<VNode>,
    },

    /// Literal text
    Text { content: String },

    /// Live edit affordance for an editable mention. The host wires its
    /// change event to `ContractRenderer::update_mention`.
    Input {
        mention_id: String,
        value: String,
        styles: HashMap<String, String>,
    },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn input(mention_id: impl Into<String>, value: impl Into<String>) -> Self {
        VNode::Input {
            mention_id: mention_id.into(),
            value: value.into(),
            styles: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            VNode::Element { ref mut styles, .. } | VNode::Input { ref mut styles, .. } => {
                styles.insert(key.into(), value.into());
            }
            VNode::Text { .. } => {}
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, VNode::Text { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } | VNode::Input { styles, .. } => {
                styles.get(name).map(String::as_str)
            }
            VNode::Text { .. } => None,
        }
    }

    /// Children of an element, or an empty slice for leaves
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text content of the subtree; input values count as text
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Input { value, .. } => value.clone(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }
}

/// Collection of rendered root nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VirtualDocument {
    pub nodes: Vec<VNode>,
}

impl VirtualDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }
}
