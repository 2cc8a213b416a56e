use contractdoc_document::{ContractNode, ElementKind, ElementNode, TextNode};
use tracing::{debug, instrument};

use crate::context::RenderContext;
use crate::marks::{apply_marks, apply_marks_one};
use crate::mentions::MentionStore;
use crate::vdom::{VNode, VirtualDocument};

/// Stateful entry point owning the document and its mention store.
///
/// The store lives as long as the current document; replacing the document
/// re-seeds it and discards any runtime edits.
#[derive(Debug, Clone)]
pub struct ContractRenderer {
    document: Vec<ContractNode>,
    mentions: MentionStore,
}

impl ContractRenderer {
    pub fn new(document: Vec<ContractNode>) -> Self {
        let mentions = MentionStore::seed(&document);
        Self { document, mentions }
    }

    pub fn document(&self) -> &[ContractNode] {
        &self.document
    }

    pub fn mentions(&self) -> &MentionStore {
        &self.mentions
    }

    /// Edit hook exposed to the host. A single write here is reflected by
    /// every occurrence of the id on the next render pass.
    pub fn update_mention(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.mentions.update(id, value);
    }

    /// Replace the document wholesale. The store is fully re-seeded from
    /// the new tree's literal values; prior edits are discarded.
    pub fn set_document(&mut self, document: Vec<ContractNode>) {
        self.mentions = MentionStore::seed(&document);
        self.document = document;
    }

    /// Render the current document against a single consistent snapshot of
    /// the mention store.
    #[instrument(skip(self), fields(nodes = self.document.len()))]
    pub fn render(&self) -> VirtualDocument {
        let ctx = RenderContext::new(&self.mentions);
        let nodes = render_nodes(&self.document, ctx);
        debug!(rendered = nodes.len(), "Document render complete");
        VirtualDocument { nodes }
    }
}

/// Render a node sequence with the given ambient context
pub fn render_nodes(nodes: &[ContractNode], ctx: RenderContext) -> Vec<VNode> {
    nodes
        .iter()
        .map(|node| render_node(node, None, ctx))
        .collect()
}

fn render_nodes_with_parent(
    nodes: &[ContractNode],
    parent: &ElementKind,
    ctx: RenderContext,
) -> Vec<VNode> {
    nodes
        .iter()
        .map(|node| render_node(node, Some(parent), ctx))
        .collect()
}

fn render_node(node: &ContractNode, parent: Option<&ElementKind>, ctx: RenderContext) -> VNode {
    match node {
        ContractNode::Text(text) => render_text(text, ctx),
        ContractNode::Element(element) => render_element(element, parent, ctx),
    }
}

/// Prose leaf: literal text, then any nested children, inside one span that
/// carries the non-semantic styles. Marks wrap the whole assembled span.
fn render_text(node: &TextNode, ctx: RenderContext) -> VNode {
    let mut span = VNode::element("span");
    if let Some(color) = &node.color {
        span = span.with_style("color", color);
    }
    if node.text.contains('\n') {
        span = span.with_style("white-space", "pre-wrap");
    }

    span = span.with_child(VNode::text(&node.text));
    for child in &node.children {
        span = span.with_child(render_node(child, None, ctx));
    }

    apply_marks_one(span, &node.marks)
}

fn render_element(node: &ElementNode, parent: Option<&ElementKind>, ctx: RenderContext) -> VNode {
    match node.kind {
        ElementKind::Clause => render_clause(node, ctx),
        ElementKind::Mention => render_mention(node, ctx),
        _ => render_standard(node, parent, ctx),
    }
}

/// Children rendered depth-first, or the literal `text` field as a single
/// leaf when no children are present
fn render_element_children(node: &ElementNode, ctx: RenderContext) -> Vec<VNode> {
    if !node.children.is_empty() {
        return render_nodes_with_parent(&node.children, &node.kind, ctx);
    }
    if let Some(text) = &node.text {
        return vec![VNode::element("span")
            .with_attr("class", "element-text")
            .with_child(VNode::text(text))];
    }
    Vec::new()
}

fn render_standard(node: &ElementNode, parent: Option<&ElementKind>, ctx: RenderContext) -> VNode {
    let content = apply_marks(render_element_children(node, ctx), &node.marks);

    match &node.kind {
        ElementKind::Block => VNode::element("div")
            .with_attr("class", "contract-block")
            .with_children(content),
        ElementKind::H1 => VNode::element("h1")
            .with_attr("class", "contract-title")
            .with_children(content),
        ElementKind::H4 => VNode::element("h4")
            .with_attr("class", "contract-subtitle")
            .with_children(content),
        ElementKind::P => {
            // A paragraph nested in another paragraph renders inline to
            // avoid an invalid nested-paragraph structure
            if parent == Some(&ElementKind::P) {
                VNode::element("span")
                    .with_attr("class", "contract-text-inline")
                    .with_children(content)
            } else {
                VNode::element("p")
                    .with_attr("class", "contract-text")
                    .with_children(content)
            }
        }
        ElementKind::Ul => VNode::element("ul")
            .with_attr("class", "contract-list")
            .with_children(content),
        ElementKind::Li => VNode::element("li")
            .with_attr("class", "contract-list-item")
            .with_children(content),
        ElementKind::Lic => VNode::element("div")
            .with_attr("class", "contract-list-content")
            .with_children(content),
        // Clause and mention are dispatched before this point; anything
        // else is an unrecognized tag rendered as a generic container
        kind => VNode::element("div")
            .with_attr("class", format!("contract-element-{}", kind))
            .with_children(content),
    }
}

/// Nesting section. Renders its own depth attribute from the parent scope,
/// then establishes depth + 1 for its children only.
fn render_clause(node: &ElementNode, ctx: RenderContext) -> VNode {
    let content = render_nodes_with_parent(&node.children, &node.kind, ctx.enter_clause());

    VNode::element("section")
        .with_attr("class", "contract-clause")
        .with_attr("data-depth", ctx.clause_depth.to_string())
        .with_children(apply_marks(content, &node.marks))
}

fn mention_span(color: Option<&str>) -> VNode {
    let mut span = VNode::element("span").with_attr("class", "contract-mention");
    if let Some(color) = color {
        span = span.with_style("background-color", color);
    }
    span.with_style("color", "white")
        .with_style("padding", "2px 6px")
        .with_style("border-radius", "4px")
        .with_style("display", "inline-block")
}

/// Mention element. With a non-empty id it renders a live input bound to
/// the store; without one it degrades to a static styled span.
fn render_mention(node: &ElementNode, ctx: RenderContext) -> VNode {
    if let Some(id) = node.id.as_deref().filter(|id| !id.is_empty()) {
        let value = match ctx.mentions.get(id) {
            Some(stored) => stored.to_string(),
            None => node.value.clone().unwrap_or_default(),
        };

        let width = format!("{}ch", value.chars().count().max(1));
        let input = VNode::input(id, value)
            .with_style("width", width)
            .with_style("min-width", "20px");

        return mention_span(node.color.as_deref()).with_child(input);
    }

    // No id: static content, marks applied like any generic element
    let content = render_nodes_with_parent(&node.children, &node.kind, ctx);
    mention_span(node.color.as_deref()).with_children(apply_marks(content, &node.marks))
}
