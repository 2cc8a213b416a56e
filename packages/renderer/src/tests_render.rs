//! Dispatcher behavior tests: the type -> rule table, the paragraph
//! nesting fallback, clause depth scoping, and graceful fallbacks for
//! malformed input.
use contractdoc_document::parse_document;

use crate::renderer::ContractRenderer;
use crate::vdom::VNode;

fn render(source: &str) -> Vec<VNode> {
    let nodes = parse_document(source).expect("Failed to parse");
    ContractRenderer::new(nodes).render().nodes
}

#[test]
fn test_empty_document_renders_nothing() {
    let renderer = ContractRenderer::new(Vec::new());
    assert!(renderer.render().nodes.is_empty());
    assert!(renderer.mentions().is_empty());
}

#[test]
fn test_standard_element_table() {
    let cases = [
        (r#"[{"type": "block", "children": []}]"#, "div", "contract-block"),
        (r#"[{"type": "h1", "children": []}]"#, "h1", "contract-title"),
        (r#"[{"type": "h4", "children": []}]"#, "h4", "contract-subtitle"),
        (r#"[{"type": "p", "children": []}]"#, "p", "contract-text"),
        (r#"[{"type": "ul", "children": []}]"#, "ul", "contract-list"),
        (r#"[{"type": "li", "children": []}]"#, "li", "contract-list-item"),
        (r#"[{"type": "lic", "children": []}]"#, "div", "contract-list-content"),
    ];

    for (source, tag, class) in cases {
        let nodes = render(source);
        assert_eq!(nodes.len(), 1, "source: {source}");
        assert_eq!(nodes[0].tag(), Some(tag), "source: {source}");
        assert_eq!(nodes[0].attr("class"), Some(class), "source: {source}");
    }
}

#[test]
fn test_unknown_type_falls_back_to_generic_container() {
    let nodes = render(r#"[{"type": "callout", "children": [{"text": "hi"}]}]"#);
    assert_eq!(nodes[0].tag(), Some("div"));
    assert_eq!(nodes[0].attr("class"), Some("contract-element-callout"));
    assert_eq!(nodes[0].text_content(), "hi");
}

#[test]
fn test_malformed_node_renders_without_error() {
    // Neither `text` nor `type`: classified as an element and rendered
    // through the fallback rule
    let nodes = render(r#"[{"bold": true}]"#);
    assert_eq!(nodes[0].tag(), Some("div"));
    assert_eq!(nodes[0].attr("class"), Some("contract-element-unknown"));
}

#[test]
fn test_paragraph_inside_paragraph_renders_inline() {
    let nodes = render(
        r#"[{"type": "p", "children": [
              {"text": "outer "},
              {"type": "p", "children": [{"text": "inner"}]}
            ]}]"#,
    );

    let outer = &nodes[0];
    assert_eq!(outer.tag(), Some("p"));

    let nested = &outer.children()[1];
    assert_eq!(nested.tag(), Some("span"));
    assert_eq!(nested.attr("class"), Some("contract-text-inline"));
    assert_eq!(nested.text_content(), "inner");
}

#[test]
fn test_top_level_paragraph_is_a_block() {
    let nodes = render(r#"[{"type": "p", "children": [{"text": "solo"}]}]"#);
    assert_eq!(nodes[0].tag(), Some("p"));
    assert_eq!(nodes[0].attr("class"), Some("contract-text"));
}

#[test]
fn test_clause_tagged_with_parent_depth() {
    let nodes = render(
        r#"[{"type": "clause", "children": [
              {"type": "clause", "children": [
                {"type": "clause", "children": []}
              ]}
            ]}]"#,
    );

    let outer = &nodes[0];
    assert_eq!(outer.tag(), Some("section"));
    assert_eq!(outer.attr("class"), Some("contract-clause"));
    assert_eq!(outer.attr("data-depth"), Some("0"));

    let middle = &outer.children()[0];
    assert_eq!(middle.attr("data-depth"), Some("1"));

    let inner = &middle.children()[0];
    assert_eq!(inner.attr("data-depth"), Some("2"));
}

#[test]
fn test_sibling_clauses_have_independent_depth() {
    let nodes = render(
        r#"[{"type": "clause", "children": [
              {"type": "clause", "children": []},
              {"type": "clause", "children": []}
            ]},
            {"type": "clause", "children": []}]"#,
    );

    // Both top-level clauses observe depth 0 regardless of subtree size
    assert_eq!(nodes[0].attr("data-depth"), Some("0"));
    assert_eq!(nodes[1].attr("data-depth"), Some("0"));

    // Both nested siblings observe depth 1, independently
    assert_eq!(nodes[0].children()[0].attr("data-depth"), Some("1"));
    assert_eq!(nodes[0].children()[1].attr("data-depth"), Some("1"));
}

#[test]
fn test_element_marks_wrap_assembled_children() {
    let nodes = render(
        r#"[{"type": "block", "bold": true, "children": [
              {"text": "a"}, {"text": "b"}
            ]}]"#,
    );

    let block = &nodes[0];
    assert_eq!(block.tag(), Some("div"));
    // One strong wrapper around both children, not one per child
    assert_eq!(block.children().len(), 1);
    let strong = &block.children()[0];
    assert_eq!(strong.tag(), Some("strong"));
    assert_eq!(strong.children().len(), 2);
}

#[test]
fn test_text_node_mark_nesting_order() {
    let nodes = render(r#"[{"text": "x", "bold": true, "italic": true, "underline": true}]"#);

    let outer = &nodes[0];
    assert_eq!(outer.tag(), Some("u"));
    let middle = &outer.children()[0];
    assert_eq!(middle.tag(), Some("em"));
    let inner = &middle.children()[0];
    assert_eq!(inner.tag(), Some("strong"));
    assert_eq!(inner.children()[0].tag(), Some("span"));
}

#[test]
fn test_text_node_color_and_newlines() {
    let nodes = render(r##"[{"text": "line one\nline two", "color": "#336"}]"##);
    let span = &nodes[0];
    assert_eq!(span.tag(), Some("span"));
    assert_eq!(span.style("color"), Some("#336"));
    assert_eq!(span.style("white-space"), Some("pre-wrap"));
}

#[test]
fn test_text_node_children_render_after_text_inside_marks() {
    let nodes = render(
        r#"[{"text": "lead ", "bold": true, "children": [{"text": "trail"}]}]"#,
    );

    let strong = &nodes[0];
    assert_eq!(strong.tag(), Some("strong"));
    let span = &strong.children()[0];
    assert_eq!(span.tag(), Some("span"));
    assert_eq!(span.children().len(), 2);
    assert_eq!(span.text_content(), "lead trail");
}

#[test]
fn test_element_text_fallback_when_children_absent() {
    let nodes = render(r#"[{"type": "p", "children": [], "text": "fallback"}]"#);
    let p = &nodes[0];
    let leaf = &p.children()[0];
    assert_eq!(leaf.tag(), Some("span"));
    assert_eq!(leaf.attr("class"), Some("element-text"));
    assert_eq!(leaf.text_content(), "fallback");
}

#[test]
fn test_nested_list_structure() {
    let nodes = render(
        r#"[{"type": "ul", "children": [
              {"type": "li", "children": [
                {"type": "lic", "children": [{"text": "item one"}]}
              ]}
            ]}]"#,
    );

    let ul = &nodes[0];
    assert_eq!(ul.tag(), Some("ul"));
    let li = &ul.children()[0];
    assert_eq!(li.tag(), Some("li"));
    let lic = &li.children()[0];
    assert_eq!(lic.attr("class"), Some("contract-list-content"));
    assert_eq!(lic.text_content(), "item one");
}
