use contractdoc_document::Marks;

use crate::vdom::VNode;

/// Wrap already-rendered content in semantic emphasis elements.
///
/// The nesting order is fixed: bold wraps first (innermost), italic next,
/// underline last (outermost). Downstream consumers assert on this order.
/// With no marks set the content is returned unchanged.
pub fn apply_marks(content: Vec<VNode>, marks: &Marks) -> Vec<VNode> {
    let mut wrapped = content;
    if marks.bold {
        wrapped = vec![VNode::element("strong").with_children(wrapped)];
    }
    if marks.italic {
        wrapped = vec![VNode::element("em").with_children(wrapped)];
    }
    if marks.underline {
        wrapped = vec![VNode::element("u").with_children(wrapped)];
    }
    wrapped
}

/// Single-node form of [`apply_marks`], same fixed wrapper order
pub fn apply_marks_one(content: VNode, marks: &Marks) -> VNode {
    let mut wrapped = content;
    if marks.bold {
        wrapped = VNode::element("strong").with_child(wrapped);
    }
    if marks.italic {
        wrapped = VNode::element("em").with_child(wrapped);
    }
    if marks.underline {
        wrapped = VNode::element("u").with_child(wrapped);
    }
    wrapped
}
