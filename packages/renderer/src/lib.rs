pub mod context;
pub mod marks;
pub mod mentions;
pub mod renderer;
pub mod vdom;


#[cfg(test)]
mod tests_render;

pub use context::RenderContext;
pub use marks::{apply_marks, apply_marks_one};
pub use mentions::MentionStore;
pub use renderer::{render_nodes, ContractRenderer};
pub use vdom::{VNode, VirtualDocument};
