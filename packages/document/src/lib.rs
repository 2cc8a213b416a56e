pub mod error;
pub mod node;

pub use error::DocumentError;
pub use node::{
    parse_document, to_json, ContractNode, ElementKind, ElementNode, Marks, TextNode,
};
