pub mod compiler;


pub use compiler::{compile_fragment, compile_to_html, CompileError, CompileOptions};
