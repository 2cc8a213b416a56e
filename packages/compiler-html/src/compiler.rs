use contractdoc_renderer::{VNode, VirtualDocument};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

impl From<&str> for CompileError {
    fn from(s: &str) -> Self {
        CompileError::Generic(s.to_string())
    }
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title for the document head
    pub title: String,
    /// Optional stylesheet href added to the head
    pub stylesheet: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "Contract".to_string(),
            stylesheet: None,
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered document to a full HTML page
pub fn compile_to_html(
    document: &VirtualDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    ctx.add_line("<div class=\"contract-renderer\">");
    ctx.indent();
    for node in &document.nodes {
        compile_node(node, &mut ctx)?;
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

/// Compile only the rendered nodes, without the page shell
pub fn compile_fragment(
    document: &VirtualDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    for node in &document.nodes {
        compile_node(node, &mut ctx)?;
    }
    Ok(ctx.get_output())
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = escape_html(&ctx.options.title);
    ctx.add_line(&format!("<title>{}</title>", title));

    if let Some(href) = ctx.options.stylesheet.clone() {
        ctx.add_line(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(&href)
        ));
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(node: &VNode, ctx: &mut Context) -> Result<(), CompileError> {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => compile_element(tag, attributes, styles, children, ctx),

        VNode::Text { content } => {
            if ctx.options.pretty {
                ctx.add_line(&escape_html(content));
            } else {
                ctx.add(&escape_html(content));
            }
            Ok(())
        }

        VNode::Input {
            mention_id,
            value,
            styles,
        } => {
            let mut line = String::from("<input");
            line.push_str(&format!(
                " value=\"{}\" data-mention-id=\"{}\"",
                escape_html(value),
                escape_html(mention_id)
            ));
            if !styles.is_empty() {
                line.push_str(&format!(" style=\"{}\"", style_string(styles)));
            }
            line.push_str(" />");
            if ctx.options.pretty {
                ctx.add_line(&line);
            } else {
                ctx.add(&line);
            }
            Ok(())
        }
    }
}

fn compile_element(
    tag: &str,
    attributes: &HashMap<String, String>,
    styles: &HashMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    // Attributes and styles emit in sorted key order so output is
    // deterministic across runs
    let mut attr_names: Vec<&String> = attributes.keys().collect();
    attr_names.sort();
    for name in attr_names {
        ctx.add(&format!(
            " {}=\"{}\"",
            name,
            escape_html(&attributes[name])
        ));
    }

    if !styles.is_empty() {
        ctx.add(&format!(" style=\"{}\"", style_string(styles)));
    }

    ctx.add(">");

    if !children.is_empty() {
        if ctx.options.pretty {
            ctx.add("\n");
        }
        ctx.indent();

        for child in children {
            compile_node(child, ctx)?;
        }

        ctx.dedent();
        if ctx.options.pretty {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", tag));
    if ctx.options.pretty {
        ctx.add("\n");
    }

    Ok(())
}

fn style_string(styles: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = styles.keys().collect();
    keys.sort();
    keys.iter()
        .map(|key| format!("{}: {};", key, escape_html(&styles[*key])))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
