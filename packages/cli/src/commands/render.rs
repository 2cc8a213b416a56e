use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use contractdoc_compiler_html::{compile_fragment, compile_to_html, CompileOptions};
use contractdoc_document::parse_document;
use contractdoc_renderer::ContractRenderer;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Contract document (JSON array of nodes)
    pub input: PathBuf,

    /// Output file (defaults to the input path with an .html extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit only the rendered nodes, without the page shell
    #[arg(long)]
    pub fragment: bool,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Page title for the document head
    #[arg(long, default_value = "Contract")]
    pub title: String,

    /// Stylesheet href added to the page head
    #[arg(long)]
    pub stylesheet: Option<String>,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let nodes = parse_document(&source)
        .with_context(|| format!("Cannot parse {}", args.input.display()))?;

    let renderer = ContractRenderer::new(nodes);
    let vdoc = renderer.render();

    let options = CompileOptions {
        title: args.title.clone(),
        stylesheet: args.stylesheet.clone(),
        ..CompileOptions::default()
    };
    let html = if args.fragment {
        compile_fragment(&vdoc, options)?
    } else {
        compile_to_html(&vdoc, options)?
    };

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));
    fs::write(&out, html).with_context(|| format!("Cannot write {}", out.display()))?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.input.display(),
        out.display()
    );
    Ok(())
}
