use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use contractdoc_document::{ContractNode, parse_document};
use contractdoc_renderer::MentionStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Contract document (JSON array of nodes)
    pub input: PathBuf,
}

fn count_nodes(nodes: &[ContractNode]) -> (usize, usize) {
    let mut total = 0;
    let mut text = 0;
    for node in nodes {
        total += 1;
        if node.is_text() {
            text += 1;
        }
        let (t, x) = count_nodes(node.children());
        total += t;
        text += x;
    }
    (total, text)
}

pub fn check(args: CheckArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let nodes = parse_document(&source)
        .with_context(|| format!("Invalid document: {}", args.input.display()))?;

    let (total, text) = count_nodes(&nodes);
    let store = MentionStore::seed(&nodes);

    println!("{} {}", "✓".green(), args.input.display());
    println!("  {} top-level node(s)", nodes.len());
    println!("  {} node(s) total ({} text, {} element)", total, text, total - text);
    println!("  {} mention variable(s)", store.len());

    Ok(())
}
