use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use contractdoc_document::parse_document;
use contractdoc_renderer::MentionStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MentionsArgs {
    /// Contract document (JSON array of nodes)
    pub input: PathBuf,
}

pub fn mentions(args: MentionsArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read {}", args.input.display()))?;
    let nodes = parse_document(&source)
        .with_context(|| format!("Cannot parse {}", args.input.display()))?;

    let store = MentionStore::seed(&nodes);

    if store.is_empty() {
        println!("{}", "No mentions found".yellow());
        return Ok(());
    }

    println!("{} mention(s):", store.len());
    let mut ids: Vec<&String> = store.values().keys().collect();
    ids.sort();
    for id in ids {
        let value = store.get(id).unwrap_or_default();
        println!("  {} {} = {}", "•".green(), id.bold(), value);
    }

    Ok(())
}
