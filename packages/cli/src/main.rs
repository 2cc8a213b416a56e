mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, mentions, render, CheckArgs, MentionsArgs, RenderArgs};

/// Contractdoc CLI - render structured contract documents to HTML
#[derive(Parser, Debug)]
#[command(name = "contractdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a contract document to HTML
    Render(RenderArgs),

    /// List the mention variables seeded from a document
    Mentions(MentionsArgs),

    /// Validate that a document parses and report its shape
    Check(CheckArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Mentions(args) => mentions(args),
        Command::Check(args) => check(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
