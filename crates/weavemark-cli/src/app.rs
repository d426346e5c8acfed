//! CLI application logic
//!
//! Commands consume serialized ASTs (the format external parsers and
//! extractors emit) and produce the derived render-tree as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use weavemark_ast::summary::ModuleSummary;
use weavemark_html::{
    BlockTemplate, DocumentCollection, ModuleTemplate, TargetResolver, TemplateNode,
    TransformContext,
};

#[derive(Parser)]
#[command(name = "weavemark")]
#[command(author, version, about = "Structured documents in, render-trees out", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Templatify a markup AST document (JSON) into a render-tree
    Markup {
        /// Input AST file
        input: PathBuf,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the render-tree JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Templatify a documentation-summary tree (JSON) into a render-tree
    Summary {
        /// Input summary file
        input: PathBuf,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the render-tree JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Resolver used when no link registry is available: link values resolve
/// to their raw token.
fn passthrough_resolver() -> TargetResolver {
    Box::new(|value| value.value_text())
}

/// Run the markup command.
pub fn markup_command(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let collection: DocumentCollection<String> = DocumentCollection::new(passthrough_resolver());
    let document = collection
        .preprocess(&text, &TransformContext::None)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let template = BlockTemplate::from_document(&document, &collection)
        .context("failed to templatify document")?;

    emit(&TemplateNode::Block(Box::new(template)), output, pretty)
}

/// Run the summary command.
pub fn summary_command(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let module: ModuleSummary = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let collection: DocumentCollection<String> = DocumentCollection::new(passthrough_resolver());
    let template = ModuleTemplate::from_summary(&module, &collection)
        .context("failed to templatify summary")?;

    emit(&TemplateNode::Module(Box::new(template)), output, pretty)
}

fn emit(tree: &TemplateNode, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "render-tree written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// CLI entry point.
pub fn run_cli() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Markup {
            input,
            output,
            pretty,
        } => markup_command(&input, output.as_deref(), pretty),
        Commands::Summary {
            input,
            output,
            pretty,
        } => summary_command(&input, output.as_deref(), pretty),
    }
}
