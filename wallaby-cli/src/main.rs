//! Wallaby CLI
//!
//! Reads a renderer node as JSON and prints it with its `style` prop
//! converted to inline CSS.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use wallaby_common::warning::QUIET_ENV;
use wallaby_style::{
    Node, Style, map_style_prop, map_style_tree, parse_node, try_map_style_prop,
    try_map_style_tree,
};

/// Wallaby: convert style props on renderer nodes into inline CSS
#[derive(Parser, Debug)]
#[command(name = "wallaby")]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!(r#"EXAMPLES:
    # Map the root node of a JSON file
    wallaby node.json

    # Map every node in the tree, reading from stdin
    cat tree.json | wallaby --tree

    # Print only the resulting CSS
    wallaby --format css --json '{{"props": {{"style": [{{"flex": 1}}, {{"fontSize": 12}}]}}}}'

ENVIRONMENT:
    {QUIET_ENV}    Silence fallback warnings
"#))]
struct Cli {
    /// JSON file holding a node (`-` or omitted reads stdin)
    #[arg(value_name = "FILE", conflicts_with = "json")]
    path: Option<PathBuf>,

    /// Inline JSON node
    #[arg(long, value_name = "JSON")]
    json: Option<String>,

    /// Fail on malformed styles instead of falling back
    #[arg(long)]
    strict: bool,

    /// Map every node in the tree, not just the root
    #[arg(long)]
    tree: bool,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

/// Output rendering for the mapped node.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Pretty-printed JSON node
    Pretty,
    /// Single-line JSON node
    Compact,
    /// Only the root's inline CSS
    Css,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = read_source(&cli)?;
    let node = parse_node(&source).context("Failed to parse node JSON")?;
    let node = map_node(&cli, node)?;

    match cli.format {
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&node)?),
        OutputFormat::Compact => println!("{}", serde_json::to_string(&node)?),
        OutputFormat::Css => println!("{}", root_css(&node)),
    }
    Ok(())
}

/// Read the node JSON from `--json`, a file, or stdin.
fn read_source(cli: &Cli) -> Result<String> {
    if let Some(ref json) = cli.json {
        return Ok(json.clone());
    }
    match cli.path {
        Some(ref path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut source = String::new();
            let _ = io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Run the permissive or strict pipeline over the root or the whole tree.
fn map_node(cli: &Cli, node: Node) -> Result<Node> {
    let mapped = match (cli.strict, cli.tree) {
        (false, false) => map_style_prop(node),
        (false, true) => map_style_tree(node),
        (true, false) => try_map_style_prop(node).context("Rejected style")?,
        (true, true) => try_map_style_tree(node).context("Rejected style")?,
    };
    Ok(mapped)
}

/// The root node's inline CSS, or an empty string when it has none.
fn root_css(node: &Node) -> String {
    match node.style() {
        Some(Style::Inline(css)) => css.clone(),
        Some(Style::Raw(_)) | None => {
            eprintln!("{}", "node has no style prop".dimmed());
            String::new()
        }
    }
}
