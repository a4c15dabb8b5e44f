//! `omfl` CLI: validate and query OMFL configuration files.
//!
//! ## Usage
//!
//! ```sh
//! # Check that a file parses cleanly
//! omfl check weather.omfl
//!
//! # Read a value by dotted path
//! omfl get weather.omfl location.city
//!
//! # Index into an array, with a fallback for missing values
//! omfl get weather.omfl display.columns --index 2 --default "-"
//!
//! # Show the kind of a node, or list a section's keys
//! omfl kind weather.omfl location
//! omfl keys weather.omfl location
//!
//! # Read the document from stdin
//! cat weather.omfl | omfl keys -
//! ```

use std::io;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use omfl_core::{Document, Node, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "omfl", version, about = "OMFL configuration file tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report whether it is valid
    Check {
        /// Input file ("-" reads from stdin)
        file: String,
    },
    /// Print the value at a dotted path
    Get {
        /// Input file ("-" reads from stdin)
        file: String,
        /// Dotted path, e.g. `location.city`
        path: String,
        /// Array index to apply after the lookup (repeatable for nested arrays)
        #[arg(short, long)]
        index: Vec<usize>,
        /// Printed instead of failing when the key is missing or past the end
        #[arg(short, long)]
        default: Option<String>,
        /// Query whatever was parsed before a syntax error
        #[arg(long)]
        lenient: bool,
    },
    /// Print the kind of the node at a dotted path
    Kind {
        /// Input file ("-" reads from stdin)
        file: String,
        /// Dotted path, e.g. `location`
        path: String,
    },
    /// List the keys of a section (the root section if PATH is omitted)
    Keys {
        /// Input file ("-" reads from stdin)
        file: String,
        /// Dotted path of a section
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check { file } => {
            let doc = load(&file)?;
            match doc.error() {
                None => println!("ok"),
                Some(err) => {
                    eprintln!("{file}: {err}");
                    process::exit(1);
                }
            }
        }
        Commands::Get {
            file,
            path,
            index,
            default,
            lenient,
        } => {
            let doc = load_valid(&file, lenient)?;
            match (resolve(&doc, &path, &index), default) {
                (Ok(node), _) if !node.is_undefined() => println!("{}", render(node)?),
                (_, Some(fallback)) => println!("{fallback}"),
                (Ok(_), None) => bail!("'{path}' has no element at index {index:?}"),
                (Err(err), None) => return Err(err),
            }
        }
        Commands::Kind { file, path } => {
            let doc = load(&file)?;
            let node = doc
                .get(&path)
                .with_context(|| format!("Failed to look up '{path}'"))?;
            println!("{}", node.kind());
        }
        Commands::Keys { file, path } => {
            let doc = load(&file)?;
            let section = match path.as_deref() {
                Some(path) => doc
                    .get(path)
                    .with_context(|| format!("Failed to look up '{path}'"))?,
                None => doc.root(),
            };
            if !section.is_section() {
                bail!("'{}' is a {}, not a section", section.key(), section.kind());
            }
            for key in section.keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "omfl_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Parse `file`, or stdin when `file` is `-`.
fn load(file: &str) -> Result<Document> {
    if file == "-" {
        omfl_core::parse_reader(io::stdin().lock()).context("Failed to read from stdin")
    } else {
        omfl_core::parse_file(file).with_context(|| format!("Failed to read file: {file}"))
    }
}

/// Like [`load`], but refuse an invalid document unless `lenient` is set.
fn load_valid(file: &str, lenient: bool) -> Result<Document> {
    let doc = load(file)?;
    if let Some(err) = doc.error() {
        if !lenient {
            bail!("{file} is not valid OMFL ({err})");
        }
        tracing::warn!(%err, "querying a partially parsed document");
    }
    Ok(doc)
}

fn resolve<'a>(doc: &'a Document, path: &str, index: &[usize]) -> Result<&'a Node> {
    let mut node = doc
        .get(path)
        .with_context(|| format!("Failed to look up '{path}'"))?;
    for &i in index {
        node = node
            .at(i)
            .with_context(|| format!("Failed to index '{path}' at {i}"))?;
    }
    Ok(node)
}

/// Render a leaf for display. Strings print bare at the top level and quoted
/// inside arrays.
fn render(node: &Node) -> Result<String> {
    Ok(match node.value() {
        Value::String(s) => s.clone(),
        Value::Section(_) => bail!(
            "'{}' is a section; use `omfl keys` to list it",
            node.key()
        ),
        _ => render_element(node),
    })
}

fn render_element(node: &Node) -> String {
    match node.value() {
        Value::Undefined => "undefined".to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => format!("{f:?}"),
        Value::String(s) => format!("\"{s}\""),
        Value::Boolean(b) => b.to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render_element).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Section(children) => format!("<section of {}>", children.len()),
    }
}
