//! `rbtree` — insert and erase keys, printing the tree after every step.
//!
//! Usage:
//!   rbtree [--insert 10,5,8] [--erase 5] [--format text|json|tree] [-v]
//!
//! With no arguments it replays the default demo sequence. Invariants are
//! checked after every step; a violation exits non-zero.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rbtree::{Key, RbTree};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEMO_INSERT: [Key; 10] = [10, 5, 8, 34, 67, 23, 156, 24, 2, 12];
const DEMO_ERASE: [Key; 4] = [2, 156, 24, 10];
const SEPARATOR: &str = "===========================";

#[derive(Parser, Debug)]
#[command(name = "rbtree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to insert, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = DEMO_INSERT)]
    insert: Vec<Key>,

    /// Keys to erase after all inserts, in order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = DEMO_ERASE)]
    erase: Vec<Key>,

    /// Output format for each step
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `key: K, color: C` per node, in order
    Text,
    /// Nested JSON snapshot
    Json,
    /// Indented tree shape
    Tree,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::TRACE } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut tree = RbTree::new();
    for &key in &cli.insert {
        tree.insert(key);
        check(&tree).with_context(|| format!("after insert({key})"))?;
    }
    render(&tree, cli.format)?;

    for &key in &cli.erase {
        println!("{SEPARATOR}");
        match tree.find(key) {
            Some(id) => {
                tree.erase(id)?;
                check(&tree).with_context(|| format!("after erase({key})"))?;
            }
            None => eprintln!("cannot find a node with given value {key}"),
        }
        render(&tree, cli.format)?;
    }

    tracing::info!(len = tree.len(), height = tree.height(), "done");
    Ok(())
}

fn check(tree: &RbTree) -> Result<()> {
    let black_height = tree.assert_valid()?;
    tracing::debug!(len = tree.len(), black_height, "invariants hold");
    Ok(())
}

fn render(tree: &RbTree, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for (key, color) in tree.traverse() {
                println!("key: {key}, color: {color}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&tree.snapshot())?),
        Format::Tree => print!("{}", tree.print()),
    }
    Ok(())
}
