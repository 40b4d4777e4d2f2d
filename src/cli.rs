use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::demos::DemoKind;

/// Language feature primer: logs each demonstration and renders it into a page.
#[derive(Parser)]
#[command(name = "primer", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print JSON Schema for the configuration file.
    Schema,
    /// List the demonstration blocks in run order.
    List,
    /// Run the demonstrations and render the page.
    Render(RenderArgs),
}

#[derive(Args, Default)]
pub struct RenderArgs {
    /// Path to configuration JSON file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the page to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output structured JSON events to stdout.
    #[arg(long, requires = "output")]
    pub json: bool,

    /// Override the id of the container element.
    #[arg(long)]
    pub container_id: Option<String>,

    /// Render a page without the container element.
    #[arg(long)]
    pub no_container: bool,

    /// Insert section content as escaped text instead of markup.
    #[arg(long)]
    pub escape_content: bool,

    /// Seed for the random number demonstrations.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed clock value (RFC 3339) for the date demonstrations.
    #[arg(long)]
    pub now: Option<String>,

    /// Run only these blocks (repeatable); run order is unaffected.
    #[arg(long = "section", value_enum)]
    pub sections: Vec<DemoKind>,
}
