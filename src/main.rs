//! `primer` - language feature primer.
//!
//! See `README.md` for user documentation and `DESIGN.md` for architecture.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use primer::cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Command::Schema => {
            let schema = primer::model::generate_schema()?;
            println!("{}", schema);
            0
        }
        Command::List => {
            for demo in primer::demos::DemoKind::ALL {
                println!("{:<14}{}", demo.key(), demo.title());
            }
            0
        }
        Command::Render(args) => primer::engine::render(args)?,
    };
    std::process::exit(exit_code);
}
