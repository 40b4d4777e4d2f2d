//! Demonstration blocks.
//!
//! Each block computes a handful of values, logs one console line per step
//! and returns the [`Section`] describing its results. Blocks never share
//! state; each recomputes what it needs.

pub mod arrays;
pub mod conditionals;
pub mod contact;
pub mod datetime;
pub mod math;
pub mod objects;
pub mod operations;
pub mod summary;
pub mod types;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use rand::SeedableRng;
use rand::rngs::StdRng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::reporter::Section;

/// Everything a block may touch: the console, a seeded generator, the clock.
pub struct DemoContext<'a> {
    console: &'a mut dyn Console,
    rng: StdRng,
    now: DateTime<FixedOffset>,
}

impl<'a> DemoContext<'a> {
    pub fn new(console: &'a mut dyn Console, seed: u64, now: DateTime<FixedOffset>) -> Self {
        Self {
            console,
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    pub fn log(&mut self, line: impl AsRef<str>) -> Result<()> {
        self.console
            .log(line.as_ref())
            .context("failed to write console line")
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

/// The blocks, in run order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DemoKind {
    /// Basic data types.
    Types,
    /// Variable assignments and arithmetic.
    Operations,
    /// Truthiness and branching.
    Conditionals,
    /// List operations on contacts.
    Arrays,
    /// Record mutation, copies and destructuring.
    Objects,
    /// Math helpers.
    Math,
    /// Date and time handling.
    #[serde(rename = "datetime")]
    #[value(name = "datetime")]
    DateTime,
    /// Closing recap.
    Summary,
}

impl DemoKind {
    pub const ALL: [DemoKind; 8] = [
        DemoKind::Types,
        DemoKind::Operations,
        DemoKind::Conditionals,
        DemoKind::Arrays,
        DemoKind::Objects,
        DemoKind::Math,
        DemoKind::DateTime,
        DemoKind::Summary,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DemoKind::Types => "types",
            DemoKind::Operations => "operations",
            DemoKind::Conditionals => "conditionals",
            DemoKind::Arrays => "arrays",
            DemoKind::Objects => "objects",
            DemoKind::Math => "math",
            DemoKind::DateTime => "datetime",
            DemoKind::Summary => "summary",
        }
    }

    /// Section title shown on the page.
    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Types => types::TITLE,
            DemoKind::Operations => operations::TITLE,
            DemoKind::Conditionals => conditionals::TITLE,
            DemoKind::Arrays => arrays::TITLE,
            DemoKind::Objects => objects::TITLE,
            DemoKind::Math => math::TITLE,
            DemoKind::DateTime => datetime::TITLE,
            DemoKind::Summary => summary::TITLE,
        }
    }

    /// Position in the run order, starting at 1.
    pub fn number(self) -> usize {
        DemoKind::ALL
            .iter()
            .position(|k| *k == self)
            .map_or(0, |i| i + 1)
    }

    pub fn run(self, ctx: &mut DemoContext<'_>) -> Result<Section> {
        ctx.log(format!(
            "SECTION {}: {}",
            self.number(),
            self.title()
        ))?;
        match self {
            DemoKind::Types => types::run(ctx),
            DemoKind::Operations => operations::run(ctx),
            DemoKind::Conditionals => conditionals::run(ctx),
            DemoKind::Arrays => arrays::run(ctx),
            DemoKind::Objects => objects::run(ctx),
            DemoKind::Math => math::run(ctx),
            DemoKind::DateTime => datetime::run(ctx),
            DemoKind::Summary => summary::run(ctx),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_every_block_yields_its_titled_section() {
        for kind in DemoKind::ALL {
            let mut console = MemoryConsole::new();
            let mut ctx = DemoContext::new(&mut console, 7, test_support::fixed_now());
            let section = kind.run(&mut ctx).unwrap();
            assert_eq!(section.title, kind.title());
            assert!(!section.content_html.is_empty());
            assert_eq!(
                console.lines()[0],
                format!("SECTION {}: {}", kind.number(), kind.title())
            );
        }
    }

    #[test]
    fn test_run_order_numbers() {
        assert_eq!(DemoKind::Types.number(), 1);
        assert_eq!(DemoKind::Summary.number(), 8);
    }
}
