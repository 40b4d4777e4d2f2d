use anyhow::{Context, Result};
use bytesize::ByteSize;
use chrono::Local;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::cli::RenderArgs;
use crate::console::{Console, TracingConsole, WriterConsole};
use crate::demos::{DemoContext, DemoKind};
use crate::document::Document;
use crate::events::Event;
use crate::exit_codes::exit;
use crate::model::{self, PageConfig};
use crate::reporter::Reporter;

pub fn render(args: RenderArgs) -> Result<i32> {
    let started = Instant::now();

    // Load config and apply overrides
    let mut config = match &args.config {
        Some(path) => model::load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PageConfig::default(),
    };
    apply_overrides(&mut config, &args);
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        eprintln!("error: {}", e);
        return Ok(exit::CONFIG_FAILURE);
    }

    // In JSON mode stdout carries events; otherwise it carries the page when
    // no output file is given, so console lines move to stderr.
    let mut console: Box<dyn Console> = if args.json {
        Box::new(TracingConsole)
    } else if args.output.is_some() {
        Box::new(WriterConsole::new(std::io::stdout().lock()))
    } else {
        Box::new(WriterConsole::new(std::io::stderr().lock()))
    };

    let (doc, mut reporter) = render_page(&config, console.as_mut(), args.json)?;
    drop(console);

    let html = doc.to_html();
    match &args.output {
        Some(path) => std::fs::write(path, &html)
            .with_context(|| format!("failed to write page to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write page to stdout")?;
        }
    }
    let bytes = ByteSize::b(html.len() as u64).to_string();
    tracing::info!(path = ?args.output, %bytes, "page written");
    reporter.record(Event::PageWritten {
        path: args.output.clone(),
        bytes,
    });

    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    let run_id = run_id(&reporter);
    reporter.record(Event::RunCompleted {
        run_id,
        sections: reporter.rendered(),
        elapsed: humantime::format_duration(elapsed).to_string(),
    });
    tracing::info!("{}", reporter.summary());
    Ok(exit::SUCCESS)
}

/// Build the page for `config`, running every selected block and reporting
/// its section. Performs no I/O besides the console.
pub fn render_page(
    config: &PageConfig,
    console: &mut dyn Console,
    json_mode: bool,
) -> Result<(Document, Reporter)> {
    let now = config
        .fixed_now()?
        .unwrap_or_else(|| Local::now().fixed_offset());
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, now = %now, "starting render");

    let mut reporter = Reporter::new(config.container_id.as_str(), json_mode)
        .escape_content(config.escape_content);
    reporter.record(Event::RunStarted {
        run_id: uuid::Uuid::new_v4(),
    });

    let mut doc = build_document(config);
    let mut ctx = DemoContext::new(console, seed, now);
    run_demos(&config.selected_demos(), &mut ctx, &mut reporter, &mut doc)?;
    Ok((doc, reporter))
}

pub fn build_document(config: &PageConfig) -> Document {
    if config.container {
        Document::with_container(&config.page_title, &config.container_id)
    } else {
        Document::new(&config.page_title)
    }
}

/// Run `demos` in the given order, reporting one section each.
pub fn run_demos(
    demos: &[DemoKind],
    ctx: &mut DemoContext<'_>,
    reporter: &mut Reporter,
    doc: &mut Document,
) -> Result<()> {
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            ctx.log("")?;
        }
        tracing::debug!(demo = demo.key(), "running demonstration");
        let section = demo
            .run(ctx)
            .with_context(|| format!("demonstration '{}' failed", demo.key()))?;
        reporter
            .report(doc, &section)
            .with_context(|| format!("failed to render section '{}'", section.title))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut PageConfig, args: &RenderArgs) {
    if let Some(id) = &args.container_id {
        config.container_id = id.clone();
    }
    if args.no_container {
        config.container = false;
    }
    if args.escape_content {
        config.escape_content = true;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(now) = &args.now {
        config.now = Some(now.clone());
    }
    if !args.sections.is_empty() {
        config.sections = Some(args.sections.clone());
    }
}

fn run_id(reporter: &Reporter) -> uuid::Uuid {
    reporter
        .events()
        .iter()
        .find_map(|e| match e {
            Event::RunStarted { run_id } => Some(*run_id),
            _ => None,
        })
        .unwrap_or_else(uuid::Uuid::new_v4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = model::from_json(r#"{ "container_id": "main", "seed": 1 }"#).unwrap();
        let args = RenderArgs {
            container_id: Some("app2".to_string()),
            seed: Some(5),
            no_container: true,
            sections: vec![DemoKind::Math],
            ..RenderArgs::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.container_id, "app2");
        assert_eq!(config.seed, Some(5));
        assert!(!config.container);
        assert_eq!(config.sections, Some(vec![DemoKind::Math]));
        assert!(!config.escape_content);
    }

    #[test]
    fn test_absent_flags_leave_config_alone() {
        let mut config = model::from_json(r#"{ "escape_content": true, "now": "2024-01-01T00:00:00Z" }"#).unwrap();
        let before = config.clone();
        apply_overrides(&mut config, &RenderArgs::default());
        assert_eq!(config, before);
    }
}
