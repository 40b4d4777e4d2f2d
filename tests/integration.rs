use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use primer::cli::RenderArgs;
use primer::console::MemoryConsole;
use primer::demos::DemoKind;
use primer::model::PageConfig;

const NOW: &str = "2024-03-01T09:05:07+00:00";

fn fixed_config() -> PageConfig {
    PageConfig {
        seed: Some(11),
        now: Some(NOW.to_string()),
        ..PageConfig::default()
    }
}

fn render_args(output: PathBuf) -> RenderArgs {
    RenderArgs {
        output: Some(output),
        seed: Some(11),
        now: Some(NOW.to_string()),
        ..RenderArgs::default()
    }
}

fn section_titles(doc: &primer::document::Document, container: &str) -> Vec<String> {
    let app = doc.get_element_by_id(container).unwrap();
    doc.children(app)
        .iter()
        .map(|s| doc.text_content(doc.children(*s)[0]))
        .collect()
}

#[test]
fn test_full_page_has_every_section_in_order() -> Result<()> {
    let mut console = MemoryConsole::new();
    let (doc, reporter) = primer::engine::render_page(&fixed_config(), &mut console, false)?;

    let expected: Vec<String> = DemoKind::ALL.iter().map(|k| k.title().to_string()).collect();
    assert_eq!(section_titles(&doc, "app"), expected);
    assert_eq!(reporter.rendered(), 8);
    assert_eq!(reporter.summary(), "8 sections rendered");

    assert!(console.contains("SECTION 1: Basic Data Types"));
    assert!(console.contains("SECTION 8: Summary"));
    assert!(console.contains("Customer qualifies for 15% Gold member discount"));
    Ok(())
}

#[test]
fn test_missing_container_renders_nothing() -> Result<()> {
    let config = PageConfig {
        container: false,
        ..fixed_config()
    };
    let mut console = MemoryConsole::new();
    let (doc, reporter) = primer::engine::render_page(&config, &mut console, false)?;

    assert!(doc.get_element_by_id("app").is_none());
    assert_eq!(reporter.rendered(), 0);
    assert!(!doc.to_html().contains("class=\"section\""));
    // Blocks still ran and logged.
    assert!(console.contains("SECTION 6: Math Methods"));
    Ok(())
}

#[test]
fn test_mismatched_container_id_is_a_no_op() -> Result<()> {
    let mut config = fixed_config();
    config.container_id = "root".to_string();
    let mut doc = primer::document::Document::with_container("Page", "app");
    let mut reporter = primer::reporter::Reporter::new(config.container_id.as_str(), false);
    let mut console = MemoryConsole::new();
    let mut ctx = primer::demos::DemoContext::new(&mut console, 1, config.fixed_now()?.unwrap());

    primer::engine::run_demos(&[DemoKind::Summary], &mut ctx, &mut reporter, &mut doc)?;
    let app = doc.get_element_by_id("app").unwrap();
    assert!(doc.children(app).is_empty());
    Ok(())
}

#[test]
fn test_section_subset_keeps_run_order() -> Result<()> {
    let config = PageConfig {
        sections: Some(vec![DemoKind::Summary, DemoKind::Arrays]),
        ..fixed_config()
    };
    let mut console = MemoryConsole::new();
    let (doc, _) = primer::engine::render_page(&config, &mut console, false)?;
    assert_eq!(section_titles(&doc, "app"), vec!["Arrays", "Summary"]);
    Ok(())
}

#[test]
fn test_same_seed_and_clock_give_identical_pages() -> Result<()> {
    let render = || -> Result<String> {
        let mut console = MemoryConsole::new();
        let (doc, _) = primer::engine::render_page(&fixed_config(), &mut console, false)?;
        Ok(doc.to_html())
    };
    assert_eq!(render()?, render()?);
    Ok(())
}

#[test]
fn test_render_writes_page_file() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("page.html");

    let exit_code = primer::engine::render(render_args(output.clone()))?;
    assert_eq!(exit_code, 0);

    let html = fs::read_to_string(&output)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<div class=\"section\">").count(), 8);
    assert!(html.contains("<li>Total: £93.56</li>"));
    assert!(html.contains("<li>Minimum: 7°C</li>"));
    assert!(html.contains("UK date format (DD/MM/YYYY): 01/03/2024"));
    Ok(())
}

#[test]
fn test_escape_content_flag() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("page.html");
    let args = RenderArgs {
        escape_content: true,
        sections: vec![DemoKind::Summary],
        ..render_args(output.clone())
    };

    assert_eq!(primer::engine::render(args)?, 0);
    let html = fs::read_to_string(&output)?;
    assert!(html.contains("&lt;ol&gt;"));
    assert!(!html.contains("<ol>"));
    Ok(())
}

#[test]
fn test_config_file_with_cli_override() -> Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("page.json");
    fs::write(
        &config_path,
        json!({ "page_title": "My Primer", "container_id": "content" }).to_string(),
    )?;
    let output = dir.path().join("page.html");
    let args = RenderArgs {
        config: Some(config_path),
        sections: vec![DemoKind::Types],
        ..render_args(output.clone())
    };

    assert_eq!(primer::engine::render(args)?, 0);
    let html = fs::read_to_string(&output)?;
    assert!(html.contains("<title>My Primer</title>"));
    assert!(html.contains("<div id=\"content\"><div class=\"section\"><h2>Basic Data Types</h2>"));
    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> Result<()> {
    let dir = tempdir()?;
    let args = RenderArgs {
        now: Some("not a date".to_string()),
        ..render_args(dir.path().join("page.html"))
    };
    assert_eq!(primer::engine::render(args)?, 2);
    assert!(!dir.path().join("page.html").exists());
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let args = RenderArgs {
        config: Some(dir.path().join("absent.json")),
        ..render_args(dir.path().join("page.html"))
    };
    let err = primer::engine::render(args).unwrap_err();
    assert!(err.to_string().contains("failed to load config"));
}

#[test]
fn test_cli_json_events() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("page.html");

    let assert = Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["render", "--json", "--seed", "4", "--now", NOW, "--output"])
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(serde_json::from_str::<serde_json::Value>)
        .collect::<Result<_, _>>()?;

    assert_eq!(events.first().unwrap()["type"], "run_started");
    assert_eq!(
        events
            .iter()
            .filter(|e| e["type"] == "section_rendered")
            .count(),
        8
    );
    assert!(events.iter().any(|e| e["type"] == "page_written"));
    let last = events.last().unwrap();
    assert_eq!(last["type"], "run_completed");
    assert_eq!(last["sections"], 8);
    assert_eq!(last["run_id"], events[0]["run_id"]);
    assert!(output.exists());
    Ok(())
}

#[test]
fn test_cli_no_container_reports_dropped_sections() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("page.html");

    Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["render", "--json", "--no-container", "--section", "math", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"section_dropped\""))
        .stdout(predicate::str::contains("section_rendered").not());

    let html = fs::read_to_string(&output)?;
    assert!(!html.contains("id=\"app\""));
    Ok(())
}

#[test]
fn test_cli_console_lines_go_to_stdout_with_output_file() -> Result<()> {
    let dir = tempdir()?;
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["render", "--section", "math", "--seed", "1", "--output"])
        .arg(dir.path().join("page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("SECTION 6: Math Methods"))
        .stdout(predicate::str::contains("Distance between points: 5 units"));
    Ok(())
}

#[test]
fn test_cli_page_to_stdout() -> Result<()> {
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["render", "--section", "summary", "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<h2>Summary</h2>"))
        .stderr(predicate::str::contains("SECTION 8: Summary"));
    Ok(())
}

#[test]
fn test_cli_json_requires_output() -> Result<()> {
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .args(["render", "--json"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_cli_list_and_schema() -> Result<()> {
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("Date and Time"))
        .stdout(predicate::function(|s: &str| s.lines().count() == 8));

    Command::new(env!("CARGO_BIN_EXE_primer"))
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("$schema"));
    Ok(())
}
