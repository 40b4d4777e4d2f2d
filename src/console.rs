//! Line-oriented output sinks for the demonstrations.

use std::io::{self, Write};

/// Receives one line per demonstration step.
pub trait Console {
    fn log(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each line to an underlying writer.
pub struct WriterConsole<W: Write> {
    out: W,
}

impl<W: Write> WriterConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn log(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for MemoryConsole {
    fn log(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Routes lines into the diagnostic log; used when stdout carries JSON events.
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&mut self, line: &str) -> io::Result<()> {
        tracing::debug!(target: "primer::console", "{}", line);
        Ok(())
    }
}
