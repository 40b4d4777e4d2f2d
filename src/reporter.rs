use crate::document::{Document, DocumentError};
use crate::events::Event;

/// Notice appended under every section.
pub const CONSOLE_NOTICE: &str =
    "<strong>Console Output:</strong> Check the console for detailed output";

/// Immutable description of one rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content_html: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content_html: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_html: content_html.into(),
        }
    }
}

/// Renders sections into a document and aggregates run events.
pub struct Reporter {
    container_id: String,
    escape_content: bool,
    json_mode: bool,
    rendered: usize,
    events: Vec<Event>,
}

impl Reporter {
    pub fn new(container_id: impl Into<String>, json_mode: bool) -> Self {
        Self {
            container_id: container_id.into(),
            escape_content: false,
            json_mode,
            rendered: 0,
            events: Vec::new(),
        }
    }

    /// Insert content as text rather than markup.
    pub fn escape_content(mut self, escape: bool) -> Self {
        self.escape_content = escape;
        self
    }

    /// Append `section` to the container. A missing container is a no-op.
    pub fn report(&mut self, doc: &mut Document, section: &Section) -> Result<(), DocumentError> {
        let Some(container) = doc.get_element_by_id(&self.container_id) else {
            tracing::debug!(title = %section.title, container = %self.container_id, "container missing, section dropped");
            self.record(Event::SectionDropped {
                title: section.title.clone(),
            });
            return Ok(());
        };

        let node = doc.create_element("div");
        doc.set_class_name(node, "section")?;

        let heading = doc.create_element("h2");
        doc.append_text(heading, &section.title)?;

        let content = doc.create_element("div");
        if self.escape_content {
            doc.append_text(content, &section.content_html)?;
        } else {
            doc.set_inner_html(content, &section.content_html)?;
        }

        let output = doc.create_element("div");
        doc.set_class_name(output, "output")?;
        doc.set_inner_html(output, CONSOLE_NOTICE)?;

        doc.append_child(node, heading)?;
        doc.append_child(node, content)?;
        doc.append_child(node, output)?;
        doc.append_child(container, node)?;

        self.rendered += 1;
        tracing::info!(index = self.rendered, title = %section.title, "section rendered");
        self.record(Event::SectionRendered {
            index: self.rendered,
            title: section.title.clone(),
        });
        Ok(())
    }

    pub fn record(&mut self, event: Event) {
        if self.json_mode {
            // Emit JSON line to stdout
            if let Ok(line) = serde_json::to_string(&event) {
                println!("{}", line);
            }
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of sections appended so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    pub fn summary(&self) -> String {
        let dropped = self
            .events
            .iter()
            .filter(|e| matches!(e, Event::SectionDropped { .. }))
            .count();
        if dropped == 0 {
            format!("{} sections rendered", self.rendered)
        } else {
            format!(
                "{} sections rendered, {} dropped (no #{} container)",
                self.rendered, dropped, self.container_id
            )
        }
    }
}
