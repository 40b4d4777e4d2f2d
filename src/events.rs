use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Structured event emitted during a render run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    RunStarted {
        run_id: uuid::Uuid,
    },
    SectionRendered {
        index: usize,
        title: String,
    },
    SectionDropped {
        title: String,
    },
    PageWritten {
        /// `None` when the page went to stdout.
        path: Option<PathBuf>,
        bytes: String,
    },
    RunCompleted {
        run_id: uuid::Uuid,
        sections: usize,
        elapsed: String,
    },
}
