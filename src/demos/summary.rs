use anyhow::Result;

use super::DemoContext;
use crate::reporter::Section;

pub const TITLE: &str = "Summary";

const TOPICS: [(&str, &str); 8] = [
    ("Basic Data Types", "string, number, boolean, arrays, tuples, enums, etc."),
    ("Variable Assignments", "Declaring variables with type annotations"),
    ("Operations", "Arithmetic operations and string concatenation"),
    ("Conditionals", "Using if statements and understanding truthy/falsy values"),
    ("Arrays", "Creating, accessing, and manipulating arrays"),
    ("Objects", "Creating objects, adding/removing properties"),
    ("Math Methods", "Using the standard math functions for calculations"),
    ("Date and Time", "Working with dates and times"),
];

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    ctx.log(format!("Covered {} topics", TOPICS.len()))?;

    let mut html = String::from("\n    <p>This introduction has covered:</p>\n\n    <ol>\n");
    for (topic, detail) in TOPICS {
        html.push_str(&format!(
            "        <li><strong>{}</strong>: {}</li>\n",
            topic, detail
        ));
    }
    html.push_str("    </ol>\n");
    Ok(Section::new(TITLE, html))
}
