//! List operations over the sample contacts.

use anyhow::{Context, Result};

use super::DemoContext;
use super::contact::{Contact, sample_contacts, to_json};
use crate::reporter::Section;

pub const TITLE: &str = "Arrays";

pub fn active(contacts: &[Contact]) -> Vec<&Contact> {
    contacts.iter().filter(|c| c.active).collect()
}

pub fn find_by_name<'a>(contacts: &'a [Contact], name: &str) -> Option<&'a Contact> {
    contacts.iter().find(|c| c.name == name)
}

pub fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name.as_str()).collect()
}

/// Sorted copy; the input order is left alone.
pub fn sorted_by_age(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by_key(|c| c.age);
    sorted
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let contacts = sample_contacts();

    ctx.log(format!("Contact list: {}", to_json(&contacts)?))?;
    ctx.log(format!("Number of contacts: {}", contacts.len()))?;

    let second = contacts.get(1).context("contact list has fewer than two entries")?;
    ctx.log(format!("Second contact: {} from {}", second.name, second.city))?;

    let active_contacts = active(&contacts);
    ctx.log(format!(
        "Active contacts ({}): {}",
        active_contacts.len(),
        to_json(&active_contacts)?
    ))?;

    let found = find_by_name(&contacts, "Robert Brown");
    ctx.log(format!("Found contact: {}", to_json(&found)?))?;

    let contact_names = names(&contacts);
    ctx.log(format!("Contact names: {:?}", contact_names))?;

    let by_age = sorted_by_age(&contacts);
    ctx.log(format!("Contacts sorted by age: {}", to_json(&by_age)?))?;

    let count = contacts.len();
    let second_name = &second.name;
    let second_city = &second.city;
    let active_count = active_contacts.len();
    let joined_names = contact_names.join(", ");
    let html = format!(
        r#"
    <p>Arrays hold collections of items that share one type.</p>

    <p>Our contact list has <strong>{count} contacts</strong>.</p>

    <p>Example contact: {second_name} from {second_city}</p>

    <p>We can perform various operations on arrays:</p>
    <ul>
        <li>Filter: Found {active_count} active contacts</li>
        <li>Find: Search for specific contacts by property</li>
        <li>Map: Extract specific properties (e.g., names: {joined_names})</li>
        <li>Sort: Arrange contacts by properties like age</li>
    </ul>
"#
    );
    Ok(Section::new(TITLE, html))
}
