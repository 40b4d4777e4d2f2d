//! Record mutation, copies, destructuring and nesting.

use anyhow::Result;

use super::DemoContext;
use super::contact::{Address, AddressedContact, Contact, to_json};
use crate::document::escape_html;
use crate::reporter::Section;

pub const TITLE: &str = "Objects";

pub fn new_contact() -> Contact {
    Contact::new(6, "Jessica Williams", 29, "Bristol", "jessica.w@example.co.uk", true)
}

pub fn addressed_contact() -> AddressedContact {
    AddressedContact {
        id: 7,
        name: "Thomas Moore".to_string(),
        age: 38,
        email: "thomas.m@example.co.uk".to_string(),
        active: true,
        address: Address {
            street: "10 High Street".to_string(),
            city: "Oxford".to_string(),
            postcode: "OX1 1AA".to_string(),
            country: "United Kingdom".to_string(),
        },
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let mut contact = new_contact();
    ctx.log(format!("New contact: {}", to_json(&contact)?))?;

    contact.phone = Some("07700 900321".to_string());
    ctx.log(format!("After adding phone: {}", to_json(&contact)?))?;

    contact.city = "Cardiff".to_string();
    ctx.log(format!("After changing city: {}", to_json(&contact)?))?;

    let contact_copy = contact.clone();
    ctx.log(format!("Copy of contact: {}", to_json(&contact_copy)?))?;

    contact.phone = None;
    ctx.log(format!("After removing phone: {}", to_json(&contact)?))?;

    let Contact {
        name, email, age, ..
    } = &contact;
    ctx.log(format!(
        "Destructured properties: name={}, email={}, age={}",
        name, email, age
    ))?;

    let nested = addressed_contact();
    ctx.log(format!("Contact with nested address: {}", to_json(&nested)?))?;
    ctx.log(format!(
        "{} lives at {}, {}",
        nested.name, nested.address.street, nested.address.city
    ))?;

    let pretty = escape_html(&serde_json::to_string_pretty(&contact)?);
    let html = format!(
        r#"
    <p>Records group named fields, each with its own type.</p>

    <p>We created a new contact:</p>
    <pre>{pretty}</pre>

    <p>We can:</p>
    <ul>
        <li>Add properties (e.g., adding a phone number)</li>
        <li>Modify properties (e.g., changing city from Bristol to Cardiff)</li>
        <li>Remove properties (e.g., removing the phone number)</li>
        <li>Create copies with clone</li>
        <li>Use destructuring to extract properties</li>
        <li>Create nested objects (e.g., address details)</li>
    </ul>
"#
    );
    Ok(Section::new(TITLE, html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::demos::test_support::fixed_now;

    #[test]
    fn test_copy_keeps_property_removed_from_original() {
        let mut contact = new_contact().with_phone("07700 900321");
        let copy = contact.clone();
        contact.phone = None;
        assert_eq!(contact.phone, None);
        assert_eq!(copy.phone.as_deref(), Some("07700 900321"));
    }

    #[test]
    fn test_removed_property_is_absent_from_json() {
        let contact = new_contact();
        let json = to_json(&contact).unwrap();
        assert!(!json.contains("phone"));
        let with_phone = to_json(&contact.with_phone("1")).unwrap();
        assert!(with_phone.contains(r#""phone":"1""#));
    }

    #[test]
    fn test_logs_each_mutation() {
        let mut console = MemoryConsole::new();
        let mut ctx = DemoContext::new(&mut console, 1, fixed_now());
        let section = run(&mut ctx).unwrap();

        assert!(console.contains(r#"After adding phone: {"id":6"#));
        assert!(console.contains(r#""city":"Cardiff""#));
        assert!(console.contains(
            "Destructured properties: name=Jessica Williams, email=jessica.w@example.co.uk, age=29"
        ));
        assert!(console.contains("Thomas Moore lives at 10 High Street, Oxford"));
        let removed = console
            .lines()
            .iter()
            .find(|l| l.starts_with("After removing phone:"))
            .unwrap();
        assert!(!removed.contains("phone\""));
        assert!(section.content_html.contains("&quot;city&quot;: &quot;Cardiff&quot;"));
        assert!(!section.content_html.contains("07700"));
    }
}
