//! Truthiness and an ordered discount chain.

use anyhow::Result;
use std::collections::BTreeMap;

use super::DemoContext;
use crate::reporter::Section;
use crate::value::{Value, format_number};

pub const TITLE: &str = "Conditionals (Truthy/Falsy)";

/// Discount tier picked for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    Gold,
    Silver,
    Promo,
    None,
}

impl Discount {
    pub fn percentage(self) -> u32 {
        match self {
            Discount::Gold => 15,
            Discount::Silver => 10,
            Discount::Promo => 5,
            Discount::None => 0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Discount::Gold => "Customer qualifies for 15% Gold member discount",
            Discount::Silver => "Customer qualifies for 10% Silver member discount",
            Discount::Promo => "Customer qualifies for 5% promo code discount",
            Discount::None => "Customer doesn't qualify for any discount",
        }
    }
}

/// First matching branch wins; the order of the checks matters.
pub fn discount_tier(loyalty_points: u32, membership_level: &str, has_promo_code: bool) -> Discount {
    if loyalty_points > 100 && membership_level == "Gold" {
        Discount::Gold
    } else if loyalty_points > 50 || membership_level == "Silver" {
        Discount::Silver
    } else if has_promo_code {
        Discount::Promo
    } else {
        Discount::None
    }
}

/// Free shipping above 75 points.
pub fn shipping_cost(loyalty_points: u32) -> f64 {
    if loyalty_points > 75 { 0.0 } else { 4.99 }
}

pub fn shipping_note(cost: f64) -> &'static str {
    if cost == 0.0 {
        "Free shipping applied"
    } else {
        "Standard shipping rate"
    }
}

/// Values checked for truthiness, with their descriptions.
pub fn truthiness_samples() -> Vec<(&'static str, Value)> {
    vec![
        ("Non-empty string", Value::from("Hello")),
        ("Empty string", Value::from("")),
        ("Positive number", Value::from(42.0)),
        ("Zero", Value::from(0.0)),
        ("Negative number", Value::from(-1.0)),
        ("Boolean true", Value::from(true)),
        ("Boolean false", Value::from(false)),
        ("Null", Value::Null),
        ("Undefined", Value::Undefined),
        ("Empty object", Value::Object(BTreeMap::new())),
        ("Empty array", Value::Array(Vec::new())),
    ]
}

fn check_truthiness(ctx: &mut DemoContext<'_>, value: &Value, description: &str) -> Result<()> {
    let verdict = if value.is_truthy() { "TRUTHY" } else { "FALSY" };
    ctx.log(format!("{} ({}) is {}", description, value, verdict))
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    for (description, value) in truthiness_samples() {
        check_truthiness(ctx, &value, description)?;
    }

    let loyalty_points: u32 = 120;
    let membership_level = "Gold";
    let has_promo_code = false;

    let discount = discount_tier(loyalty_points, membership_level, has_promo_code);
    ctx.log(discount.message())?;

    let shipping = shipping_cost(loyalty_points);
    let note = shipping_note(shipping);
    ctx.log(format!(
        "Shipping cost: £{} ({})",
        format_number(shipping),
        note
    ))?;

    let discount_percentage = discount.percentage();
    let shipping = format_number(shipping);
    let html = format!(
        r#"
    <p>Conditions decide which branch runs. Dynamic values are either "truthy" or "falsy" when tested.</p>

    <p><strong>Falsy values include:</strong></p>
    <ul>
        <li>Empty string ("")</li>
        <li>0</li>
        <li>null</li>
        <li>undefined</li>
        <li>false</li>
        <li>NaN</li>
    </ul>

    <p><strong>Everything else is truthy</strong>, including:</p>
    <ul>
        <li>Non-empty strings</li>
        <li>Numbers other than 0</li>
        <li>Arrays (even empty ones)</li>
        <li>Objects (even empty ones)</li>
    </ul>

    <p>Practical example: A customer with {loyalty_points} loyalty points and {membership_level} membership qualifies for a {discount_percentage}% discount.</p>

    <p>Conditional expression example: Shipping cost is £{shipping} based on loyalty points.</p>
"#
    );
    Ok(Section::new(TITLE, html))
}
