//! Variable assignments, arithmetic and string building.

use anyhow::Result;

use super::DemoContext;
use super::datetime::display_date;
use crate::reporter::Section;
use crate::value::format_number;

pub const TITLE: &str = "Variable Assignments & Operations";

/// Line item priced with a flat tax rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invoice {
    pub unit_price: f64,
    pub quantity: u32,
    pub tax_rate: f64,
}

impl Invoice {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn tax(&self) -> f64 {
        self.subtotal() * self.tax_rate
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }
}

/// Two decimal places, for display only.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Joins the address parts with `+`.
pub fn concat_address(line1: &str, line2: &str, postcode: &str) -> String {
    line1.to_string() + ", " + line2 + ", " + postcode
}

/// Joins the address parts with a format string.
pub fn format_address(line1: &str, line2: &str, postcode: &str) -> String {
    format!("{}, {}, {}", line1, line2, postcode)
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let customer_name = "William";
    let account_balance = 1250.75;
    let is_active = true;
    let last_purchase = ctx.now();
    ctx.log(format!(
        "Customer: {}, Balance: £{}, Active: {}, Last Purchase: {}",
        customer_name,
        format_number(account_balance),
        is_active,
        display_date(&last_purchase)
    ))?;

    let invoice = Invoice {
        unit_price: 25.99,
        quantity: 3,
        tax_rate: 0.2,
    };
    let subtotal = invoice.subtotal();
    ctx.log(format!(
        "Subtotal ({} items at £{}): £{}",
        invoice.quantity,
        format_number(invoice.unit_price),
        money(subtotal)
    ))?;

    let tax_amount = invoice.tax();
    ctx.log(format!(
        "Tax ({}%): £{}",
        format_number(invoice.tax_rate * 100.0),
        money(tax_amount)
    ))?;

    let total = invoice.total();
    ctx.log(format!("Total: £{}", money(total)))?;

    let address_line1 = "42 Baker Street";
    let address_line2 = "London";
    let postcode = "W1U 6AA";

    let full_address1 = concat_address(address_line1, address_line2, postcode);
    ctx.log(format!("Full address (using + operator): {}", full_address1))?;

    let full_address2 = format_address(address_line1, address_line2, postcode);
    ctx.log(format!("Full address (using format strings): {}", full_address2))?;

    let item_price = format_number(invoice.unit_price);
    let quantity = invoice.quantity;
    let subtotal = money(subtotal);
    let tax_amount = money(tax_amount);
    let total = money(total);
    let html = format!(
        r#"
    <p>Variables can be declared with an explicit type annotation:</p>
    <pre>let customer_name: &amp;str = "William";</pre>

    <p>Arithmetic operations example:</p>
    <ul>
        <li>Item price: £{item_price}</li>
        <li>Quantity: {quantity}</li>
        <li>Subtotal: £{subtotal}</li>
        <li>Tax (20% VAT): £{tax_amount}</li>
        <li>Total: £{total}</li>
    </ul>

    <p>String concatenation can be done in two ways:</p>
    <ol>
        <li>Using + operator: <code>{full_address1}</code></li>
        <li>Using format strings: <code>{full_address2}</code></li>
    </ol>
"#
    );
    Ok(Section::new(TITLE, html))
}
