//! Basic data types.

use anyhow::Result;
use serde::Serialize;

use super::DemoContext;
use super::contact::to_json;
use crate::reporter::Section;
use crate::value::Value;

pub const TITLE: &str = "Basic Data Types";

/// Named weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WeatherType {
    Sunny = 0,
    Cloudy = 1,
    Rainy = 2,
    Snowy = 3,
}

impl WeatherType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(WeatherType::Sunny),
            1 => Some(WeatherType::Cloudy),
            2 => Some(WeatherType::Rainy),
            3 => Some(WeatherType::Snowy),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherType::Sunny => "Sunny",
            WeatherType::Cloudy => "Cloudy",
            WeatherType::Rainy => "Rainy",
            WeatherType::Snowy => "Snowy",
        }
    }
}

#[derive(Serialize)]
struct Person<'a> {
    name: &'a str,
    age: u32,
}

/// Logs a line and returns nothing.
fn log_message(ctx: &mut DemoContext<'_>, message: &str) -> Result<()> {
    ctx.log(message)
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let first_name: &str = "Emma";
    ctx.log(format!("String type example: {}", first_name))?;

    let age: u32 = 28;
    ctx.log(format!("Number type example: {}", age))?;

    let is_employed: bool = true;
    ctx.log(format!("Boolean type example: {}", is_employed))?;

    let hobbies: [&str; 3] = ["Reading", "Cycling", "Cooking"];
    let scores: Vec<u32> = vec![85, 92, 78];
    ctx.log(format!("Array of strings example: {:?}", hobbies))?;
    ctx.log(format!("Array of numbers example: {:?}", scores))?;

    let person: (&str, u32, bool) = ("Oliver", 34, true);
    ctx.log(format!("Tuple example: {:?}", person))?;

    let today_code = WeatherType::Rainy.code();
    let today_name = WeatherType::from_code(today_code).map_or("Unknown", WeatherType::name);
    ctx.log(format!(
        "Enum example: Weather today is {} ({})",
        today_name, today_code
    ))?;

    let mut dynamic_value = Value::from("This can be anything");
    ctx.log(format!("Any type example (as string): {}", dynamic_value))?;
    dynamic_value = Value::from(42.0);
    ctx.log(format!("Any type example (changed to number): {}", dynamic_value))?;

    log_message(ctx, "Void type example: This function doesn't return anything")?;

    let not_defined = Value::Undefined;
    let empty_value = Value::Null;
    ctx.log(format!("Undefined example: {}", not_defined))?;
    ctx.log(format!("Null example: {}", empty_value))?;

    let person_object = Person {
        name: "Charlotte",
        age: 25,
    };
    ctx.log(format!("Object type example: {}", to_json(&person_object)?))?;

    let html = format!(
        r#"
    <p>Values carry a static type that catches mistakes before the program runs:</p>
    <ul>
        <li><code>string</code>: For text values like "{first_name}"</li>
        <li><code>number</code>: For numeric values like {age}</li>
        <li><code>boolean</code>: For true/false values</li>
        <li><code>array</code>: For collections of values</li>
        <li><code>tuple</code>: For fixed-length groups where each element has its own type</li>
        <li><code>enum</code>: For named constants</li>
        <li><code>any</code>: For values whose type is only known at run time</li>
        <li><code>void</code>: For functions that don't return values</li>
        <li><code>null</code> and <code>undefined</code>: For absence of values</li>
        <li><code>object</code>: For non-primitive types</li>
    </ul>
"#
    );
    Ok(Section::new(TITLE, html))
}
