//! Clock formatting and calendar arithmetic.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, TimeZone, Timelike};

use super::DemoContext;
use crate::reporter::Section;

pub const TITLE: &str = "Date and Time";

const MS_PER_DAY: f64 = 1000.0 * 3600.0 * 24.0;

/// Long form used wherever a full timestamp is printed.
pub fn display_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// `DD/MM/YYYY`.
pub fn uk_date(date: &DateTime<FixedOffset>) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// `HH:MM:SS`.
pub fn clock_time(date: &DateTime<FixedOffset>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// Local midnight of `y-m-d` in the offset of `like`.
pub fn midnight(like: &DateTime<FixedOffset>, y: i32, m: u32, d: u32) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
    like.timezone().from_local_datetime(&naive).single()
}

/// Whole days from `from` until `to`, rounded up. Negative once `to` has passed.
pub fn days_until(from: &DateTime<FixedOffset>, to: &DateTime<FixedOffset>) -> i64 {
    let ms = to.signed_duration_since(*from).num_milliseconds();
    (ms as f64 / MS_PER_DAY).ceil() as i64
}

pub fn add_days(date: &DateTime<FixedOffset>, days: i64) -> Option<DateTime<FixedOffset>> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let now = ctx.now();
    let now_text = display_date(&now);
    ctx.log(format!("Current date and time: {}", now_text))?;

    let uk = uk_date(&now);
    ctx.log(format!("UK date format: {}", uk))?;

    let time = clock_time(&now);
    ctx.log(format!("Time: {}", time))?;

    let christmas = midnight(&now, 2023, 12, 25).context("Christmas Day 2023 does not exist in this offset")?;
    ctx.log(format!("Christmas Day 2023: {}", display_date(&christmas)))?;

    let days_diff = days_until(&now, &christmas);
    ctx.log(format!("Days until Christmas: {}", days_diff))?;

    let future = add_days(&now, 30).context("date out of range")?;
    let future_text = display_date(&future);
    ctx.log(format!("Date 30 days from now: {}", future_text))?;

    let html = format!(
        r#"
    <p>Dates and times are handled through a calendar-aware date type.</p>

    <p>Current date and time: <strong>{now_text}</strong></p>

    <p>Formatted as:</p>
    <ul>
        <li>UK date format (DD/MM/YYYY): {uk}</li>
        <li>Time: {time}</li>
    </ul>

    <p>Date calculations:</p>
    <ul>
        <li>Days until Christmas: {days_diff}</li>
        <li>Date 30 days from now: {future_text}</li>
    </ul>
"#
    );
    Ok(Section::new(TITLE, html))
}
