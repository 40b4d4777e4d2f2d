//! Rounding, extremes, random numbers and distances.

use anyhow::{Context, Result};
use rand::Rng;

use super::DemoContext;
use crate::reporter::Section;
use crate::value::format_number;

pub const TITLE: &str = "Math Methods";

pub const TEMPERATURES: [i64; 7] = [12, 18, 9, 21, 15, 7, 23];

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[i64]) -> Option<(i64, i64)> {
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some((min, max))
}

/// Random integer in `[ceil(min), floor(max)]`. Collapses to the lower
/// bound when the rounded range is empty.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    let min = min.ceil() as i64;
    let max = max.floor() as i64;
    if max < min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(ctx: &mut DemoContext<'_>) -> Result<Section> {
    let pi = std::f64::consts::PI;
    ctx.log(format!("PI: {}", pi))?;
    ctx.log(format!("round(3.7): {}", format_number(3.7_f64.round())))?;
    ctx.log(format!("floor(3.7): {}", format_number(3.7_f64.floor())))?;
    ctx.log(format!("ceil(3.2): {}", format_number(3.2_f64.ceil())))?;

    let (min, max) = min_max(&TEMPERATURES).context("no temperatures")?;
    let temperatures = join(&TEMPERATURES);
    ctx.log(format!("Temperatures: {}°C", temperatures))?;
    ctx.log(format!("Minimum temperature: {}°C", min))?;
    ctx.log(format!("Maximum temperature: {}°C", max))?;

    let random_decimal: f64 = ctx.rng().r#gen();
    ctx.log(format!("Random decimal: {}", random_decimal))?;

    let random_age = random_int(ctx.rng(), 18.0, 65.0);
    ctx.log(format!("Random age: {}", random_age))?;

    let dist = distance(0.0, 0.0, 3.0, 4.0);
    ctx.log(format!("Distance between points: {} units", format_number(dist)))?;

    let round = format_number(3.7_f64.round());
    let floor = format_number(3.7_f64.floor());
    let ceil = format_number(3.2_f64.ceil());
    let html = format!(
        r#"
    <p>The standard library provides the usual mathematical operations:</p>

    <ul>
        <li>Constants: π = {pi}</li>
        <li>Rounding: round(3.7) = {round}, floor(3.7) = {floor}, ceil(3.2) = {ceil}</li>
        <li>Min/Max: From temperatures [{temperatures}]°C:
            <ul>
                <li>Minimum: {min}°C</li>
                <li>Maximum: {max}°C</li>
            </ul>
        </li>
        <li>Random numbers: Generate random values between ranges</li>
        <li>Advanced calculations: Distance between points using Pythagorean theorem</li>
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_temperature_extremes() {
        assert_eq!(min_max(&TEMPERATURES), Some((7, 23)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_distance_is_pythagorean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_random_int_stays_in_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let n = random_int(&mut rng, 1.0, 4.0);
            assert!((1..=4).contains(&n));
            seen_min |= n == 1;
            seen_max |= n == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_int_rounds_bounds_inward() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let n = random_int(&mut rng, 17.2, 18.9);
            assert_eq!(n, 18);
        }
        assert_eq!(random_int(&mut rng, 1.5, 1.7), 2);
    }

    #[test]
    fn test_same_seed_same_log() {
        let run_once = |seed| {
            let mut console = MemoryConsole::new();
            let mut ctx = DemoContext::new(&mut console, seed, fixed_now());
            run(&mut ctx).unwrap();
            console.lines().to_vec()
        };
        assert_eq!(run_once(9), run_once(9));
    }

    #[test]
    fn test_logs_results() {
        let mut console = MemoryConsole::new();
        let mut ctx = DemoContext::new(&mut console, 1, fixed_now());
        let section = run(&mut ctx).unwrap();

        assert!(console.contains("PI: 3.141592653589793"));
        assert!(console.contains("round(3.7): 4"));
        assert!(console.contains("floor(3.7): 3"));
        assert!(console.contains("ceil(3.2): 4"));
        assert!(console.contains("Minimum temperature: 7°C"));
        assert!(console.contains("Maximum temperature: 23°C"));
        assert!(console.contains("Distance between points: 5 units"));
        assert!(section.content_html.contains("[12, 18, 9, 21, 15, 7, 23]"));
    }
}
