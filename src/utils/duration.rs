//! Duration input helpers: human shorthand ("90", "90m", "1h30m") to whole
//! minutes, and minutes back to a readable string.

use regex::Regex;

/// Parse a human duration into whole minutes.
///
/// Accepted: `90`, `90m`, `2h`, `1h30`, `1h30m`. Anything else returns
/// None; callers decide whether to pass the raw input through.
pub fn parse_minutes(input: &str) -> Option<i64> {
    let re = Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m?)?\s*$").ok()?;
    let caps = re.captures(input)?;

    let hours = caps.get(1).and_then(|m| m.as_str().parse::<i64>().ok());
    let minutes = caps.get(2).and_then(|m| m.as_str().parse::<i64>().ok());

    if hours.is_none() && minutes.is_none() {
        return None;
    }

    Some(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}

/// Minutes → "01h 30m" style display.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
