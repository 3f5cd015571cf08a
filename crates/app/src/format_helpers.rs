/// Shared formatting utilities for the UI layer.
///
/// Date functions accept ISO-8601 strings as sent by the retail API
/// (e.g. "2026-01-20T21:35:00") and never fail: unparseable input is shown
/// as-is.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an amount as "$12.50".
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format an ISO date string as "Jan 20, 2026".
pub fn format_date_human(date_str: &str) -> String {
    let parts = (date_str.get(..4), date_str.get(5..7), date_str.get(8..10));
    let (Some(year), Some(month), Some(day)) = parts else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date_str.to_string(),
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM".
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };
    let hour: u32 = match hour_str.parse() {
        Ok(h) if h < 24 => h,
        _ => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// "1 item" / "3 items".
pub fn format_item_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
