//! Display formatting helpers.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Split a comma-separated postal address into display lines.
pub fn format_address(address: &str) -> Vec<String> {
    address
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Timestamp for a freshly submitted comment, matching the seed data's
/// "Jan 7, 2026 14:32" shape.
pub fn comment_timestamp() -> String {
    let now = js_sys::Date::new_0();
    let month = MONTHS[(now.get_month() as usize) % MONTHS.len()];
    format!(
        "{month} {}, {} {:02}:{:02}",
        now.get_date(),
        now.get_full_year(),
        now.get_hours(),
        now.get_minutes()
    )
}
