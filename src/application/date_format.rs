const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a `YYYY-MM-DD` string as `Month D, Year`.
///
/// Fields are read literally from the string, so the output never depends on
/// the local time zone or locale. Returns `None` for anything that is not three
/// numeric fields with a month in 1..=12.
pub fn format_iso_date(iso: &str) -> Option<String> {
    let mut parts = iso.split('-');
    let year: u32 = parts.next()?.trim().parse().ok()?;
    let month: usize = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some(format!("{name} {day}, {year}"))
}

/// Upper-case the first character, leave the rest as written.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
