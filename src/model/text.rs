//! String helpers for catalog dates and summary previews.

use chrono::NaiveDate;

/// Input layouts accepted by [`to_long_us_date`], tried in order.
const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Zero-pad a `yyyy-M-d` date to `yyyy-MM-dd`.
///
/// Empty pieces are ignored when splitting; anything that does not leave
/// three `-` separated parts is returned unchanged.
pub fn normalized_ymd(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').filter(|part| !part.is_empty()).collect();
    let [year, month, day] = parts.as_slice() else {
        return raw.to_string();
    };
    format!("{year}-{}-{}", pad(month), pad(day))
}

fn pad(part: &str) -> String {
    if part.chars().count() == 1 {
        format!("0{part}")
    } else {
        part.to_string()
    }
}

/// Render a catalog date as `June 26, 1997`.
///
/// Accepts `yyyy-MM-dd`, `yyyy-M-d`, `yyyy/MM/dd` and `yyyy.M.d`.
pub fn to_long_us_date(raw: &str) -> Option<String> {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|date| date.format("%B %-d, %Y").to_string())
}

/// Like [`to_long_us_date`] but falls back to the input.
pub fn to_long_us_date_or_self(raw: &str) -> String {
    to_long_us_date(raw).unwrap_or_else(|| raw.to_string())
}

/// Cut `text` to `max_chars` characters and append `suffix` if anything was cut.
pub fn truncated(text: &str, max_chars: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &text[..end], suffix),
        None => text.to_string(),
    }
}
