//! Number and text formatting for report output.

/// Formats an integer with comma thousands separators (`1234567` ->
/// `"1,234,567"`).
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats a dollar amount as a whole-number currency string
/// (`1234567.6` -> `"$1,234,568"`). Negative and NaN amounts render as
/// `$0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(dollars: f64) -> String {
    // `as` saturates: NaN and negatives become 0.
    let whole = dollars.round() as u64;
    format!("${}", format_thousands(whole))
}

/// Escapes text for inclusion in HTML or SVG markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
