//! Output helpers applied to user-supplied text before it leaves the API.

use chrono::{DateTime, Utc};

/// Escape every HTML-significant character so stored markup is echoed back
/// as inert text.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the date portion of a timestamp as `M/D/YYYY` in UTC.
///
/// This is the wire format clients parse; keep it stable.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}
