//! Display formatting for session timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO 8601 timestamp as `YYYY-MM-DD HH:MM` for page headers.
///
/// Anything that does not look like an ISO timestamp is returned
/// unchanged; the value is display-only and never parsed back.
pub fn format_login_time(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let Some(hhmm) = time.get(..5) else {
        return iso.to_owned();
    };
    let date_shaped = date.len() == 10
        && date.as_bytes().get(4) == Some(&b'-')
        && date.as_bytes().get(7) == Some(&b'-');
    if !date_shaped || hhmm.as_bytes().get(2) != Some(&b':') {
        return iso.to_owned();
    }
    format!("{date} {hhmm}")
}
