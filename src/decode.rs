// Pure decoders from captured dialog output to typed values
//
// Each decoder assumes the widget already exited 0; cancellation is resolved
// before decoding ever runs. Output formats are dictated by the installed
// dialog version and are parsed defensively where a fallback exists, loudly
// where it does not.

use chrono::{NaiveDate, NaiveTime};

use crate::error::Error;

/// Decode a `--calendar` response of the form `day/month/year`.
pub fn decode_date(raw: &str) -> Result<NaiveDate, Error> {
    let malformed = || Error::malformed("calendar", raw);

    let trimmed = raw.trim();
    let mut parts = trimmed.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let day: u32 = day.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Decode a `--timebox` response of the form `hour:minute:second`.
pub fn decode_time(raw: &str) -> Result<NaiveTime, Error> {
    raw.trim()
        .parse::<NaiveTime>()
        .map_err(|_| Error::malformed("timebox", raw))
}

/// Decode a `--checklist` response: a space-separated list of quoted tags,
/// e.g. `"alpha" "beta"`. An empty response is an empty selection, which is
/// a perfectly good confirmed result.
pub fn decode_tags(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_end_matches('\n');
    if trimmed.is_empty() {
        return Vec::new();
    }
    if let Some(tags) = shlex::split(trimmed) {
        return tags;
    }
    // Unbalanced quoting from an odd dialog build; fall back to stripping the
    // outer quotes, splitting between them, and dropping escape backslashes.
    trimmed
        .trim_matches('"')
        .split("\" \"")
        .map(|tag| tag.replace('\\', ""))
        .collect()
}

/// Decode a `--form` response: one line per editable field, in the order the
/// fields were declared. Read-only fields are never written out by dialog,
/// so they contribute no element.
pub fn decode_form(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}
