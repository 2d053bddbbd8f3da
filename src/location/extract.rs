use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_SUFFIX: Lazy<Option<Regex>> = Lazy::new(|| {
    match Regex::new(r"^(?P<place>.*?) - (?P<date>\p{L}+\.? \d{1,2}, \d{4})$") {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::error!("Failed to compile date suffix pattern: {:?}", e);
            None
        }
    }
});

/// Pulls the place phrase out of an event title, e.g. "A Rally in Erie - October 20, 2020" -> "Erie".
/// The last " in " wins, so "Remarks in Support of the Budget in Wilmington, DE" yields "Wilmington, DE".
pub fn extract_raw_location(title: Option<&str>) -> Option<String> {
    let (_, candidate) = title?.rsplit_once(" in ")?;
    let candidate = strip_suffix(candidate.trim_end());

    let trimmed = candidate.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();
    match trimmed.is_empty() {
        true => None,
        false => Some(trimmed.to_string()),
    }
}

fn strip_suffix(candidate: &str) -> &str {
    if let Some(place) = strip_date_suffix(candidate) {
        return place;
    }

    match candidate.rfind(" -") {
        Some(idx) => &candidate[..idx],
        None => candidate,
    }
}

fn strip_date_suffix(candidate: &str) -> Option<&str> {
    let captures = DATE_SUFFIX.as_ref()?.captures(candidate)?;
    let date = captures.name("date")?.as_str().replacen('.', "", 1);
    if NaiveDate::parse_from_str(&date, "%B %d, %Y").is_err() {
        tracing::trace!("Ignoring malformed date suffix {:?}", date);
        return None;
    }

    captures.name("place").map(|place| place.as_str())
}
