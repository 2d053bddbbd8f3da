use crate::location::{
    canonical::CanonicalLocation, extract::extract_raw_location,
    standardize::standardize_location,
};
use crate::service::record_service::SpeechRecord;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Extract then standardize. Titles without a place phrase resolve to `Unknown`.
pub fn resolve(title: Option<&str>) -> CanonicalLocation {
    let raw = extract_raw_location(title);
    standardize_location(raw.as_deref())
}

/// Trusts a location stored by an earlier run and only resolves the title when there is none.
pub fn resolve_record(title: Option<&str>, existing: Option<&str>) -> CanonicalLocation {
    match existing {
        Some(stored) if !stored.trim().is_empty() => CanonicalLocation::from_stored(stored),
        _ => resolve(title),
    }
}

/// Resolves every record in parallel. The output keeps input order.
pub fn resolve_records(records: &[SpeechRecord]) -> Vec<CanonicalLocation> {
    let locations: Vec<CanonicalLocation> = records
        .par_iter()
        .map(|record| resolve_record(record.title.as_deref(), record.location.as_deref()))
        .collect();

    let unknown = locations
        .iter()
        .filter(|location| **location == CanonicalLocation::Unknown)
        .count();
    tracing::info!("Resolved {} records, {} unknown", locations.len(), unknown);

    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_titles_end_to_end() {
        // A bare town outside the city table has no state to attach.
        assert_eq!(
            resolve(Some("A Rally in Erie - October 20, 2020")),
            CanonicalLocation::Unknown
        );
        assert_eq!(
            resolve(Some("Remarks at a Rally in Indiana, PA - September 26, 2020")),
            CanonicalLocation::us_place("Indiana", "PA").unwrap()
        );
        assert_eq!(resolve(Some("Weekly Address")), CanonicalLocation::Unknown);
        assert_eq!(resolve(None), CanonicalLocation::Unknown);
    }

    #[test]
    fn stored_location_bypasses_resolution() {
        assert_eq!(
            resolve_record(Some("Remarks in Tulsa"), Some("Erie, PA")),
            CanonicalLocation::us_place("Erie", "PA").unwrap()
        );
        assert_eq!(
            resolve_record(Some("Remarks in Tulsa"), Some("Abroad")),
            CanonicalLocation::Abroad
        );
        assert_eq!(
            resolve_record(Some("Remarks in Tulsa"), Some("  ")),
            CanonicalLocation::us_place("Tulsa", "OK").unwrap()
        );
        assert_eq!(
            resolve_record(Some("Remarks in Tulsa"), None),
            CanonicalLocation::us_place("Tulsa", "OK").unwrap()
        );
    }

    #[test]
    fn batch_keeps_input_order() {
        let records: Vec<SpeechRecord> = (0..200)
            .map(|i| match i % 3 {
                0 => SpeechRecord::new("Rally in Tulsa"),
                1 => SpeechRecord::new("Speech in London"),
                _ => SpeechRecord::new("Weekly Address"),
            })
            .collect();
        let locations = resolve_records(&records);
        assert_eq!(locations.len(), records.len());
        for (i, location) in locations.iter().enumerate() {
            let expected = match i % 3 {
                0 => CanonicalLocation::us_place("Tulsa", "OK").unwrap(),
                1 => CanonicalLocation::Abroad,
                _ => CanonicalLocation::Unknown,
            };
            assert_eq!(*location, expected);
        }
    }
}
