use super::canonical::CanonicalLocation;
use super::gazetteer::{fold, lookup_city, INTERNATIONAL_PATTERNS, OVERRIDE_KEYS};
use super::states::lookup_state;
use itertools::Itertools;
use unidecode::unidecode;

type Strategy = fn(&str) -> Option<CanonicalLocation>;

// Evaluated strictly in this order; the first hit wins. The state suffix check has to run
// before the international one so "Indiana, PA" and "Paris, TX" stay in the US.
const STRATEGIES: [(&str, Strategy); 6] = [
    ("override", by_override),
    ("state_suffix", by_state_suffix),
    ("international", by_international),
    ("state_name", by_state_name),
    ("common_city", by_common_city),
    ("literal", by_literal),
];

/// Maps a raw location phrase to a US place, `Abroad`, or `Unknown`.
pub fn standardize_location(raw: Option<&str>) -> CanonicalLocation {
    let Some(raw) = raw else {
        return CanonicalLocation::Unknown;
    };

    let phrase = raw.split_whitespace().join(" ");
    if phrase.is_empty() {
        return CanonicalLocation::Unknown;
    }

    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let location = strategy(&phrase)?;
            tracing::trace!("{:?} resolved by {} to {}", phrase, name, location);
            Some(location)
        })
        .unwrap_or(CanonicalLocation::Unknown)
}

fn by_override(phrase: &str) -> Option<CanonicalLocation> {
    let folded = fold(phrase);
    OVERRIDE_KEYS
        .iter()
        .find(|(key, _, _)| folded.contains(key.as_str()))
        .and_then(|(_, town, code)| CanonicalLocation::us_place(town, code))
}

fn by_state_suffix(phrase: &str) -> Option<CanonicalLocation> {
    let (town, state) = phrase.rsplit_once(',')?;
    let state = state.replace('.', "");
    let code = lookup_state(state.trim())?;

    CanonicalLocation::us_place(town.trim(), code)
}

fn by_international(phrase: &str) -> Option<CanonicalLocation> {
    let ascii = unidecode(phrase);
    INTERNATIONAL_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&ascii))
        .map(|(name, _)| {
            tracing::trace!("{:?} matched international place {}", phrase, name);
            CanonicalLocation::Abroad
        })
}

fn by_state_name(phrase: &str) -> Option<CanonicalLocation> {
    CanonicalLocation::us_place("", lookup_state(phrase)?)
}

fn by_common_city(phrase: &str) -> Option<CanonicalLocation> {
    CanonicalLocation::us_place(phrase, lookup_city(phrase)?)
}

fn by_literal(phrase: &str) -> Option<CanonicalLocation> {
    if phrase == "Washington" {
        return CanonicalLocation::us_place("Washington", "DC");
    }
    if phrase.contains("New York City") || phrase.contains("NYC") {
        return CanonicalLocation::us_place("New York", "NY");
    }

    None
}
