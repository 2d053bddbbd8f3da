use once_cell::sync::Lazy;
use regex::{escape, Regex};
use unidecode::unidecode;

/// Venue aliases, matched as case-insensitive substrings. First hit in this order wins.
pub const OVERRIDES: [(&str, &str, &str); 10] = [
    ("the Rose Garden", "Washington", "DC"),
    ("the White House", "Washington", "DC"),
    ("Bedminster", "Bedminster", "NJ"),
    ("Mar-a-Lago", "Palm Beach", "FL"),
    ("Trump Tower", "New York", "NY"),
    ("Andrews Air Force Base", "Camp Springs", "MD"),
    ("Joint Base Andrews", "Camp Springs", "MD"),
    ("Walter Reed", "Bethesda", "MD"),
    ("Arlington", "Arlington", "VA"),
    ("Lima", "Lima", "OH"),
];

/// Known foreign places. Matched on whole words only, so "India" never hits "Indiana".
pub const INTERNATIONAL_LOCATIONS: [&str; 44] = [
    "Davos",
    "Jerusalem",
    "Riyadh",
    "Vietnam",
    "Ossie",
    "Hanoi",
    "Osaka",
    "Biarritz",
    "London",
    "Normandy",
    "Shannon",
    "Doocastle",
    "Tokyo",
    "Panmunjom",
    "Singapore",
    "Quebec",
    "Hamburg",
    "Warsaw",
    "Sicily",
    "Brussels",
    "The Vatican",
    "Bethlehem",
    "Manila",
    "Da Nang",
    "Seoul",
    "Beijing",
    "France",
    "Germany",
    "United Kingdom",
    "Switzerland",
    "Poland",
    "Italy",
    "Japan",
    "South Korea",
    "China",
    "Philippines",
    "Canada",
    "Ireland",
    "Saudi Arabia",
    "Israel",
    "Qatar",
    "Argentina",
    "India",
    "Paris",
];

/// Large US cities that titles name without a state suffix.
pub const COMMON_CITIES: [(&str, &str); 45] = [
    ("Austin", "TX"),
    ("Atlanta", "GA"),
    ("Chicago", "IL"),
    ("Detroit", "MI"),
    ("Milwaukee", "WI"),
    ("Las Vegas", "NV"),
    ("Minneapolis", "MN"),
    ("Phoenix", "AZ"),
    ("Pittsburgh", "PA"),
    ("Philadelphia", "PA"),
    ("Miami", "FL"),
    ("Tampa", "FL"),
    ("Orlando", "FL"),
    ("Jacksonville", "FL"),
    ("Cleveland", "OH"),
    ("Cincinnati", "OH"),
    ("Columbus", "OH"),
    ("Doral", "FL"),
    ("West Palm Beach", "FL"),
    ("Nashville", "TN"),
    ("Charlotte", "NC"),
    ("Raleigh", "NC"),
    ("Greensboro", "NC"),
    ("Houston", "TX"),
    ("Dallas", "TX"),
    ("San Antonio", "TX"),
    ("Los Angeles", "CA"),
    ("San Francisco", "CA"),
    ("San Diego", "CA"),
    ("Denver", "CO"),
    ("Seattle", "WA"),
    ("Portland", "OR"),
    ("Boston", "MA"),
    ("Baltimore", "MD"),
    ("St. Louis", "MO"),
    ("Kansas City", "MO"),
    ("Indianapolis", "IN"),
    ("New Orleans", "LA"),
    ("Salt Lake City", "UT"),
    ("Louisville", "KY"),
    ("Richmond", "VA"),
    ("Oklahoma City", "OK"),
    ("Tulsa", "OK"),
    ("El Paso", "TX"),
    ("Memphis", "TN"),
];

/// Transliterated, lowercased copy of a phrase used for table comparisons.
pub fn fold(phrase: &str) -> String {
    unidecode(phrase).to_lowercase()
}

pub static OVERRIDE_KEYS: Lazy<Vec<(String, &'static str, &'static str)>> = Lazy::new(|| {
    OVERRIDES
        .iter()
        .map(|(key, town, code)| (fold(key), *town, *code))
        .collect()
});

pub static INTERNATIONAL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    INTERNATIONAL_LOCATIONS
        .iter()
        .filter_map(|name| {
            match Regex::new(&format!(r"(?i)\b{}\b", escape(name))) {
                Ok(pattern) => Some((*name, pattern)),
                Err(e) => {
                    tracing::error!("Failed to compile pattern for {}: {:?}", name, e);
                    None
                }
            }
        })
        .collect()
});

pub fn lookup_city(town: &str) -> Option<&'static str> {
    COMMON_CITIES
        .iter()
        .find(|(city, _)| *city == town)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_international_pattern_compiles() {
        assert_eq!(INTERNATIONAL_PATTERNS.len(), INTERNATIONAL_LOCATIONS.len());
    }

    #[test]
    fn patterns_keep_declared_order() {
        let names: Vec<&str> = INTERNATIONAL_PATTERNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, INTERNATIONAL_LOCATIONS.to_vec());
    }

    #[test]
    fn fold_transliterates_and_lowercases() {
        assert_eq!(fold("Mar-a-Lago"), "mar-a-lago");
        assert_eq!(fold("Québec"), "quebec");
    }

    #[test]
    fn city_lookup_is_exact() {
        assert_eq!(lookup_city("Columbus"), Some("OH"));
        assert_eq!(lookup_city("Columbus, OH"), None);
        assert_eq!(lookup_city("columbus"), None);
    }
}
