use crate::location::canonical::{CanonicalLocation, StateCode};
use anyhow::anyhow;
use std::str::FromStr;

const WEST_COAST: [&str; 3] = ["CA", "OR", "WA"];
const EAST_COAST: [&str; 14] = [
    "ME", "NH", "MA", "RI", "CT", "NY", "NJ", "DE", "MD", "VA", "NC", "SC", "GA", "FL",
];
const NON_CONTIGUOUS: [&str; 2] = ["AK", "HI"];

const BLUE_STATES: [&str; 23] = [
    "CA", "OR", "WA", "NV", "AZ", "NM", "CO",
    "MN", "IL", "MI", "WI",
    "NY", "VT", "ME", "MA", "RI", "CT",
    "NJ", "DE", "MD", "DC", "HI", "VA",
];
const RED_STATES: [&str; 21] = [
    "ID", "MT", "WY", "UT",
    "ND", "SD", "NE", "KS", "OK",
    "TX", "MO", "AR", "LA",
    "IN", "KY", "TN", "MS", "AL",
    "WV", "SC", "AK",
];
const SWING_STATES: [&str; 6] = ["PA", "GA", "NC", "FL", "OH", "IA"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coast {
    WestCoast,
    EastCoast,
    NonContiguous,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lean {
    Blue,
    Red,
    Swing,
    /// Not on any lean list. Currently only NH.
    NoTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTags {
    pub coast: Coast,
    pub lean: Lean,
}

pub fn coast_of(state: StateCode) -> Coast {
    let code = state.as_str();
    if WEST_COAST.contains(&code) {
        Coast::WestCoast
    } else if EAST_COAST.contains(&code) {
        Coast::EastCoast
    } else if NON_CONTIGUOUS.contains(&code) {
        Coast::NonContiguous
    } else {
        Coast::Middle
    }
}

pub fn lean_of(state: StateCode) -> Lean {
    let code = state.as_str();
    if BLUE_STATES.contains(&code) {
        Lean::Blue
    } else if RED_STATES.contains(&code) {
        Lean::Red
    } else if SWING_STATES.contains(&code) {
        Lean::Swing
    } else {
        Lean::NoTag
    }
}

/// Coast and lean tags for a US place; `None` for `Abroad` and `Unknown`.
pub fn region_tags(location: &CanonicalLocation) -> Option<RegionTags> {
    let state = location.state_code()?;
    Some(RegionTags {
        coast: coast_of(state),
        lean: lean_of(state),
    })
}

/// The location filter presets offered to analysts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionPreset {
    #[default]
    All,
    WestCoast,
    EastCoast,
    MiddleState,
    NonContiguous,
    BlueState,
    RedState,
    SwingState,
    Abroad,
}

impl RegionPreset {
    pub fn label(&self) -> &'static str {
        match self {
            RegionPreset::All => "All",
            RegionPreset::WestCoast => "West Coast",
            RegionPreset::EastCoast => "East Coast",
            RegionPreset::MiddleState => "Middle State",
            RegionPreset::NonContiguous => "Non Contiguous",
            RegionPreset::BlueState => "Blue State",
            RegionPreset::RedState => "Red State",
            RegionPreset::SwingState => "Swing State",
            RegionPreset::Abroad => "Abroad",
        }
    }
}

impl FromStr for RegionPreset {
    type Err = anyhow::Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "All" => Ok(RegionPreset::All),
            "West Coast" => Ok(RegionPreset::WestCoast),
            "East Coast" => Ok(RegionPreset::EastCoast),
            "Middle State" => Ok(RegionPreset::MiddleState),
            "Non Contiguous" => Ok(RegionPreset::NonContiguous),
            "Blue State" => Ok(RegionPreset::BlueState),
            "Red State" => Ok(RegionPreset::RedState),
            "Swing State" => Ok(RegionPreset::SwingState),
            "Abroad" => Ok(RegionPreset::Abroad),
            other => Err(anyhow!("Unknown location preset: {}", other)),
        }
    }
}

/// Record predicate for a filter preset. `All` lets everything through.
pub fn classify(location: &CanonicalLocation, preset: RegionPreset) -> bool {
    match preset {
        RegionPreset::All => return true,
        RegionPreset::Abroad => return *location == CanonicalLocation::Abroad,
        _ => (),
    }

    let Some(tags) = region_tags(location) else {
        return false;
    };

    match preset {
        RegionPreset::WestCoast => tags.coast == Coast::WestCoast,
        RegionPreset::EastCoast => tags.coast == Coast::EastCoast,
        RegionPreset::MiddleState => tags.coast == Coast::Middle,
        RegionPreset::NonContiguous => tags.coast == Coast::NonContiguous,
        RegionPreset::BlueState => tags.lean == Lean::Blue,
        RegionPreset::RedState => tags.lean == Lean::Red,
        RegionPreset::SwingState => tags.lean == Lean::Swing,
        RegionPreset::All | RegionPreset::Abroad => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::states::STATE_CODES;

    fn us(town: &str, code: &str) -> CanonicalLocation {
        CanonicalLocation::us_place(town, code).unwrap()
    }

    fn lean(town: &str, code: &str) -> Option<Lean> {
        region_tags(&us(town, code)).map(|tags| tags.lean)
    }

    #[test]
    fn lean_axis() {
        assert_eq!(lean("Austin", "TX"), Some(Lean::Red));
        assert_eq!(lean("Sacramento", "CA"), Some(Lean::Blue));
        assert_eq!(lean("Columbus", "OH"), Some(Lean::Swing));
        assert_eq!(lean("Washington", "DC"), Some(Lean::Blue));
        assert_eq!(lean("Manchester", "NH"), Some(Lean::NoTag));
    }

    #[test]
    fn coast_axis() {
        let coast = |code: &str| region_tags(&us("", code)).map(|tags| tags.coast);
        assert_eq!(coast("OR"), Some(Coast::WestCoast));
        assert_eq!(coast("GA"), Some(Coast::EastCoast));
        assert_eq!(coast("HI"), Some(Coast::NonContiguous));
        assert_eq!(coast("KS"), Some(Coast::Middle));
        assert_eq!(coast("DC"), Some(Coast::Middle));
    }

    #[test]
    fn non_us_locations_have_no_tags() {
        assert_eq!(region_tags(&CanonicalLocation::Abroad), None);
        assert_eq!(region_tags(&CanonicalLocation::Unknown), None);
    }

    #[test]
    fn lean_lists_are_disjoint() {
        for code in BLUE_STATES {
            assert!(!RED_STATES.contains(&code) && !SWING_STATES.contains(&code), "{code}");
        }
        for code in RED_STATES {
            assert!(!SWING_STATES.contains(&code), "{code}");
        }
    }

    #[test]
    fn only_new_hampshire_is_untagged() {
        let untagged: Vec<&str> = STATE_CODES
            .into_iter()
            .filter(|code| lean_of(StateCode::new(code).unwrap()) == Lean::NoTag)
            .collect();
        assert_eq!(untagged, vec!["NH"]);
    }

    #[test]
    fn presets_parse_from_labels() {
        for preset in [
            RegionPreset::All,
            RegionPreset::WestCoast,
            RegionPreset::EastCoast,
            RegionPreset::MiddleState,
            RegionPreset::NonContiguous,
            RegionPreset::BlueState,
            RegionPreset::RedState,
            RegionPreset::SwingState,
            RegionPreset::Abroad,
        ] {
            assert_eq!(preset.label().parse::<RegionPreset>().unwrap(), preset);
        }
        assert!("Purple State".parse::<RegionPreset>().is_err());
    }

    #[test]
    fn all_passes_everything() {
        assert!(classify(&CanonicalLocation::Unknown, RegionPreset::All));
        assert!(classify(&CanonicalLocation::Abroad, RegionPreset::All));
        assert!(classify(&us("Erie", "PA"), RegionPreset::All));
    }

    #[test]
    fn abroad_preset_only_matches_abroad() {
        assert!(classify(&CanonicalLocation::Abroad, RegionPreset::Abroad));
        assert!(!classify(&CanonicalLocation::Unknown, RegionPreset::Abroad));
        assert!(!classify(&us("Erie", "PA"), RegionPreset::Abroad));
    }

    #[test]
    fn us_presets_reject_non_us_locations() {
        assert!(!classify(&CanonicalLocation::Abroad, RegionPreset::MiddleState));
        assert!(!classify(&CanonicalLocation::Unknown, RegionPreset::SwingState));
    }

    #[test]
    fn presets_test_one_axis() {
        let tampa = us("Tampa", "FL");
        assert!(classify(&tampa, RegionPreset::EastCoast));
        assert!(classify(&tampa, RegionPreset::SwingState));
        assert!(!classify(&tampa, RegionPreset::BlueState));
        assert!(!classify(&tampa, RegionPreset::MiddleState));
        assert!(classify(&us("Anchorage", "AK"), RegionPreset::NonContiguous));
        assert!(classify(&us("Anchorage", "AK"), RegionPreset::RedState));
        assert!(!classify(&us("Manchester", "NH"), RegionPreset::BlueState));
        assert!(classify(&us("Manchester", "NH"), RegionPreset::EastCoast));
    }
}
