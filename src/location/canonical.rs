use super::states::STATE_CODES;
use std::fmt::{self, Display};

/// A two-letter postal code, guaranteed to be one of the 50 states or DC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateCode(&'static str);

impl StateCode {
    pub fn new(code: &str) -> Option<Self> {
        STATE_CODES
            .into_iter()
            .find(|known| *known == code)
            .map(StateCode)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The normalized place a speech was given at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalLocation {
    /// An empty `town` means the place is only known at state level.
    UsPlace { town: String, state: StateCode },
    Abroad,
    Unknown,
}

impl CanonicalLocation {
    pub fn us_place(town: &str, code: &str) -> Option<Self> {
        Some(CanonicalLocation::UsPlace {
            town: town.to_string(),
            state: StateCode::new(code)?,
        })
    }

    pub fn state_code(&self) -> Option<StateCode> {
        match self {
            CanonicalLocation::UsPlace { state, .. } => Some(*state),
            _ => None,
        }
    }

    /// Parses a value persisted by an earlier run. Blank and "Unknown" are unknown,
    /// "Town, ST" and "ST" are US places, anything else is abroad.
    pub fn from_stored(value: &str) -> Self {
        let value = value.trim();
        match value {
            "" | "Unknown" => return CanonicalLocation::Unknown,
            "Abroad" => return CanonicalLocation::Abroad,
            _ => (),
        }

        if let Some((town, code)) = value.rsplit_once(',') {
            if let Some(place) = CanonicalLocation::us_place(town.trim(), code.trim()) {
                return place;
            }
        } else if let Some(place) = CanonicalLocation::us_place("", value) {
            return place;
        }

        tracing::debug!("Treating legacy stored location {:?} as Abroad", value);
        CanonicalLocation::Abroad
    }

    /// Case-insensitive partial match against the display form.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&needle.trim().to_lowercase())
    }
}

impl Display for CanonicalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalLocation::UsPlace { town, state } if town.is_empty() => write!(f, "{}", state),
            CanonicalLocation::UsPlace { town, state } => write!(f, "{}, {}", town, state),
            CanonicalLocation::Abroad => f.write_str("Abroad"),
            CanonicalLocation::Unknown => f.write_str("Unknown"),
        }
    }
}
