use crate::location::canonical::CanonicalLocation;
use anyhow::anyhow;
use std::{collections::HashMap, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMode {
    /// Keyed on the full display string, for the top locations listing.
    Label,
    /// Keyed on the state code, for the choropleth. Non-US locations are only counted as excluded.
    State,
}

impl FromStr for AggregateMode {
    type Err = anyhow::Error;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.trim() {
            "label" => Ok(AggregateMode::Label),
            "state" => Ok(AggregateMode::State),
            other => Err(anyhow!("Unknown aggregate mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub mode: AggregateMode,
    /// Highest count first; ties keep the order keys were first seen.
    pub counts: Vec<(String, usize)>,
    pub excluded_count: usize,
}

impl Aggregate {
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// Number of locations that landed in a bucket.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

pub fn aggregate<'a, I>(locations: I, mode: AggregateMode) -> Aggregate
where
    I: IntoIterator<Item = &'a CanonicalLocation>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut excluded_count = 0;

    for location in locations {
        let key = match mode {
            AggregateMode::Label => location.to_string(),
            AggregateMode::State => match location.state_code() {
                Some(state) => state.to_string(),
                None => {
                    excluded_count += 1;
                    continue;
                }
            },
        };

        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // Stable sort, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Aggregate {
        mode,
        counts,
        excluded_count,
    }
}
