//! Distinct filter choices derived from the full collection.

use crate::model::Company;
use std::collections::BTreeSet;

/// Distinct industries and locations, each sorted and duplicate-free.
///
/// Always computed from the unfiltered collection so a narrowed view can be
/// broadened again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Every industry present, ascending.
    pub industries: Vec<String>,
    /// Every location present, ascending.
    pub locations: Vec<String>,
}

impl Facets {
    /// Collect the facets of `records`.
    pub fn from_records(records: &[Company]) -> Self {
        let industries: BTreeSet<&str> = records.iter().map(|c| c.industry.as_str()).collect();
        let locations: BTreeSet<&str> = records.iter().map(|c| c.location.as_str()).collect();

        Self {
            industries: industries.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Step through `choices` with `None` ("all") as the slot before the first entry.
///
/// `forward` walks None → first → … → last → None; backwards walks the other way.
/// A current value that is no longer among the choices restarts the cycle.
pub fn cycle_choice(choices: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    if choices.is_empty() {
        return None;
    }
    let position = current.and_then(|value| choices.iter().position(|c| c == value));
    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(choices.len() - 1),
        (Some(i), true) if i + 1 < choices.len() => Some(i + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };
    next.map(|i| choices[i].clone())
}
