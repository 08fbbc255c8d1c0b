//! Ranking metric and the closest-kitchen selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::directions::EnrichedKitchen;

/// The field used to rank kitchens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Rank by leg distance in meters.
    Distance,
    /// Rank by leg duration in seconds (default).
    #[default]
    Duration,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Duration => write!(f, "duration"),
        }
    }
}

impl FromStr for Metric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Metric::Distance),
            "duration" => Ok(Metric::Duration),
            _ => Err(()),
        }
    }
}

/// Reduce enriched kitchens to the single minimal entry under `metric`.
///
/// The reduction is stable: only a strictly smaller value replaces the
/// running minimum, so ties keep the earlier-seen kitchen. Returns `None`
/// for an empty input; callers guard that case.
pub fn closest(kitchens: Vec<EnrichedKitchen>, metric: Metric) -> Option<EnrichedKitchen> {
    kitchens.into_iter().reduce(|best, candidate| {
        if candidate.metric_value(metric) < best.metric_value(metric) {
            candidate
        } else {
            best
        }
    })
}
