//! Fan-out orchestration: resolve travel info for every kitchen and pick
//! the closest.

use futures::future::join_all;
use tracing::{info, warn};

use crate::directions::{DirectionsClient, EnrichedKitchen, TravelOutcome};
use crate::error::{Error, Result};
use crate::kitchen::KitchenDirectory;
use crate::selector::{closest, Metric};

/// Outcome of a closest-kitchen search.
#[derive(Debug, Clone, PartialEq)]
pub enum FinderOutcome {
    /// The closest kitchen under the requested metric.
    Closest(EnrichedKitchen),
    /// The directions provider could not resolve the source address for
    /// at least one kitchen. Partial successes are discarded; one bad
    /// address invalidates the whole request.
    AddressNotFound,
}

/// Find the closest kitchen to `address` under `metric`.
///
/// Fetches the directory, then issues one directions lookup per kitchen
/// concurrently and waits for all of them to settle; there is no bound on
/// the fan-out width and no cancellation on first failure. If any lookup
/// fails outright the first error is returned; if any lookup cannot
/// resolve the address, the first such failure wins and the whole request
/// degrades to [`FinderOutcome::AddressNotFound`].
///
/// # Errors
///
/// Propagates [`Error::Directory`] and [`Error::Directions`] from the
/// clients, and returns [`Error::EmptyDirectory`] when there are no
/// kitchens to rank.
pub async fn find_closest(
    directory: &KitchenDirectory,
    directions: &DirectionsClient,
    address: &str,
    metric: Metric,
) -> Result<FinderOutcome> {
    let kitchens = directory.kitchens().await?;
    if kitchens.is_empty() {
        return Err(Error::EmptyDirectory);
    }

    let lookups = kitchens
        .iter()
        .map(|kitchen| directions.travel_info(address, kitchen));
    let outcomes = join_all(lookups).await;

    let mut enriched = Vec::with_capacity(kitchens.len());
    for (kitchen, outcome) in kitchens.into_iter().zip(outcomes) {
        match outcome? {
            TravelOutcome::Resolved(travel) => {
                enriched.push(EnrichedKitchen::new(kitchen, travel));
            }
            TravelOutcome::AddressNotFound => {
                warn!(kitchen = %kitchen.name, "address could not be resolved; discarding results");
                return Ok(FinderOutcome::AddressNotFound);
            }
        }
    }

    // Non-empty by construction: every kitchen either enriched the list
    // or short-circuited above.
    let winner = closest(enriched, metric).ok_or(Error::EmptyDirectory)?;

    info!(
        kitchen = %winner.kitchen.name,
        metric = %metric,
        value = winner.metric_value(metric),
        "closest kitchen selected"
    );

    Ok(FinderOutcome::Closest(winner))
}
