//! Directions provider client and travel-info types.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::fetch::{build_client, fetch_json, parse_base_url};
use crate::kitchen::Kitchen;
use crate::selector::Metric;

/// Fixed message surfaced when the directions provider finds no route.
pub const ADDRESS_NOT_FOUND_MESSAGE: &str = "Could not locate provided address";

/// One leg-level measurement: a raw value plus its display text.
///
/// Mirrors the directions provider's leg structure: `value` is meters for
/// distance and seconds for duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegMeasure {
    pub value: i64,
    pub text: String,
}

/// Distance and duration for the first leg of the first route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelInfo {
    pub distance: LegMeasure,
    pub duration: LegMeasure,
}

/// Outcome of a directions lookup.
///
/// A missing route is a successful lookup with a degraded payload, not an
/// error; callers must match on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelOutcome {
    /// The provider returned a usable route.
    Resolved(TravelInfo),
    /// The provider could not find a route for the source address.
    AddressNotFound,
}

/// A kitchen merged with its computed travel info; the unit ranked by the
/// selector. Serializes with the kitchen fields inline so the response
/// body carries `distance` and `duration` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedKitchen {
    #[serde(flatten)]
    pub kitchen: Kitchen,
    pub distance: LegMeasure,
    pub duration: LegMeasure,
}

impl EnrichedKitchen {
    /// Merge a kitchen with the travel info computed for it.
    pub fn new(kitchen: Kitchen, travel: TravelInfo) -> Self {
        Self {
            kitchen,
            distance: travel.distance,
            duration: travel.duration,
        }
    }

    /// The raw value used for ranking under the given metric.
    pub fn metric_value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Distance => self.distance.value,
            Metric::Duration => self.duration.value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: LegMeasure,
    duration: LegMeasure,
}

/// Client for the directions provider.
///
/// The API key is injected at construction and appended to every request;
/// the client never reads it from the environment itself.
pub struct DirectionsClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl DirectionsClient {
    /// Creates a directions client for the given endpoint and API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`Error::InvalidEndpoint`] for an unparseable
    /// base URL.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
            api_key: api_key.to_owned(),
        })
    }

    /// Query travel distance and duration from `origin` to a kitchen.
    ///
    /// Resolves to [`TravelOutcome::AddressNotFound`] when the provider
    /// returns no routes; that is a successful call, not an error.
    ///
    /// # Errors
    ///
    /// Transport, status, parse, and shape failures (including a route
    /// with no legs) are logged and replaced by [`Error::Directions`].
    pub async fn travel_info(&self, origin: &str, kitchen: &Kitchen) -> Result<TravelOutcome> {
        let url = self.build_url(origin, kitchen);
        let body = fetch_json(&self.client, url).await.map_err(|e| {
            error!(error = %e, kitchen = %kitchen.name, "directions fetch failed");
            Error::Directions
        })?;

        let directions: DirectionsResponse = serde_json::from_value(body).map_err(|e| {
            error!(error = %e, kitchen = %kitchen.name, "directions response had unexpected shape");
            Error::Directions
        })?;

        let Some(route) = directions.routes.into_iter().next() else {
            debug!(kitchen = %kitchen.name, "directions provider returned no routes");
            return Ok(TravelOutcome::AddressNotFound);
        };

        let leg = route.legs.into_iter().next().ok_or_else(|| {
            error!(kitchen = %kitchen.name, "directions route contained no legs");
            Error::Directions
        })?;

        Ok(TravelOutcome::Resolved(TravelInfo {
            distance: leg.distance,
            duration: leg.duration,
        }))
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, origin: &str, kitchen: &Kitchen) -> Url {
        let destination = format!("{},{}", kitchen.location.lat, kitchen.location.lng);
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("origin", origin);
            pairs.append_pair("destination", &destination);
            pairs.append_pair("key", &self.api_key);
        }
        url
    }
}
