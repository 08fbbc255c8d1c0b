//! Kitchen directory client and the canonical kitchen record.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::fetch::{build_client, fetch_json, parse_base_url};

/// Geographic coordinates of a kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Canonical kitchen record, normalized from a raw directory entry.
///
/// Immutable after creation; travel info is attached later by merging
/// into an [`EnrichedKitchen`](crate::directions::EnrichedKitchen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kitchen {
    pub id: String,
    pub name: String,
    /// Street address composed from the directory's two address lines.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub location: Location,
}

/// Raw directory record as returned by the directory endpoint.
#[derive(Debug, Deserialize)]
struct RawKitchen {
    id: String,
    name: String,
    address_1: String,
    #[serde(default)]
    address_2: Option<String>,
    city: String,
    state: String,
    zip_code: String,
    location: Location,
}

impl From<RawKitchen> for Kitchen {
    fn from(raw: RawKitchen) -> Self {
        // Second address line only contributes when present and non-empty.
        let address = match raw.address_2.as_deref().filter(|line| !line.is_empty()) {
            Some(line2) => format!("{} {}", raw.address_1, line2),
            None => raw.address_1,
        };

        Self {
            id: raw.id,
            name: raw.name,
            address,
            city: raw.city,
            state: raw.state,
            zip: raw.zip_code,
            location: raw.location,
        }
    }
}

/// Client for the kitchen-location directory.
///
/// Use [`KitchenDirectory::new`] for production or point `base_url` at a
/// mock server in tests.
pub struct KitchenDirectory {
    client: Client,
    base_url: Url,
}

impl KitchenDirectory {
    /// Creates a directory client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`Error::InvalidEndpoint`] for an unparseable
    /// base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetch the full kitchen list and normalize each record.
    ///
    /// # Errors
    ///
    /// Any fetch, status, or shape failure is logged and replaced by
    /// [`Error::Directory`].
    pub async fn kitchens(&self) -> Result<Vec<Kitchen>> {
        let body = fetch_json(&self.client, self.base_url.clone())
            .await
            .map_err(|e| {
                error!(error = %e, "kitchen directory fetch failed");
                Error::Directory
            })?;

        let raw: Vec<RawKitchen> = serde_json::from_value(body).map_err(|e| {
            error!(error = %e, "kitchen directory response had unexpected shape");
            Error::Directory
        })?;

        let kitchens: Vec<Kitchen> = raw.into_iter().map(Kitchen::from).collect();
        info!(count = kitchens.len(), "kitchen directory loaded");
        Ok(kitchens)
    }
}
