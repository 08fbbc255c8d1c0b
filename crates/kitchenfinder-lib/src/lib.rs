//! Closest-kitchen finder library entry points.
//!
//! This crate exposes the kitchen directory client, the directions client,
//! and the fan-out orchestration that ranks kitchens by travel distance or
//! duration from a source address. Higher-level consumers (the Lambda
//! handler) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod config;
pub mod directions;
pub mod error;
mod fetch;
pub mod finder;
pub mod kitchen;
pub mod selector;

pub use config::Config;
pub use directions::{
    DirectionsClient, EnrichedKitchen, LegMeasure, TravelInfo, TravelOutcome,
    ADDRESS_NOT_FOUND_MESSAGE,
};
pub use error::{Error, Result};
pub use finder::{find_closest, FinderOutcome};
pub use kitchen::{Kitchen, KitchenDirectory, Location};
pub use selector::{closest, Metric};
