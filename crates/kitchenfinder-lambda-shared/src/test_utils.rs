//! Test utilities for Lambda handler testing.
//!
//! This module provides event builders and upstream body fixtures shared
//! by the handler test suites.
//!
//! # Usage
//!
//! These utilities are only available in test builds:
//!
//! ```ignore
//! use kitchenfinder_lambda_shared::test_utils::{post_event, directions_body};
//!
//! let event = post_event(&serde_json::json!({ "address": "Pasadena, CA" }));
//! ```

use serde_json::Value;

/// Build a POST event with the given request body, JSON-encoded the way
/// API Gateway delivers it.
pub fn post_event(body: &Value) -> Value {
    serde_json::json!({
        "httpMethod": "POST",
        "body": body.to_string(),
    })
}

/// Build an event with an arbitrary method and raw body string.
pub fn raw_event(method: &str, body: &str) -> Value {
    serde_json::json!({
        "httpMethod": method,
        "body": body,
    })
}

/// A raw directory record as the directory endpoint returns it.
pub fn kitchen_record(id: &str, name: &str, lat: f64) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "address_1": "1 Main St",
        "city": "Indianapolis",
        "state": "IN",
        "zip_code": "46204",
        "location": { "lat": lat, "lng": 0.0 }
    })
}

/// A single-route directions response with one leg.
pub fn directions_body(distance: i64, duration: i64) -> Value {
    serde_json::json!({
        "routes": [
            {
                "legs": [
                    {
                        "distance": { "value": distance, "text": format!("{distance} m") },
                        "duration": { "value": duration, "text": format!("{duration} s") }
                    }
                ]
            }
        ]
    })
}

/// A directions response with no routes, signalling an unresolvable
/// address.
pub fn no_routes_body() -> Value {
    serde_json::json!({ "routes": [] })
}

/// Create a mock request ID for testing.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{suffix}")
}
