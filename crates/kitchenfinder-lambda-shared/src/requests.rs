//! Inbound event and request types with validation.

use serde::{Deserialize, Serialize};

use kitchenfinder_lib::Metric;

/// Validation trait for Lambda request types.
///
/// Implementations should validate all fields and return a
/// [`ValidationError`] for invalid input; the handler maps it to a 400
/// response.
pub trait Validate {
    /// Validate the request, returning an error message if invalid.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A failed request validation, carrying the message surfaced to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The API Gateway proxy event shape the handler consumes.
///
/// Both fields are optional so that an unrecognizable event fails method
/// validation instead of deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiGatewayEvent {
    #[serde(rename = "httpMethod", skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// JSON-encoded request body string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiGatewayEvent {
    /// Whether the event carries the only accepted method.
    pub fn is_post(&self) -> bool {
        self.http_method.as_deref() == Some("POST")
    }
}

/// Request for finding the closest kitchen to a source address.
///
/// `metric` stays a raw string through deserialization so an invalid
/// value produces the field-specific validation message rather than a
/// generic body-parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindKitchenRequest {
    /// Source address to search from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Ranking metric, `"distance"` or `"duration"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

impl FindKitchenRequest {
    /// The validated ranking metric, defaulting to duration.
    ///
    /// Only meaningful after [`Validate::validate`] has passed.
    pub fn metric(&self) -> Metric {
        self.metric
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for FindKitchenRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self
            .address
            .as_deref()
            .map_or(true, |address| address.trim().is_empty())
        {
            return Err(ValidationError::new("Missing address"));
        }

        if let Some(raw) = self.metric.as_deref() {
            if raw.parse::<Metric>().is_err() {
                return Err(ValidationError::new(
                    "Metric must be 'distance' or 'duration'",
                ));
            }
        }

        Ok(())
    }
}
