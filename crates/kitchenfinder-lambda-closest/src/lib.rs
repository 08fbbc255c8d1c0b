//! AWS Lambda function for finding the closest kitchen.
//!
//! Validates the inbound request, fans travel-info lookups out across all
//! kitchens, and responds with the single closest one by the requested
//! metric. Every failure path is converted into the response envelope;
//! nothing escapes as an unhandled fault.

use http::StatusCode;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use kitchenfinder_lambda_shared::{
    init_tracing, ApiGatewayEvent, ApiGatewayResponse, FindKitchenRequest, Validate,
};
use kitchenfinder_lib::{
    find_closest, Config, DirectionsClient, FinderOutcome, KitchenDirectory, Result as LibResult,
    ADDRESS_NOT_FOUND_MESSAGE,
};

/// Upstream clients built once at cold start and reused across
/// invocations.
pub struct Clients {
    pub directory: KitchenDirectory,
    pub directions: DirectionsClient,
}

impl Clients {
    /// Build both clients from resolved configuration. The directions API
    /// key is handed over explicitly here; nothing reads it later.
    pub fn from_config(config: &Config) -> LibResult<Self> {
        Ok(Self {
            directory: KitchenDirectory::new(&config.directory_url, config.timeout_secs)?,
            directions: DirectionsClient::new(
                &config.directions_url,
                &config.api_key,
                config.timeout_secs,
            )?,
        })
    }
}

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env()?;
    info!(
        directory_url = %config.directory_url,
        timeout_secs = config.timeout_secs,
        "cold start: building upstream clients"
    );

    // Clients live for the whole process; leak once instead of threading
    // ownership through the service closure.
    let clients: &'static Clients = Box::leak(Box::new(Clients::from_config(&config)?));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(clients, event).await
    }))
    .await
}

/// Lambda handler invoked per request.
pub async fn handler(
    clients: &Clients,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    let request_id = event.context.request_id.clone();

    // An unrecognizable payload falls through to method validation.
    let gateway_event: ApiGatewayEvent =
        serde_json::from_value(event.payload).unwrap_or_default();

    Ok(handle_find_request(clients, &gateway_event, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_find_request(
    clients: &Clients,
    event: &ApiGatewayEvent,
    request_id: &str,
) -> ApiGatewayResponse {
    if !event.is_post() {
        return ApiGatewayResponse::message(StatusCode::BAD_REQUEST, "Invalid request method");
    }

    let request: FindKitchenRequest = match event.body.as_deref().map(serde_json::from_str) {
        Some(Ok(request)) => request,
        Some(Err(e)) => {
            error!(request_id = %request_id, error = %e, "failed to parse request body");
            return ApiGatewayResponse::message(StatusCode::BAD_REQUEST, "Invalid request body");
        }
        None => {
            return ApiGatewayResponse::message(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    if let Err(problem) = request.validate() {
        return ApiGatewayResponse::message(StatusCode::BAD_REQUEST, problem.message);
    }

    // Validated non-empty above.
    let address = request.address.as_deref().unwrap_or_default();
    let metric = request.metric();

    info!(
        request_id = %request_id,
        metric = %metric,
        "handling closest-kitchen request"
    );

    match find_closest(&clients.directory, &clients.directions, address, metric).await {
        Ok(FinderOutcome::Closest(winner)) => match serde_json::to_value(&winner) {
            Ok(payload) => {
                info!(
                    request_id = %request_id,
                    kitchen = %winner.kitchen.name,
                    "closest kitchen returned"
                );
                ApiGatewayResponse::payload(StatusCode::OK, payload)
            }
            Err(e) => {
                error!(request_id = %request_id, error = %e, "failed to serialize winner");
                ApiGatewayResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        },
        Ok(FinderOutcome::AddressNotFound) => {
            ApiGatewayResponse::message(StatusCode::BAD_REQUEST, ADDRESS_NOT_FOUND_MESSAGE)
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "closest-kitchen search failed");
            ApiGatewayResponse::message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
