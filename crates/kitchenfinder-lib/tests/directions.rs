//! Integration tests for `DirectionsClient` using wiremock HTTP mocks.

use kitchenfinder_lib::{DirectionsClient, Error, Kitchen, Location, TravelOutcome};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn directions_client(server: &MockServer) -> DirectionsClient {
    DirectionsClient::new(
        &format!("{}/maps/api/directions/json", server.uri()),
        "test-key",
        30,
    )
    .expect("client construction should not fail")
}

fn kitchen() -> Kitchen {
    Kitchen {
        id: "k-1".to_string(),
        name: "Downtown".to_string(),
        address: "729 N Pennsylvania St".to_string(),
        city: "Indianapolis".to_string(),
        state: "IN".to_string(),
        zip: "46204".to_string(),
        location: Location {
            lat: 39.776,
            lng: -86.156,
        },
    }
}

fn directions_body(distance: i64, duration: i64) -> serde_json::Value {
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

#[tokio::test]
async fn travel_info_extracts_first_leg_of_first_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .and(query_param("origin", "Pasadena, CA"))
        .and(query_param("destination", "39.776,-86.156"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directions_body(4200, 300)))
        .mount(&server)
        .await;

    let outcome = directions_client(&server)
        .travel_info("Pasadena, CA", &kitchen())
        .await
        .expect("should resolve travel info");

    let TravelOutcome::Resolved(travel) = outcome else {
        panic!("expected resolved travel info, got {outcome:?}");
    };
    assert_eq!(travel.distance.value, 4200);
    assert_eq!(travel.duration.value, 300);
    assert_eq!(travel.duration.text, "300 s");
}

#[tokio::test]
async fn missing_routes_resolves_to_address_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "routes": [] })),
        )
        .mount(&server)
        .await;

    let outcome = directions_client(&server)
        .travel_info("nowhere at all", &kitchen())
        .await
        .expect("no-route lookup is a successful call");

    assert_eq!(outcome, TravelOutcome::AddressNotFound);
}

#[tokio::test]
async fn absent_routes_field_resolves_to_address_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ZERO_RESULTS" })),
        )
        .mount(&server)
        .await;

    let outcome = directions_client(&server)
        .travel_info("nowhere at all", &kitchen())
        .await
        .expect("no-route lookup is a successful call");

    assert_eq!(outcome, TravelOutcome::AddressNotFound);
}

#[tokio::test]
async fn route_without_legs_maps_to_directions_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "routes": [ { "legs": [] } ] })),
        )
        .mount(&server)
        .await;

    let err = directions_client(&server)
        .travel_info("Pasadena, CA", &kitchen())
        .await
        .expect_err("legless route is malformed");

    assert!(matches!(err, Error::Directions));
    assert_eq!(err.to_string(), "Could not complete directions request");
}

#[tokio::test]
async fn malformed_body_maps_to_directions_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = directions_client(&server)
        .travel_info("Pasadena, CA", &kitchen())
        .await
        .expect_err("parse failure should error");

    assert!(matches!(err, Error::Directions));
}
