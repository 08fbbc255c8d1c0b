//! End-to-end tests for the fan-out orchestration against mocked
//! directory and directions servers.

use kitchenfinder_lib::{
    find_closest, DirectionsClient, Error, FinderOutcome, KitchenDirectory, Metric,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kitchen_record(id: &str, name: &str, lat: f64) -> serde_json::Value {
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

/// Mount the three-kitchen directory fixture and return the clients.
async fn three_kitchen_setup(server: &MockServer) -> (KitchenDirectory, DirectionsClient) {
    let directory_body = serde_json::json!([
        kitchen_record("k-1", "First", 1.5),
        kitchen_record("k-2", "Second", 2.5),
        kitchen_record("k-3", "Third", 3.5),
    ]);

    Mock::given(method("GET"))
        .and(path("/api/kitchens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&directory_body))
        .mount(server)
        .await;

    let directory = KitchenDirectory::new(&format!("{}/api/kitchens", server.uri()), 30)
        .expect("directory client should build");
    let directions = DirectionsClient::new(
        &format!("{}/maps/api/directions/json", server.uri()),
        "test-key",
        30,
    )
    .expect("directions client should build");

    (directory, directions)
}

/// Mount a directions response for the kitchen at the given latitude.
async fn mount_directions(server: &MockServer, lat: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .and(query_param("destination", format!("{lat},0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn selects_kitchen_with_smallest_duration_by_default_metric() {
    let server = MockServer::start().await;
    let (directory, directions) = three_kitchen_setup(&server).await;

    mount_directions(&server, "1.5", directions_body(9000, 500)).await;
    mount_directions(&server, "2.5", directions_body(9500, 300)).await;
    mount_directions(&server, "3.5", directions_body(1000, 800)).await;

    let outcome = find_closest(&directory, &directions, "Pasadena, CA", Metric::default())
        .await
        .expect("search should succeed");

    let FinderOutcome::Closest(winner) = outcome else {
        panic!("expected a winner, got {outcome:?}");
    };
    assert_eq!(winner.kitchen.id, "k-2");
    assert_eq!(winner.duration.value, 300);
}

#[tokio::test]
async fn selects_kitchen_with_smallest_distance_when_requested() {
    let server = MockServer::start().await;
    let (directory, directions) = three_kitchen_setup(&server).await;

    mount_directions(&server, "1.5", directions_body(9000, 500)).await;
    mount_directions(&server, "2.5", directions_body(9500, 300)).await;
    mount_directions(&server, "3.5", directions_body(1000, 800)).await;

    let outcome = find_closest(&directory, &directions, "Pasadena, CA", Metric::Distance)
        .await
        .expect("search should succeed");

    let FinderOutcome::Closest(winner) = outcome else {
        panic!("expected a winner, got {outcome:?}");
    };
    assert_eq!(winner.kitchen.id, "k-3");
}

#[tokio::test]
async fn one_unresolvable_address_discards_all_partial_successes() {
    let server = MockServer::start().await;
    let (directory, directions) = three_kitchen_setup(&server).await;

    mount_directions(&server, "1.5", directions_body(9000, 500)).await;
    mount_directions(&server, "2.5", serde_json::json!({ "routes": [] })).await;
    mount_directions(&server, "3.5", directions_body(1000, 800)).await;

    let outcome = find_closest(&directory, &directions, "nowhere at all", Metric::Duration)
        .await
        .expect("degraded lookup is not an error");

    assert_eq!(outcome, FinderOutcome::AddressNotFound);
}

#[tokio::test]
async fn directory_failure_propagates_directory_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/kitchens"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let directory = KitchenDirectory::new(&format!("{}/api/kitchens", server.uri()), 30)
        .expect("directory client should build");
    let directions = DirectionsClient::new(
        &format!("{}/maps/api/directions/json", server.uri()),
        "test-key",
        30,
    )
    .expect("directions client should build");

    let err = find_closest(&directory, &directions, "Pasadena, CA", Metric::Duration)
        .await
        .expect_err("directory failure should propagate");

    assert!(matches!(err, Error::Directory));
}

#[tokio::test]
async fn empty_directory_is_an_error_not_a_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/kitchens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let directory = KitchenDirectory::new(&format!("{}/api/kitchens", server.uri()), 30)
        .expect("directory client should build");
    let directions = DirectionsClient::new(
        &format!("{}/maps/api/directions/json", server.uri()),
        "test-key",
        30,
    )
    .expect("directions client should build");

    let err = find_closest(&directory, &directions, "Pasadena, CA", Metric::Duration)
        .await
        .expect_err("empty directory cannot be ranked");

    assert!(matches!(err, Error::EmptyDirectory));
}
