//! End-to-end planner tests against mocked GraphHopper and Nominatim servers

use application::{ApplicationError, PanelOutcome, RouteRequest};
use domain::{DistanceUnit, TravelMode};
use infrastructure::{AppConfig, build_route_planner};
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mocks(graphhopper: &MockServer, nominatim: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.graphhopper.base_url = graphhopper.uri();
    config.graphhopper.api_key = SecretString::from("test-key".to_string());
    config.graphhopper.timeout_secs = 5;
    config.nominatim.base_url = nominatim.uri();
    config.nominatim.timeout_secs = 5;
    config
}

async fn mount_geocode(server: &MockServer, query: &str, lat: f64, lng: f64) {
    let body = serde_json::json!({
        "hits": [{ "point": { "lat": lat, "lng": lng }, "name": query, "country": "Germany" }]
    });
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", query))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_route(server: &MockServer, vehicle: &str) {
    let body = serde_json::json!({
        "paths": [{
            "distance": 289_000.0,
            "time": 10_800_000,
            "instructions": [
                { "text": "Head north", "distance": 1234.5 },
                { "text": "Arrive at destination", "distance": 0.0 }
            ]
        }]
    });
    Mock::given(method("GET"))
        .and(path("/route"))
        .and(query_param("vehicle", vehicle))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_plan_route_with_places() {
    let graphhopper = MockServer::start().await;
    let nominatim = MockServer::start().await;

    mount_geocode(&graphhopper, "Berlin", 52.52, 13.405).await;
    mount_geocode(&graphhopper, "Hamburg", 53.55, 9.99).await;
    mount_route(&graphhopper, "car").await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "restaurant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "display_name": "Zur Linde", "lat": "52.5", "lon": "13.4" }
        ])))
        .mount(&nominatim)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "fuel"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&nominatim)
        .await;

    let planner = build_route_planner(&config_for_mocks(&graphhopper, &nominatim)).unwrap();
    let plan = planner
        .plan(&RouteRequest::new("Berlin", "Hamburg"))
        .await
        .unwrap();

    assert_eq!(plan.start.display_name(), "Berlin, Germany");
    assert_eq!(plan.summary.distance_text, "289.0 km");
    assert_eq!(plan.summary.duration_text, "03:00:00");
    assert_eq!(plan.summary.step_texts[0], "1. Head north (1.23 km)");

    // three anchors, restaurant and fuel each
    assert_eq!(plan.places.len(), 6);
    let found = plan
        .places
        .iter()
        .filter(|p| matches!(p.outcome, PanelOutcome::Found { .. }))
        .count();
    let unavailable = plan
        .places
        .iter()
        .filter(|p| matches!(p.outcome, PanelOutcome::Unavailable { .. }))
        .count();
    assert_eq!(found, 3);
    assert_eq!(unavailable, 3);
}

#[tokio::test]
async fn test_plan_bike_imperial_without_places() {
    let graphhopper = MockServer::start().await;
    let nominatim = MockServer::start().await;

    mount_geocode(&graphhopper, "Berlin", 52.52, 13.405).await;
    mount_geocode(&graphhopper, "Potsdam", 52.39, 13.06).await;
    mount_route(&graphhopper, "bike").await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&nominatim)
        .await;

    let planner = build_route_planner(&config_for_mocks(&graphhopper, &nominatim)).unwrap();
    let request = RouteRequest::new("Berlin", "Potsdam")
        .with_mode(TravelMode::Bike)
        .with_unit(DistanceUnit::Imperial)
        .without_places();
    let plan = planner.plan(&request).await.unwrap();

    assert_eq!(plan.summary.distance_text, "179.6 miles");
    assert!(plan.places.is_empty());
}

#[tokio::test]
async fn test_unknown_location_is_no_match() {
    let graphhopper = MockServer::start().await;
    let nominatim = MockServer::start().await;

    mount_geocode(&graphhopper, "Berlin", 52.52, 13.405).await;
    Mock::given(method("GET"))
        .and(path("/geocode"))
        .and(query_param("q", "Xyzzyville"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"hits": []}"#))
        .mount(&graphhopper)
        .await;

    let planner = build_route_planner(&config_for_mocks(&graphhopper, &nominatim)).unwrap();
    let err = planner
        .plan(&RouteRequest::new("Berlin", "Xyzzyville"))
        .await
        .unwrap_err();

    assert!(err.is_empty_state());
    assert!(err.user_message().contains("Xyzzyville"));
}

#[tokio::test]
async fn test_invalid_key_is_upstream_unavailable() {
    let graphhopper = MockServer::start().await;
    let nominatim = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message": "Wrong credentials"}"#),
        )
        .mount(&graphhopper)
        .await;

    let planner = build_route_planner(&config_for_mocks(&graphhopper, &nominatim)).unwrap();
    let err = planner
        .plan(&RouteRequest::new("Berlin", "Hamburg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::UpstreamUnavailable(ref m) if m.contains("401")));
}

#[tokio::test]
async fn test_same_locations_rejected_without_requests() {
    let graphhopper = MockServer::start().await;
    let nominatim = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&graphhopper)
        .await;

    let planner = build_route_planner(&config_for_mocks(&graphhopper, &nominatim)).unwrap();
    let err = planner
        .plan(&RouteRequest::new("Berlin", "berlin"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApplicationError::InvalidInput("Start and destination cannot be the same.".to_string())
    );
}
