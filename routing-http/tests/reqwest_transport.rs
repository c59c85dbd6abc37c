//! End-to-end tests of the default transport against a mock routing API.

use std::time::Duration;

use routing_core::test_support::{CANNED_ROUTE_RESPONSE, canned_route_endpoints};
use routing_core::{CoordinateReferenceSystem, Point, RoutingError, VehicleType};
use routing_http::{RoutingService, RoutingServiceConfig, ServiceError, TransportError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer, config: RoutingServiceConfig) -> RoutingService {
    RoutingService::with_config(config.with_base_url(server.uri())).expect("service should build")
}

fn bng_config() -> RoutingServiceConfig {
    RoutingServiceConfig::new("test-key").with_crs(CoordinateReferenceSystem::Epsg27700)
}

#[tokio::test]
async fn fetches_and_parses_canned_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/routing_api/route"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("points_encoded", "false"))
        .and(query_param("srs", "EPSG:27700"))
        .and(query_param("vehicle", "car"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CANNED_ROUTE_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let route = service_for(&server, bng_config())
        .route_between(&canned_route_endpoints())
        .await
        .expect("canned route should parse");

    assert_eq!(route.points().len(), 62);
    assert_eq!(route.instructions().len(), 4);
    assert_eq!(route.crs(), CoordinateReferenceSystem::Epsg27700);
}

#[tokio::test]
async fn sends_points_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonvehicle_routing_api/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CANNED_ROUTE_RESPONSE))
        .mount(&server)
        .await;

    let config = bng_config().with_vehicle(VehicleType::Foot);
    service_for(&server, config)
        .route_between(&[
            Point::new(437_400.5, 115_500.0),
            Point::new(437_300.0, 115_400.25),
            Point::new(437_200.0, 115_300.0),
        ])
        .await
        .expect("canned route should parse");

    let received = server.received_requests().await.expect("recording is enabled");
    let request = received.first().expect("one request received");
    let points: Vec<String> = request
        .url
        .query_pairs()
        .filter(|(key, _)| key == "point")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(
        points,
        vec!["437400.5,115500", "437300,115400.25", "437200,115300"]
    );
}

#[tokio::test]
async fn unauthorised_status_maps_to_code_six() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{}"))
        .mount(&server)
        .await;

    let result = service_for(&server, bng_config())
        .route_between(&canned_route_endpoints())
        .await;

    assert_eq!(result, Err(ServiceError::Routing(RoutingError::Unauthorised)));
}

#[tokio::test]
async fn bad_request_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"error":{"message":"Point 2 is not near a road"}}"#),
        )
        .mount(&server)
        .await;

    let result = service_for(&server, bng_config())
        .route_between(&canned_route_endpoints())
        .await;

    assert_eq!(
        result,
        Err(ServiceError::Routing(RoutingError::BadRequest(
            "Point 2 is not near a road".to_owned()
        )))
    );
}

#[tokio::test]
async fn empty_body_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = service_for(&server, bng_config())
        .route_between(&canned_route_endpoints())
        .await;

    assert_eq!(result, Err(ServiceError::Routing(RoutingError::NoDataReceived)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(CANNED_ROUTE_RESPONSE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = bng_config().with_timeout(Duration::from_secs(1));
    let result = service_for(&server, config)
        .route_between(&canned_route_endpoints())
        .await;

    match result {
        Err(ServiceError::Transport(TransportError::Timeout { url, timeout_secs })) => {
            assert_eq!(timeout_secs, 1);
            assert!(url.ends_with("/routing_api/route"));
            assert!(!url.contains("test-key"));
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_fails_without_leaking_the_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    let port = listener.local_addr().expect("listener has an address").port();
    drop(listener);

    let config = bng_config()
        .with_base_url(format!("http://127.0.0.1:{port}"))
        .with_timeout(Duration::from_secs(2));
    let service = RoutingService::with_config(config).expect("service should build");
    let result = service.route_between(&canned_route_endpoints()).await;

    match result {
        Err(ServiceError::Transport(
            TransportError::Network { url, .. } | TransportError::Timeout { url, .. },
        )) => {
            assert!(!url.contains("test-key"));
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
    if let Err(err) = service.route_between(&canned_route_endpoints()).await {
        assert!(!err.to_string().contains("test-key"));
    }
}
