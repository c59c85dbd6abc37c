//! Focused unit tests covering route CLI configuration.

use super::helpers::StubTransportBuilder;
use super::*;
use crate::route::{RouteArgs, RouteConfig, config_from_layers_for_test, parse_points, run_route_with};
use routing_core::{CoordinateReferenceSystem, Point, RoutingError, VehicleType};
use routing_http::ServiceError;
use rstest::rstest;
use std::time::Duration;

fn args_with(points: &str, api_key: &str) -> RouteArgs {
    RouteArgs {
        points: Some(points.to_owned()),
        api_key: Some(api_key.to_owned()),
        ..RouteArgs::default()
    }
}

#[rstest]
#[case("1,2;3,4", vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)])]
#[case(" -0.12 , 51.5 ; -0.2,51.6 ;", vec![Point::new(-0.12, 51.5), Point::new(-0.2, 51.6)])]
#[case("", vec![])]
fn parses_point_lists(#[case] raw: &str, #[case] expected: Vec<Point>) {
    assert_eq!(parse_points(raw).expect("points should parse"), expected);
}

#[rstest]
#[case("1,2;3", "3")]
#[case("1,2;a,b", "a,b")]
#[case("1;2", "1")]
fn rejects_malformed_points(#[case] raw: &str, #[case] bad: &str) {
    match parse_points(raw).expect_err("malformed point should fail") {
        CliError::InvalidPoint { value } => assert_eq!(value, bad),
        other => panic!("expected InvalidPoint, found {other:?}"),
    }
}

#[rstest]
#[case(None, Some("1,2;3,4"), ARG_ROUTE_API_KEY, ENV_ROUTE_API_KEY)]
#[case(Some("key"), None, ARG_ROUTE_POINTS, ENV_ROUTE_POINTS)]
fn converting_without_required_fields_errors(
    #[case] api_key: Option<&str>,
    #[case] points: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RouteArgs {
        api_key: api_key.map(str::to_owned),
        points: points.map(str::to_owned),
        ..RouteArgs::default()
    };
    match RouteConfig::try_from(args).expect_err("missing field should error") {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let config = RouteConfig::try_from(args_with("1,2;3,4", "key")).expect("config should build");
    assert_eq!(config.service.vehicle, VehicleType::Car);
    assert_eq!(config.service.crs, CoordinateReferenceSystem::Epsg3857);
    assert_eq!(config.service.base_url, routing_http::DEFAULT_BASE_URL);
    assert_eq!(config.service.timeout, Duration::from_secs(30));
    assert_eq!(config.output, None);
}

#[rstest]
fn conversion_applies_overrides() {
    let args = RouteArgs {
        vehicle: Some("mtb".to_owned()),
        crs: Some("EPSG:27700".to_owned()),
        base_url: Some("http://localhost:8080".to_owned()),
        timeout_secs: Some(5),
        ..args_with("1,2;3,4", "key")
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.service.vehicle, VehicleType::MountainBike);
    assert_eq!(config.service.crs, CoordinateReferenceSystem::Epsg27700);
    assert_eq!(config.service.base_url, "http://localhost:8080");
    assert_eq!(config.service.timeout, Duration::from_secs(5));
}

#[rstest]
fn conversion_rejects_unknown_codes() {
    let vehicle = RouteArgs {
        vehicle: Some("bicycle".to_owned()),
        ..args_with("1,2;3,4", "key")
    };
    assert!(matches!(
        RouteConfig::try_from(vehicle),
        Err(CliError::Vehicle(_))
    ));

    let crs = RouteArgs {
        crs: Some("EPSG:4326x".to_owned()),
        ..args_with("1,2;3,4", "key")
    };
    assert!(matches!(RouteConfig::try_from(crs), Err(CliError::Crs(_))));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "timeout_secs": "soon" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "api_key": "from-file",
            "vehicle": "foot",
            "base_url": "http://from-file:8080",
        }),
        None,
    );
    composer.push_environment(json!({
        "api_key": "from-env",
        "points": "1,2;3,4",
    }));
    composer.push_cli(json!({ "vehicle": "emv" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.service.api_key, "from-env");
    assert_eq!(config.service.vehicle, VehicleType::EmergencyVehicle);
    assert_eq!(config.service.base_url, "http://from-file:8080");
    assert_eq!(config.points.len(), 2);
}

#[rstest]
fn single_point_fails_without_a_request() {
    let builder = StubTransportBuilder::canned();
    let mut stdout = Vec::new();
    let err = run_route_with(args_with("1,2", "key"), &builder, &mut stdout)
        .expect_err("one point cannot be routed");
    match err {
        CliError::Route(ServiceError::Routing(RoutingError::TooFewPoints)) => {}
        other => panic!("expected TooFewPoints, found {other:?}"),
    }
    assert_eq!(builder.transport.request_count(), 0);
    assert!(stdout.is_empty());
}
