//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::{StubTransportBuilder, Workspace};
use super::*;
use crate::route::run_route_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use routing_core::RoutingError;
use routing_http::ServiceError;
use serde_json::Value;
use std::cell::RefCell;

struct RouteWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    builder: RefCell<StubTransportBuilder>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            builder: RefCell::new(StubTransportBuilder::canned()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args(&self, args: &[&str]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("the points {points}")]
fn given_points(#[from(world)] world: &RouteWorld, points: String) {
    world.push_args(&["--points", points.trim_matches('"')]);
}

#[given("the API key {key}")]
fn given_api_key(#[from(world)] world: &RouteWorld, key: String) {
    world.push_args(&["--api-key", key.trim_matches('"')]);
}

#[given("the vehicle {vehicle}")]
fn given_vehicle(#[from(world)] world: &RouteWorld, vehicle: String) {
    world.push_args(&["--vehicle", vehicle.trim_matches('"')]);
}

#[given("the route is written to a file")]
fn given_output_file(#[from(world)] world: &RouteWorld) {
    let target = world.workspace.path("out/route.json");
    world.push_args(&["--output", target.as_str()]);
}

#[given("the service rejects the key")]
fn given_rejected_key(#[from(world)] world: &RouteWorld) {
    world
        .builder
        .replace(StubTransportBuilder::answering(401, None));
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let mut argv = vec!["routing".to_owned(), "route".to_owned()];
    argv.extend(world.cli_args.borrow().iter().cloned());
    let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let builder = world.builder.borrow();
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &*builder, &mut *buffer)
        }
        Command::Parse(_) => panic!("expected route command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints a route with {points} points")]
fn prints_route(#[from(world)] world: &RouteWorld, points: usize) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let route: Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let printed = route["points"].as_array().expect("points array").len();
    assert_eq!(printed, points);
}

#[then("the route file holds {instructions} instructions")]
fn route_file_holds(#[from(world)] world: &RouteWorld, instructions: usize) {
    assert!(world.stdout.borrow().is_empty());
    let contents = std::fs::read_to_string(world.workspace.path("out/route.json"))
        .expect("route file written");
    let route: Value = serde_json::from_str(&contents).expect("file should be JSON");
    let written = route["instructions"].as_array().expect("instructions array").len();
    assert_eq!(written, instructions);
}

#[then("one request asked for the {vehicle} profile")]
fn one_request_for(#[from(world)] world: &RouteWorld, vehicle: String) {
    let requests = world.builder.borrow().transport.requests();
    assert_eq!(requests.len(), 1);
    let url = requests.first().expect("one request recorded");
    let sent = url
        .query_pairs()
        .find(|(key, _)| key == "vehicle")
        .map(|(_, value)| value.into_owned());
    assert_eq!(sent.as_deref(), Some(vehicle.trim_matches('"')));
}

#[then("the command fails because the API key is missing")]
fn fails_missing_key(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_ROUTE_API_KEY),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the point {value} is invalid")]
fn fails_invalid_point(#[from(world)] world: &RouteWorld, value: String) {
    match &*world.error() {
        CliError::InvalidPoint { value: rejected } => {
            assert_eq!(rejected, value.trim_matches('"'));
        }
        other => panic!("expected InvalidPoint, found {other:?}"),
    }
}

#[then("the command fails because the service refused the request")]
fn fails_unauthorised(#[from(world)] world: &RouteWorld) {
    match &*world.error() {
        CliError::Route(ServiceError::Routing(RoutingError::Unauthorised)) => {}
        other => panic!("expected Unauthorised, found {other:?}"),
    }
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_happy_path, "printing a route as JSON");
register_route_scenario!(route_to_file, "writing a route to a file");
register_route_scenario!(route_missing_key, "rejecting a missing API key");
register_route_scenario!(route_invalid_point, "rejecting a malformed point");
register_route_scenario!(route_unauthorised, "reporting an unauthorised key");
