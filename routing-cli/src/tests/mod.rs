//! Shared test harness modules for the routing CLI.

use super::*;

mod helpers;
mod route_steps;
mod route_unit;
