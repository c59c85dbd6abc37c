//! Canned responses and sample inputs shared by unit, behaviour and
//! downstream crate tests.

use crate::Point;

/// A captured success body for a four-instruction drive in EPSG:27700.
///
/// The route has 62 points, a total distance of 980.831 and a total time of
/// 79166. Its first instruction is "Continue onto ADANAC DRIVE" covering
/// points `0..=19`.
pub const CANNED_ROUTE_RESPONSE: &str = include_str!("../tests/fixtures/route-epsg27700.json");

/// Error body returned by the service for a rejected request.
pub const CANNED_BAD_REQUEST_RESPONSE: &str =
    r#"{"error":{"message":"Point 1 is out of bounds"}}"#;

/// Error body returned by the service for an internal failure.
pub const CANNED_SERVER_ERROR_RESPONSE: &str =
    r#"{"error":{"message":"Internal server error"}}"#;

/// The start and end of the canned route, in EPSG:27700.
#[must_use]
pub const fn canned_route_endpoints() -> [Point; 2] {
    [
        Point::new(115_640.012_446, 437_165.490_536),
        Point::new(115_173.178_376, 437_388.106_532),
    ]
}

/// `count` distinct points laid out along the easting axis.
#[must_use]
pub fn sample_points(count: usize) -> Vec<Point> {
    (0_u32..)
        .take(count)
        .map(|step| Point::new(f64::from(step), f64::from(step)))
        .collect()
}
