//! Structural validation of a decoded success body.

use log::debug;
use serde_json::Value;

use super::elements::{instruction_from_json, point_from_json};
use crate::{BoundingBox, CoordinateReferenceSystem, Point, Route, RoutingError};

/// Build a [`Route`] from the first path of a decoded success body.
///
/// Sections are checked in a fixed order and the first one missing decides
/// the error. Malformed instructions and coordinate pairs are dropped, as are
/// instructions whose interval does not address the parsed points.
///
/// # Errors
///
/// - [`RoutingError::FailedToParseJson`] when there is no path object or its
///   `crs.properties.name` is not a known reference system.
/// - [`RoutingError::InvalidBoundingBox`] when `bbox` is not four numbers.
/// - [`RoutingError::MissingInstructions`] when `instructions` is not an
///   array.
/// - [`RoutingError::MissingCoordinates`] when `points.coordinates` is not an
///   array.
///
/// # Examples
/// ```
/// use routing_core::{RoutingError, parse::route_from_json};
/// use serde_json::json;
///
/// let body = json!({"paths": [{
///     "crs": {"properties": {"name": "EPSG:27700"}},
///     "bbox": [0.0, 0.0, 1.0],
/// }]});
/// assert_eq!(route_from_json(&body), Err(RoutingError::InvalidBoundingBox));
/// ```
pub fn route_from_json(json: &Value) -> Result<Route, RoutingError> {
    let path = first_path(json).ok_or(RoutingError::FailedToParseJson)?;
    let crs = path_crs(path).ok_or(RoutingError::FailedToParseJson)?;
    let distance = number_or_zero(path, "distance");
    let time = number_or_zero(path, "time");
    let bbox = path
        .get("bbox")
        .and_then(bounding_box)
        .ok_or(RoutingError::InvalidBoundingBox)?;
    let raw_instructions = path
        .get("instructions")
        .and_then(Value::as_array)
        .ok_or(RoutingError::MissingInstructions)?;
    let raw_points = path
        .pointer("/points/coordinates")
        .and_then(Value::as_array)
        .ok_or(RoutingError::MissingCoordinates)?;

    let points = convert_elements(raw_points, "coordinate", point_from_json);
    let instructions = convert_elements(raw_instructions, "instruction", instruction_from_json)
        .into_iter()
        .filter(|instruction| {
            let fits = instruction.fits_within(points.len());
            if !fits {
                debug!(
                    "dropping instruction covering points {:?}; route has {} points",
                    instruction.point_range(),
                    points.len()
                );
            }
            fits
        })
        .collect();

    Ok(Route::from_validated(
        crs,
        distance,
        time,
        instructions,
        bbox,
        points,
    ))
}

fn first_path(json: &Value) -> Option<&Value> {
    json.get("paths")?
        .as_array()?
        .first()
        .filter(|path| path.is_object())
}

fn path_crs(path: &Value) -> Option<CoordinateReferenceSystem> {
    let name = path.pointer("/crs/properties/name")?.as_str()?;
    name.parse::<CoordinateReferenceSystem>()
        .map_err(|err| debug!("route path uses an unsupported reference system: {err}"))
        .ok()
}

fn number_or_zero(path: &Value, key: &str) -> f64 {
    path.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn bounding_box(value: &Value) -> Option<BoundingBox> {
    match value.as_array()?.as_slice() {
        [min_x, min_y, max_x, max_y] => Some(BoundingBox::new(
            Point::new(min_x.as_f64()?, min_y.as_f64()?),
            Point::new(max_x.as_f64()?, max_y.as_f64()?),
        )),
        _ => None,
    }
}

/// Convert each element, logging and skipping those that do not convert.
fn convert_elements<T>(
    elements: &[Value],
    kind: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let converted = convert(element);
            if converted.is_none() {
                debug!("dropping malformed {kind} at index {index}");
            }
            converted
        })
        .collect()
}
