//! Per-element conversion of instruction and coordinate arrays.

use serde_json::Value;

use crate::{Instruction, Point};

/// Convert one element of the `instructions` array.
///
/// Returns `None` unless the element is an object carrying `sign`, `text`,
/// `time`, `distance` and a non-empty integer `interval`. The first interval
/// entry becomes the start point and the last the end point. Optional fields
/// of the wrong type are ignored rather than rejecting the instruction.
///
/// # Examples
/// ```
/// use routing_core::parse::instruction_from_json;
/// use serde_json::json;
///
/// let element = json!({
///     "sign": 6, "text": "At roundabout, take exit 3", "time": 32653,
///     "distance": 355.701, "interval": [19, 42], "exit_number": 3
/// });
/// let instruction = instruction_from_json(&element).expect("complete instruction");
/// assert_eq!(instruction.point_range(), 19..=42);
/// assert_eq!(instruction.exit_number(), Some(3));
///
/// assert!(instruction_from_json(&json!({"sign": 6, "text": "No interval"})).is_none());
/// ```
#[must_use]
pub fn instruction_from_json(value: &Value) -> Option<Instruction> {
    let object = value.as_object()?;
    let sign = object.get("sign").and_then(as_i32)?;
    let text = object.get("text")?.as_str()?;
    let time = object.get("time")?.as_f64()?;
    let distance = object.get("distance")?.as_f64()?;
    let interval = object.get("interval")?.as_array()?;
    let start_point = interval.first().and_then(as_index)?;
    let end_point = interval.last().and_then(as_index)?;

    Some(Instruction {
        annotation_text: object
            .get("annotation_text")
            .and_then(Value::as_str)
            .map(str::to_owned),
        annotation_importance: object.get("annotation_importance").and_then(as_i32),
        turn_angle: object.get("turn_angle").and_then(Value::as_f64),
        exit_number: object
            .get("exit_number")
            .and_then(Value::as_u64)
            .and_then(|exit| u32::try_from(exit).ok()),
        ..Instruction::new(sign, text, time, distance, start_point, end_point)
    })
}

/// Convert one `[x, y]` element of the `points.coordinates` array.
///
/// Returns `None` unless the element is an array of exactly two numbers.
#[must_use]
pub fn point_from_json(value: &Value) -> Option<Point> {
    match value.as_array()?.as_slice() {
        [x, y] => Some(Point::new(x.as_f64()?, y.as_f64()?)),
        _ => None,
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn as_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}
