//! Turn-by-turn maneuvers.

use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One maneuver segment of a route.
///
/// `start_point` and `end_point` form an inclusive range of indices into the
/// owning [`Route`](crate::Route)'s points.
///
/// # Examples
/// ```
/// use routing_core::Instruction;
///
/// let instruction = Instruction::new(6, "At roundabout, take exit 3", 12.5, 140.0, 4, 9)
///     .with_exit_number(3)
///     .with_turn_angle(4.11);
/// assert_eq!(instruction.point_range(), 4..=9);
/// assert_eq!(instruction.exit_number(), Some(3));
/// assert!(instruction.annotation_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    pub(crate) sign: i32,
    pub(crate) text: String,
    pub(crate) time: f64,
    pub(crate) distance: f64,
    pub(crate) start_point: usize,
    pub(crate) end_point: usize,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) annotation_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) annotation_importance: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) turn_angle: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub(crate) exit_number: Option<u32>,
}

impl Instruction {
    /// Construct an instruction without optional annotations.
    #[must_use]
    pub fn new(
        sign: i32,
        text: impl Into<String>,
        time: f64,
        distance: f64,
        start_point: usize,
        end_point: usize,
    ) -> Self {
        Self {
            sign,
            text: text.into(),
            time,
            distance,
            start_point,
            end_point,
            annotation_text: None,
            annotation_importance: None,
            turn_angle: None,
            exit_number: None,
        }
    }

    /// Attach annotation text and its importance.
    #[must_use]
    pub fn with_annotation(mut self, text: impl Into<String>, importance: i32) -> Self {
        self.annotation_text = Some(text.into());
        self.annotation_importance = Some(importance);
        self
    }

    /// Attach the turn angle supplied by the server.
    #[must_use]
    pub fn with_turn_angle(mut self, turn_angle: f64) -> Self {
        self.turn_angle = Some(turn_angle);
        self
    }

    /// Attach the roundabout exit number.
    #[must_use]
    pub fn with_exit_number(mut self, exit_number: u32) -> Self {
        self.exit_number = Some(exit_number);
        self
    }

    /// Maneuver type code.
    #[must_use]
    pub const fn sign(&self) -> i32 {
        self.sign
    }

    /// Human-readable description.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Time taken to cover the segment, in seconds.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Distance covered by the segment, in metres.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Index of the first route point covered.
    #[must_use]
    pub const fn start_point(&self) -> usize {
        self.start_point
    }

    /// Index of the last route point covered.
    #[must_use]
    pub const fn end_point(&self) -> usize {
        self.end_point
    }

    /// Inclusive range of route point indices covered.
    #[must_use]
    pub const fn point_range(&self) -> RangeInclusive<usize> {
        self.start_point..=self.end_point
    }

    /// Additional information for the user, if any.
    #[must_use]
    pub fn annotation_text(&self) -> Option<&str> {
        self.annotation_text.as_deref()
    }

    /// How important the annotation is.
    #[must_use]
    pub const fn annotation_importance(&self) -> Option<i32> {
        self.annotation_importance
    }

    /// Turn angle as supplied by the server.
    #[must_use]
    pub const fn turn_angle(&self) -> Option<f64> {
        self.turn_angle
    }

    /// Roundabout exit to take.
    #[must_use]
    pub const fn exit_number(&self) -> Option<u32> {
        self.exit_number
    }

    /// Whether the point range is ordered and addresses a sequence of
    /// `point_count` points.
    #[must_use]
    pub const fn fits_within(&self, point_count: usize) -> bool {
        self.start_point <= self.end_point && self.end_point < point_count
    }
}
