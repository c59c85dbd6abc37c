//! Parsed routes.
//!
//! A [`Route`] owns its instructions, points and bounding box by value and is
//! never mutated after construction. Every instruction's point range
//! addresses the route's own point sequence.

use geo::LineString;
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use crate::{BoundingBox, Coordinate, CoordinateReferenceSystem, Instruction, Point};

/// A route returned by the routing service.
///
/// # Examples
/// ```
/// use routing_core::{BoundingBox, CoordinateReferenceSystem, Instruction, Point, Route};
///
/// let points = vec![Point::new(-0.1, 51.5), Point::new(-0.2, 51.6)];
/// let bbox = BoundingBox::new(points[0], points[1]);
/// let instructions = vec![Instruction::new(0, "Continue", 60.0, 900.0, 0, 1)];
/// let route = Route::new(CoordinateReferenceSystem::Wgs84, 900.0, 60.0, instructions, bbox, points)?;
///
/// let coordinates = route.coordinates().expect("WGS:84 is geographic");
/// assert_eq!(coordinates[0].latitude, 51.5);
/// # Ok::<(), routing_core::RouteError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Route {
    crs: CoordinateReferenceSystem,
    distance: f64,
    time: f64,
    instructions: Vec<Instruction>,
    bbox: BoundingBox,
    points: Vec<Point>,
}

/// Errors returned by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// An instruction's point range does not address the route's points.
    #[error(
        "instruction {index} covers points {start}..={end} but the route has {point_count} points"
    )]
    InstructionOutOfRange {
        /// Position of the offending instruction.
        index: usize,
        /// First point index of the instruction.
        start: usize,
        /// Last point index of the instruction.
        end: usize,
        /// Number of points on the route.
        point_count: usize,
    },
}

impl Route {
    /// Validate and construct a route.
    pub fn new(
        crs: CoordinateReferenceSystem,
        distance: f64,
        time: f64,
        instructions: Vec<Instruction>,
        bbox: BoundingBox,
        points: Vec<Point>,
    ) -> Result<Self, RouteError> {
        if let Some((index, instruction)) = instructions
            .iter()
            .enumerate()
            .find(|(_, instruction)| !instruction.fits_within(points.len()))
        {
            return Err(RouteError::InstructionOutOfRange {
                index,
                start: instruction.start_point(),
                end: instruction.end_point(),
                point_count: points.len(),
            });
        }
        Ok(Self::from_validated(
            crs,
            distance,
            time,
            instructions,
            bbox,
            points,
        ))
    }

    /// Assemble a route whose instructions are already known to fit.
    pub(crate) const fn from_validated(
        crs: CoordinateReferenceSystem,
        distance: f64,
        time: f64,
        instructions: Vec<Instruction>,
        bbox: BoundingBox,
        points: Vec<Point>,
    ) -> Self {
        Self {
            crs,
            distance,
            time,
            instructions,
            bbox,
            points,
        }
    }

    /// Reference system the points are expressed in.
    #[must_use]
    pub const fn crs(&self) -> CoordinateReferenceSystem {
        self.crs
    }

    /// Total distance in metres.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Total travel time in seconds.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Instructions in traversal order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Rectangle covering the route.
    #[must_use]
    pub const fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Points in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points as latitude/longitude pairs, when the reference system is
    /// geographic.
    #[must_use]
    pub fn coordinates(&self) -> Option<Vec<Coordinate>> {
        self.crs
            .is_geographic()
            .then(|| self.points.iter().map(|point| point.to_coordinate()).collect())
    }

    /// The slice of points an instruction covers.
    ///
    /// Returns `None` when the instruction does not belong to this route's
    /// point sequence.
    #[must_use]
    pub fn instruction_points(&self, instruction: &Instruction) -> Option<&[Point]> {
        self.points.get(instruction.point_range())
    }

    /// The route geometry as a [`geo::LineString`].
    #[must_use]
    pub fn line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|point| geo::Coord::from(*point))
            .collect()
    }
}
