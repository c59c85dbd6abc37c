//! Planar points, geographic coordinates and bounding boxes.
//!
//! A [`Point`] carries the raw `(x, y)` pair used on the wire. Its meaning
//! depends on the active [`CoordinateReferenceSystem`](crate::CoordinateReferenceSystem):
//! projected systems store easting in `x` and northing in `y`, geographic
//! systems store longitude in `x` and latitude in `y`.
//!
//! # Examples
//! ```
//! use routing_core::{BoundingBox, Coordinate, Point};
//!
//! let point = Point::from(Coordinate::new(51.5, -0.1));
//! assert_eq!(point, Point::new(-0.1, 51.5));
//!
//! let bbox = BoundingBox::new(Point::new(2.0, 2.0), Point::new(1.0, 1.0));
//! assert_eq!(bbox.bottom_left(), Point::new(1.0, 1.0));
//! assert!(bbox.contains(&Point::new(1.5, 1.5)));
//! ```

use geo::{Coord, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate pair expressed in the route's reference system.
///
/// Equality tolerates floating round-trip noise: two points are equal when
/// both axes differ by at most [`f64::EPSILON`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Easting or longitude.
    pub x: f64,
    /// Northing or latitude.
    pub y: f64,
}

impl Point {
    /// Construct a point from its `x` and `y` components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Interpret the point as a geographic coordinate (`x` = longitude,
    /// `y` = latitude).
    #[must_use]
    pub const fn to_coordinate(self) -> Coordinate {
        Coordinate {
            latitude: self.y,
            longitude: self.x,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "approximate equality requires the absolute axis delta"
)]
fn approx_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() <= f64::EPSILON
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate.longitude, coordinate.latitude)
    }
}

/// Axis-aligned rectangle covering a route.
///
/// `bottom_left` always holds the per-axis minimum and `top_right` the
/// per-axis maximum; [`BoundingBox::new`] normalises swapped corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    bottom_left: Point,
    top_right: Point,
}

impl BoundingBox {
    /// Build a bounding box spanning two opposite corners.
    #[must_use]
    pub fn new(first: Point, second: Point) -> Self {
        Self {
            bottom_left: Point::new(first.x.min(second.x), first.y.min(second.y)),
            top_right: Point::new(first.x.max(second.x), first.y.max(second.y)),
        }
    }

    /// Minimum corner.
    #[must_use]
    pub const fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    /// Maximum corner.
    #[must_use]
    pub const fn top_right(&self) -> Point {
        self.top_right
    }

    /// Whether `point` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&point.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&point.y)
    }

    /// Convert into a [`geo::Rect`] for use with the `geo` algorithms.
    #[must_use]
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord::from(self.bottom_left),
            Coord::from(self.top_right),
        )
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_rect()
    }
}
