// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for decoded floor plans

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One room boundary: an ordered vertex sequence outlining the room's walls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2D>,
}

impl Polygon {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// A polygon can be drawn only when it has at least two vertices and
    /// every coordinate is finite. Anything else is skipped whole, never
    /// partially drawn.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2 && self.points.iter().all(Point2D::is_finite)
    }
}

/// Fixture classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FixtureKind {
    Door,
    Window,
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureKind::Door => write!(f, "doors"),
            FixtureKind::Window => write!(f, "windows"),
        }
    }
}

/// One door or window record, decoded from a 6-value container row.
///
/// Exactly one of `width`/`height` is expected to be nonzero; which one it
/// is decides whether the fixture runs horizontally or vertically.
/// `orientation` is a compass-like code (0 = east, 1 = south, 2 = west,
/// 3 = north) that only picks the sign along the axis already implied by
/// the nonzero extent; off-axis codes fall back to the positive direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub id: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub orientation: i32,
}

/// A decoded floor plan: room boundaries plus optional fixture arrays.
///
/// `doors`/`windows` are `None` when the container has no such field at
/// all; that fixture type is then skipped entirely during rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorPlan {
    pub boundaries: Vec<Polygon>,
    pub doors: Option<Vec<Fixture>>,
    pub windows: Option<Vec<Fixture>>,
}

impl FloorPlan {
    pub fn door_count(&self) -> usize {
        self.doors.as_ref().map_or(0, Vec::len)
    }

    pub fn window_count(&self) -> usize {
        self.windows.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderable_polygon() {
        let poly = Polygon::new(vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)]);
        assert!(poly.is_renderable());
    }

    #[test]
    fn test_single_vertex_not_renderable() {
        let poly = Polygon::new(vec![Point2D::new(0.0, 0.0)]);
        assert!(!poly.is_renderable());
    }

    #[test]
    fn test_non_finite_not_renderable() {
        let poly = Polygon::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(f64::NAN, 5.0),
            Point2D::new(10.0, 10.0),
        ]);
        assert!(!poly.is_renderable());
    }

    #[test]
    fn test_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
