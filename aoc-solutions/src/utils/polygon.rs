//! Point-in-polygon test on integer coordinates
//!
//! Uses the even-odd crossing-number rule: cast a ray from the point toward
//! +x and count the edges it crosses. The edge test is done with exact
//! integer arithmetic, so lattice polygons never suffer rounding.
//!
//! Points exactly on an edge get whatever the crossing rule yields. Callers
//! that need a boundary policy check membership before asking.

use itertools::Itertools;

/// A 2D lattice point as `(x, y)`
pub type Point = (i64, i64);

/// A closed polygon given by its vertices in traversal order
///
/// The closing edge from the last vertex back to the first is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterate over edges, closing edge included
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices
            .iter()
            .copied()
            .circular_tuple_windows::<(Point, Point)>()
            .filter(|_| self.vertices.len() > 1)
    }

    /// Even-odd crossing-number test
    pub fn contains(&self, (px, py): Point) -> bool {
        self.edges()
            .filter(|&((xi, yi), (xj, yj))| {
                // The edge must straddle the ray's row (half-open in y)
                if (yi > py) == (yj > py) {
                    return false;
                }
                // px < xi + (xj - xi) * (py - yi) / (yj - yi), sign-corrected
                let dy = yj - yi;
                let lhs = (px - xi) * dy;
                let rhs = (xj - xi) * (py - yi);
                if dy > 0 { lhs < rhs } else { lhs > rhs }
            })
            .count()
            % 2
            == 1
    }

    /// Twice the signed area (shoelace). Positive for counter-clockwise in a y-up frame
    pub fn doubled_signed_area(&self) -> i64 {
        self.edges().map(|((xi, yi), (xj, yj))| xi * yj - xj * yi).sum()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
