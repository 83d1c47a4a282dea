//! Point cloud container pairing positions with optional colors

use crate::color::Rgb8;
use crate::point::Point3f;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A point cloud with optional per-vertex colors
///
/// Positions and colors are independent ordered sequences. `colors[i]` pairs
/// with `points[i]` only when the two sequences have exactly the same length;
/// the pairing is positional, there are no per-point identifiers. A color
/// sequence of any other length is carried along but ignored by writers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point3f>,
    colors: Vec<Rgb8>,
}

impl PointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new point cloud with capacity reserved for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            colors: Vec::new(),
        }
    }

    /// Create an uncolored point cloud from a vector of points
    pub fn from_points(points: Vec<Point3f>) -> Self {
        Self {
            points,
            colors: Vec::new(),
        }
    }

    /// Create a point cloud from parallel point and color sequences
    ///
    /// The sequences may have different lengths; colors only take effect on
    /// export when the lengths match.
    pub fn from_points_and_colors(points: Vec<Point3f>, colors: Vec<Rgb8>) -> Self {
        Self { points, colors }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add an uncolored point to the cloud
    pub fn push(&mut self, point: Point3f) {
        self.points.push(point);
    }

    /// Add a point together with its color
    pub fn push_colored(&mut self, point: Point3f, color: Rgb8) {
        self.points.push(point);
        self.colors.push(color);
    }

    /// Replace the color sequence
    pub fn set_colors(&mut self, colors: Vec<Rgb8>) {
        self.colors = colors;
    }

    /// Get the point positions
    pub fn points(&self) -> &[Point3f] {
        &self.points
    }

    /// Get the color sequence, which may differ in length from the points
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Whether any colors were supplied at all
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Whether the color sequence pairs positionally with the points
    ///
    /// True exactly when the two lengths are equal, including the case where
    /// both are empty. This is the color-emission predicate used by writers.
    pub fn has_matching_colors(&self) -> bool {
        self.colors.len() == self.points.len()
    }

    /// Get an iterator over the point positions
    pub fn iter(&self) -> std::slice::Iter<'_, Point3f> {
        self.points.iter()
    }

    /// Clear all points and colors from the cloud
    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }
}

impl Index<usize> for PointCloud {
    type Output = Point3f;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3f;
    type IntoIter = std::slice::Iter<'a, Point3f>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point3f> for PointCloud {
    fn extend<I: IntoIterator<Item = Point3f>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point3f> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3f>>(iter: I) -> Self {
        Self::from_points(Vec::from_iter(iter))
    }
}

impl FromIterator<(Point3f, Rgb8)> for PointCloud {
    fn from_iter<I: IntoIterator<Item = (Point3f, Rgb8)>>(iter: I) -> Self {
        let mut cloud = Self::new();
        for (point, color) in iter {
            cloud.push_colored(point, color);
        }
        cloud
    }
}
