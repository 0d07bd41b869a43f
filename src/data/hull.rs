use claims::debug_assert_ok;
use std::collections::BTreeSet;
use std::ops::Index;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation};

/// Closed, counter-clockwise vertex sequence of a convex hull.
///
/// The first vertex is the pivot (lowest y, leftmost on tie) and is repeated
/// as the last vertex. A hull of colinear points is the degenerate sequence
/// `[pivot, farthest, pivot]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConvexHull<T> {
  vertices: Vec<Point<T>>,
}

impl<T> ConvexHull<T>
where
  T: HullScalar,
{
  /// $O(1)$ Assume that the closed vertex sequence is a valid hull.
  ///
  /// Validity is checked only in debug builds.
  pub(crate) fn new_unchecked(vertices: Vec<Point<T>>) -> ConvexHull<T> {
    let hull = ConvexHull { vertices };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n \log n)$ Check closure, distinct vertices, and strict convexity.
  pub fn validate(&self) -> Result<(), Error> {
    let boundary = match self.vertices.split_last() {
      Some((last, rest)) if rest.len() >= 2 => {
        if last != &rest[0] {
          return Err(Error::NotClosed);
        }
        rest
      }
      _ => return Err(Error::InsufficientPoints),
    };
    let mut seen = BTreeSet::new();
    if !boundary.iter().all(|pt| seen.insert(pt)) {
      return Err(Error::DuplicatePoints);
    }
    if boundary.len() == 2 {
      return Ok(());
    }
    let n = boundary.len();
    for i in 0..n {
      let tail = &boundary[i];
      let middle = &boundary[(i + 1) % n];
      let head = &boundary[(i + 2) % n];
      match tail.orientation(middle, head) {
        Orientation::CounterClockWise => {}
        Orientation::ClockWise => return Err(Error::ClockWiseViolation),
        Orientation::CoLinear => return Err(Error::CoLinearViolation),
      }
    }
    Ok(())
  }
}

impl<T> ConvexHull<T> {
  /// The closed sequence, pivot first and last.
  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  /// The vertices without the repeated pivot.
  pub fn boundary(&self) -> &[Point<T>] {
    self.vertices.split_last().map_or(&[][..], |(_, rest)| rest)
  }

  /// The lowest (then leftmost) vertex; also the last vertex.
  pub fn pivot(&self) -> &Point<T> {
    // Hulls are only built through `new_unchecked`, never with fewer than
    // three vertices.
    debug_assert!(self.vertices.len() >= 3);
    &self.vertices[0]
  }

  /// Length of the closed sequence.
  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  /// Never true for a hull built by this crate.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// True for the `[pivot, farthest, pivot]` hull of colinear points.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() == 3
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.vertices.iter()
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }
}

impl<T> Index<usize> for ConvexHull<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.vertices.index(key)
  }
}

impl<T> AsRef<[Point<T>]> for ConvexHull<T> {
  fn as_ref(&self) -> &[Point<T>] {
    &self.vertices
  }
}

impl<T> From<ConvexHull<T>> for Vec<Point<T>> {
  fn from(hull: ConvexHull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}

impl<T> IntoIterator for ConvexHull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a ConvexHull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}
