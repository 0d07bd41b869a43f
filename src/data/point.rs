use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

/// A point on the integer plane.
///
/// Ordering is lexicographic on `[x, y]`; it is not the angular order used by
/// the hull algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: HullScalar> Point<T> {
  /// Compare the distances from `self` to `p` and to `q`. Never overflows.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Compare the counter-clockwise angles of `p` and `q` around `self`,
  /// measured from the positive x-axis. Points at the same angle are ordered
  /// by increasing distance from `self`, and `self` itself comes first.
  ///
  /// Returns `Equal` only for equal points. This is the order in which the
  /// Graham scan visits its input.
  ///
  /// ```rust
  /// # use lattice_hull::data::Point;
  /// # use std::cmp::Ordering;
  /// let origin = Point::new([0, 0]);
  /// assert_eq!(
  ///   origin.ccw_cmp_around(&Point::new([3, 0]), &Point::new([1, 1])),
  ///   Ordering::Less
  /// );
  /// assert_eq!(
  ///   origin.ccw_cmp_around(&Point::new([1, 1]), &Point::new([2, 2])),
  ///   Ordering::Less
  /// );
  /// ```
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    Orientation::ccw_cmp_around(&self.array, &p.array, &q.array)
      .then_with(|| self.cmp_distance_to(p, q))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use num_bigint::BigInt;
  use proptest::prelude::*;
  use rand::SeedableRng;

  proptest! {
    #[test]
    fn cmp_distance_fuzz_32(pt1 in any_32(), pt2 in any_32(), pt3 in any_32()) {
      let _ = pt1.cmp_distance_to(&pt2, &pt3);
    }

    #[test]
    fn cmp_around_equal_iff_same_point(pt1 in any_8(), pt2 in any_8(), pt3 in any_8()) {
      prop_assert_eq!(pt1.ccw_cmp_around(&pt2, &pt3).is_eq(), pt2 == pt3);
      prop_assert_eq!(
        pt1.ccw_cmp_around(&pt2, &pt3),
        pt1.ccw_cmp_around(&pt3, &pt2).reverse()
      )
    }

    #[test]
    fn cmp_around_self_first(pt1 in any_32(), pt2 in any_32()) {
      prop_assume!(pt1 != pt2);
      prop_assert_eq!(pt1.ccw_cmp_around(&pt1, &pt2), Ordering::Less)
    }

    #[test]
    fn bigint_colinear(pt1 in any_r(), pt2 in any_r()) {
      let pt3 = Point::new([&pt2[0] * 2 - &pt1[0], &pt2[1] * 2 - &pt1[1]]);
      prop_assert!(pt1.orientation(&pt2, &pt3).is_colinear())
    }

    #[test]
    fn bigint_ccw_perpendicular(pt1 in any_r(), pt2 in any_r()) {
      prop_assume!(pt1 != pt2);
      let dx = &pt2[0] - &pt1[0];
      let dy = &pt2[1] - &pt1[1];
      let pt3 = Point::new([&pt2[0] - &dy, &pt2[1] + &dx]);
      prop_assert!(pt1.orientation(&pt2, &pt3).is_ccw())
    }

    #[test]
    fn cmp_distance_matches_bigint(pt1 in any_32(), pt2 in any_32(), pt3 in any_32()) {
      let big = |pt: &Point<i32>| pt.cast(BigInt::from);
      prop_assert_eq!(
        pt1.cmp_distance_to(&pt2, &pt3),
        big(&pt1).cmp_distance_to(&big(&pt2), &big(&pt3))
      )
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 1]), &Point::new([2, 2])),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
  }

  #[test]
  fn distance_tie_break() {
    let origin = Point::new([0, 0]);
    assert_eq!(
      origin.cmp_distance_to(&Point::new([1, 1]), &Point::new([2, 2])),
      Ordering::Less
    );
    assert_eq!(
      origin.cmp_distance_to(&Point::new([0, 5]), &Point::new([3, 4])),
      Ordering::Equal
    );
    assert_eq!(
      Point::new([i32::MIN, i32::MIN])
        .cmp_distance_to(&Point::new([i32::MAX, i32::MAX]), &Point::new([0, 0])),
      Ordering::Greater
    );
  }

  #[test]
  fn cmp_around_same_ray() {
    let origin = Point::new([0, 0]);
    let near = Point::new([1, 1]);
    let far = Point::new([2, 2]);
    assert_eq!(origin.ccw_cmp_around(&near, &far), Ordering::Less);
    assert_eq!(origin.ccw_cmp_around(&far, &near), Ordering::Greater);
    assert_eq!(origin.ccw_cmp_around(&near, &near), Ordering::Equal);
    assert_eq!(origin.ccw_cmp_around(&origin, &near), Ordering::Less);
    assert_eq!(
      origin.ccw_cmp_around(&Point::new([2, 0]), &near),
      Ordering::Less
    );
    // Opposite rays are not tied.
    assert_eq!(
      origin.ccw_cmp_around(&Point::new([-1, -1]), &far),
      Ordering::Greater
    );
  }

  #[test]
  fn conversions() {
    let pt: Point<i32> = (3, -4).into();
    assert_eq!(pt, Point::from([3, -4]));
    assert_eq!(pt.x_coord(), &3);
    assert_eq!(pt.y_coord(), &-4);
    assert_eq!(pt[1], -4);
    assert_eq!(pt.cast(i64::from), Point::new([3_i64, -4]));
  }

  #[test]
  fn random_points() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let a: Point<i32> = rng.gen();
    let b: Point<i32> = rng.gen();
    assert_ne!(a, b);
  }
}
