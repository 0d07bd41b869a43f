// This module contains strategies for:
//  * points
// and a point-location helper for checking hull containment.
use crate::data::{ConvexHull, Point};
use crate::{HullScalar, Orientation};

use num_bigint::BigInt;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Mapped<(T, T), Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(T, T)>((params.clone(), params)).prop_map(|(x, y)| Point { array: [x, y] })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

pub fn any_8() -> impl Strategy<Value = Point<i8>> {
  any::<Point<i8>>()
}

pub fn any_32() -> impl Strategy<Value = Point<i32>> {
  any::<Point<i32>>()
}

pub fn any_64() -> impl Strategy<Value = Point<i64>> {
  any::<Point<i64>>()
}

// A small grid makes duplicates and colinear triples common.
pub fn any_small() -> impl Strategy<Value = Point<i32>> {
  (-16..16_i32, -16..16_i32).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast(BigInt::from))
}

///////////////////////////////////////////////////////////////////////////////
// Point location

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

/// $O(n)$ Locate `pt` relative to a counter-clockwise hull.
pub fn locate<T: HullScalar>(hull: &ConvexHull<T>, pt: &Point<T>) -> PointLocation {
  let mut on_edge = false;
  for edge in hull.vertices().windows(2) {
    let (start, end) = (&edge[0], &edge[1]);
    match start.orientation(end, pt) {
      Orientation::CounterClockWise => {}
      Orientation::ClockWise => return PointLocation::Outside,
      Orientation::CoLinear => {
        let within = |i: usize| {
          let (lo, hi) = if start[i] <= end[i] {
            (&start[i], &end[i])
          } else {
            (&end[i], &start[i])
          };
          lo <= &pt[i] && &pt[i] <= hi
        };
        if within(0) && within(1) {
          on_edge = true;
        } else {
          return PointLocation::Outside;
        }
      }
    }
  }
  if on_edge {
    PointLocation::OnBoundary
  } else {
    PointLocation::Inside
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull;

  #[test]
  fn locate_in_square() {
    let square = convex_hull(vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ])
    .unwrap();
    assert_eq!(locate(&square, &Point::new([2, 2])), PointLocation::Inside);
    assert_eq!(locate(&square, &Point::new([4, 2])), PointLocation::OnBoundary);
    assert_eq!(locate(&square, &Point::new([0, 0])), PointLocation::OnBoundary);
    assert_eq!(locate(&square, &Point::new([5, 2])), PointLocation::Outside);
  }

  #[test]
  fn locate_on_segment() {
    let segment = convex_hull(vec![
      Point::new([0, 0]),
      Point::new([2, 2]),
      Point::new([4, 4]),
    ])
    .unwrap();
    assert_eq!(locate(&segment, &Point::new([2, 2])), PointLocation::OnBoundary);
    assert_eq!(locate(&segment, &Point::new([5, 5])), PointLocation::Outside);
    assert_eq!(locate(&segment, &Point::new([2, 3])), PointLocation::Outside);
  }
}
