use log::{debug, trace};

use crate::data::{ConvexHull, Point};
use crate::{Error, HullScalar, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are closed, counter-clockwise convex hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The result is closed: it starts and ends with
/// the lowest (then leftmost) input point and lists the hull vertices in
/// counter-clockwise order. Points in the interior of a hull edge are not
/// vertices. If every input point lies on one line, the result is the
/// degenerate `[pivot, farthest, pivot]`.
///
/// # Errors
/// Will return an error iff the input set contains less than three distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * The result depends only on the set of input points, not their order or
///   multiplicity.
///
/// # Examples
///
/// ```rust
/// # use lattice_hull::algorithms::convex_hull;
/// # use lattice_hull::data::Point;
/// # use lattice_hull::Error;
/// let dups = vec![Point::new([0,0])].repeat(3);
/// assert_eq!(
///   convex_hull(dups).err(),
///   Some(Error::InsufficientPoints))
/// ```
///
/// ```rust
/// # use lattice_hull::algorithms::convex_hull;
/// # use lattice_hull::data::Point;
/// let line = vec![Point::new([0, 0]), Point::new([2, 2]), Point::new([1, 1])];
/// let hull = convex_hull(line).unwrap();
/// assert_eq!(
///   hull.vertices(),
///   &[Point::new([0, 0]), Point::new([2, 2]), Point::new([0, 0])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<ConvexHull<T>, Error>
where
  T: HullScalar,
{
  let input_len = pts.len();
  let sorted = sort_around_pivot(pts)?;
  if sorted.len() < 3 {
    debug!(
      "rejecting hull input: {} points, {} distinct",
      input_len,
      sorted.len()
    );
    return Err(Error::InsufficientPoints);
  }

  let mut stack: Vec<Point<T>> = Vec::with_capacity(sorted.len() + 1);
  stack.push(sorted[0].clone());
  stack.push(sorted[1].clone());

  // The pivot is never popped: every sorted point is at least as far
  // counter-clockwise as sorted[1], so the stack always holds two points.
  let mut read_idx = 2;
  while read_idx < sorted.len() {
    let head = &sorted[read_idx];
    let top = stack.len() - 1;
    let turn = stack[top - 1].orientation(&stack[top], head);
    trace!(
      "scan {:?} -> {:?} -> {:?}: {:?}",
      stack[top - 1],
      stack[top],
      head,
      turn
    );
    match turn {
      Orientation::CounterClockWise => {
        stack.push(head.clone());
        read_idx += 1;
      }
      Orientation::CoLinear => {
        stack[top] = head.clone();
        read_idx += 1;
      }
      Orientation::ClockWise => {
        stack.pop();
      }
    }
  }

  // Close the hull.
  stack.push(sorted[0].clone());
  debug!(
    "convex hull of {} points has {} vertices",
    input_len,
    stack.len() - 1
  );
  Ok(ConvexHull::new_unchecked(stack))
}

/// $O(n \log n)$ Convex hull of the points `(xs[i], ys[i])`.
///
/// # Errors
/// [`Error::ShapeMismatch`] if `xs` and `ys` differ in length, otherwise as
/// [`convex_hull`].
///
/// ```rust
/// # use lattice_hull::algorithms::convex_hull_from_arrays;
/// # use lattice_hull::Error;
/// assert_eq!(
///   convex_hull_from_arrays(&[1, 2, 3, 4, 5], &[1, 2, 3, 4]).err(),
///   Some(Error::ShapeMismatch)
/// );
/// ```
pub fn convex_hull_from_arrays<T>(xs: &[T], ys: &[T]) -> Result<ConvexHull<T>, Error>
where
  T: HullScalar,
{
  if xs.len() != ys.len() {
    debug!(
      "rejecting hull input: {} x coordinates, {} y coordinates",
      xs.len(),
      ys.len()
    );
    return Err(Error::ShapeMismatch);
  }
  let pts = xs
    .iter()
    .zip(ys)
    .map(|(x, y)| Point::new([x.clone(), y.clone()]))
    .collect();
  convex_hull(pts)
}

/// $O(n)$ The point with the smallest y coordinate, leftmost on tie.
///
/// This point is always a vertex of the convex hull.
///
/// # Errors
/// [`Error::InsufficientPoints`] if `pts` is empty.
pub fn lowest_point<T>(pts: &[Point<T>]) -> Result<&Point<T>, Error>
where
  T: HullScalar,
{
  pts
    .iter()
    .min_by_key(|a| (a.y_coord(), a.x_coord()))
    .ok_or(Error::InsufficientPoints)
}

/// $O(n \log n)$ Distinct points in counter-clockwise order around the lowest point.
///
/// The lowest point comes first. Points at the same angle are ordered by
/// increasing distance from it.
///
/// # Errors
/// [`Error::InsufficientPoints`] if `pts` is empty.
///
/// ```rust
/// # use lattice_hull::algorithms::convex_hull::graham_scan::sort_around_pivot;
/// # use lattice_hull::data::Point;
/// let pts = vec![Point::new([1, 1]), Point::new([0, 0]), Point::new([1, 0]), Point::new([1, 1])];
/// assert_eq!(
///   sort_around_pivot(pts).unwrap(),
///   vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([1, 1])]
/// );
/// ```
pub fn sort_around_pivot<T>(mut pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  let pivot = lowest_point(&pts)?.clone();
  // Every other point lies above the pivot, or on its right at the same
  // height, so all angles are in [0, 180) degrees. Equal only for equal points.
  pts.sort_unstable_by(|a, b| pivot.ccw_cmp_around(a, b));
  pts.dedup();
  debug_assert!(pts.first() == Some(&pivot));
  Ok(pts)
}
