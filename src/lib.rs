#![doc(test(no_crate_inject))]
//! Convex hulls of integer point sets via the Graham scan.
//!
//! All predicates are exact: orientation and distance comparisons never
//! overflow, for any input in the range of the coordinate type.
//!
//! ```rust
//! # use lattice_hull::algorithms::convex_hull;
//! # use lattice_hull::data::Point;
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([2, 0]),
//!   Point::new([1, 1]),
//!   Point::new([0, 2]),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(
//!   hull.vertices(),
//!   &[
//!     Point::new([0, 0]),
//!     Point::new([2, 0]),
//!     Point::new([0, 2]),
//!     Point::new([0, 0]),
//!   ]
//! );
//! ```
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

/// Reasons a hull cannot be built, or a vertex sequence is not a valid hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The x and y coordinate arrays differ in length.
  ShapeMismatch,
  /// Fewer than three distinct points.
  InsufficientPoints,
  /// First and last vertex differ.
  NotClosed,
  DuplicatePoints,
  ClockWiseViolation,
  /// Three consecutive vertices are colinear in a non-degenerate hull.
  CoLinearViolation,
}

impl Error {
  /// True for errors caused by the caller's input rather than by an invalid hull.
  pub fn is_invalid_input(self) -> bool {
    matches!(self, Error::ShapeMismatch | Error::InsufficientPoints)
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::ShapeMismatch => write!(f, "xs and ys don't have the same length"),
      Error::InsufficientPoints => write!(f, "need at least 3 unique points"),
      Error::NotClosed => write!(f, "Hull is not closed"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(f, "Colinear violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types with exact orientation and distance predicates.
///
/// Fixed-precision integers never overflow: coordinate differences are taken
/// as unsigned magnitudes in the next wider type and compared term by term.
pub trait HullScalar: std::fmt::Debug + Clone + Ord {
  /// Compare the distance `|pq|` against `|pr|`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the cross product `(q - p) × (r - p)`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $long:ty, $ulong: ty ) => {
    impl HullScalar for $ty {
      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        // Both sums overflowing lose the same high bit, so the wrapped values
        // still compare correctly.
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg != vy_neg && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg != vx_neg && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let slope1 = (&r[1] - &q[1]) * (&q[0] - &p[0]);
          let slope2 = (&q[1] - &p[1]) * (&r[0] - &q[0]);
          slope1.cmp(&slope2)
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, i16, u16);
fixed_precision!(i16, u16, i32, u32);
fixed_precision!(i32, u32, i64, u64);
fixed_precision!(i64, u64, i128, u128);
fixed_precision!(isize, usize, i128, u128);
arbitrary_precision!(num_bigint::BigInt);

#[cfg(test)]
pub mod testing;
