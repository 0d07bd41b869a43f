mod hull;
pub(crate) mod point;

pub use hull::ConvexHull;
pub use point::Point;
