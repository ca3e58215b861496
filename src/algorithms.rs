pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use convex_hull::{angle_sort_predicate, gift_wrapping, is_clockwise, ConvexHull, MethodType};
