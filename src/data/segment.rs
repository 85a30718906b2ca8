use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use super::Point;

use crate::Intersects;
use crate::Orientation;
use Orientation::*;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// A line segment between two points.
///
/// The segment owns copies of its endpoints and keeps them in construction
/// order; `p1` and `p2` are not interchangeable as far as [Segment::intersects]
/// is concerned. Zero-length segments (`p1 == p2`) are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<T = f64> {
  pub p1: Point<T>,
  pub p2: Point<T>,
}

impl<T> Segment<T> {
  pub const fn new(p1: Point<T>, p2: Point<T>) -> Segment<T> {
    Segment { p1, p2 }
  }
}

impl<T> From<(Point<T>, Point<T>)> for Segment<T> {
  fn from(seg: (Point<T>, Point<T>)) -> Segment<T> {
    Segment::new(seg.0, seg.1)
  }
}

// Random sampling.
impl<T> Distribution<Segment<T>> for Standard
where
  Standard: Distribution<Point<T>>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Segment<T> {
    Segment::new(rng.gen(), rng.gen())
  }
}

impl<T> Segment<T>
where
  T: Float,
{
  pub fn length(&self) -> T {
    self.p1.distance(&self.p2)
  }

  /// True iff `pt` lies on the segment, endpoints included.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    Orientation::new(&self.p1, &self.p2, pt).is_colinear() && self.in_bounding_box(pt)
  }

  /// Decide whether two segments intersect, degenerate configurations
  /// included.
  ///
  /// Four orientation tests classify the endpoints of each segment against
  /// the other. Opposite orientations on both sides mean a proper crossing;
  /// any colinear endpoint demotes the query to an interval-containment check
  /// along the shared line. Endpoint-to-endpoint contact does not count as an
  /// intersection in the colinear case.
  ///
  /// One deliberate quirk: when `other` starts exactly where `self` ends (a
  /// polyline-style chain), the proper-crossing rule is suppressed and only
  /// the colinear checks remain. The predicate is therefore not symmetric in
  /// its arguments for that one configuration.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use geom2d::data::{Point, Segment};
  /// let l1 = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0));
  /// let l2 = Segment::new(Point::new(0.0, 4.0), Point::new(4.0, 0.0));
  /// assert!(l1.intersects(&l2)); // proper crossing at (2,2)
  ///
  /// let chain = Segment::new(Point::new(4.0, 4.0), Point::new(8.0, 0.0));
  /// assert!(!l1.intersects(&chain)); // chained continuation is suppressed
  /// ```
  pub fn intersects(&self, other: &Segment<T>) -> bool {
    let o1 = Orientation::new(&self.p1, &self.p2, &other.p1);
    let o2 = Orientation::new(&self.p1, &self.p2, &other.p2);
    let o3 = Orientation::new(&other.p1, &other.p2, &self.p1);
    let o4 = Orientation::new(&other.p1, &other.p2, &self.p2);

    // `other` continues a chain that `self` ends.
    let connected = other.p1 == self.p2;

    // General case: the endpoints of each segment straddle the other.
    if o1 != o2 && o3 != o4 && !connected {
      return true;
    }

    // Colinear cases: an endpoint of one segment lies inside the other.
    if o1 == CoLinear && self.on_segment(&other.p1) {
      return true;
    }
    if o2 == CoLinear && self.on_segment(&other.p2) {
      return true;
    }
    if o3 == CoLinear && other.on_segment(&self.p1) {
      return true;
    }
    if o4 == CoLinear && other.on_segment(&self.p2) {
      return true;
    }

    false
  }

  // `pt` must already be known to be colinear with the segment. The segment's
  // own endpoints do not count as lying on it.
  fn on_segment(&self, pt: &Point<T>) -> bool {
    if pt == &self.p1 || pt == &self.p2 {
      return false;
    }
    self.in_bounding_box(pt)
  }

  fn in_bounding_box(&self, pt: &Point<T>) -> bool {
    pt.x <= self.p1.x.max(self.p2.x)
      && pt.x >= self.p1.x.min(self.p2.x)
      && pt.y <= self.p1.y.max(self.p2.y)
      && pt.y >= self.p1.y.min(self.p2.y)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a, T> Intersects for &'a Segment<T>
where
  T: Float,
{
  fn intersects(self, other: &'a Segment<T>) -> bool {
    Segment::intersects(self, other)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
