use num_traits::Float;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;

use crate::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point<T = f64> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point::new(rng.gen(), rng.gen())
  }
}

impl<T> Point<T>
where
  T: Float,
{
  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    let dx = self.x - rhs.x;
    let dy = self.y - rhs.y;
    dx * dx + dy * dy
  }

  /// Euclidean distance between two points. Never negative; NaN coordinates
  /// propagate to a NaN result.
  pub fn distance(&self, rhs: &Point<T>) -> T {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// See [Orientation::new].
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point::new(point.0, point.1)
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    Ok(Point::new(
      NotNan::try_from(point.x)?,
      NotNan::try_from(point.y)?,
    ))
  }
}

impl From<Point<NotNan<f64>>> for Point<f64> {
  fn from(point: Point<NotNan<f64>>) -> Point<f64> {
    Point::new(point.x.into_inner(), point.y.into_inner())
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err, assert_ok};
  use proptest::prelude::*;
  use std::convert::TryInto;

  proptest! {
    #[test]
    fn distance_to_self_is_zero(pt in any_finite()) {
      prop_assert_eq!(pt.distance(&pt), 0.0)
    }

    #[test]
    fn distance_commutes(pt1 in any_finite(), pt2 in any_finite()) {
      prop_assert_eq!(pt1.distance(&pt2), pt2.distance(&pt1))
    }

    #[test]
    fn distance_is_never_negative(pt1 in any_finite(), pt2 in any_finite()) {
      prop_assert!(pt1.distance(&pt2) >= 0.0)
    }

    #[test]
    fn triangle_inequality(p in any_bounded(), q in any_bounded(), r in any_bounded()) {
      prop_assert!(p.distance(&r) <= p.distance(&q) + q.distance(&r))
    }
  }

  #[test]
  fn distance_unit_1() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(3.0, 4.0);
    assert_eq!(p1.distance(&p2), 5.0);
    assert_eq!(p2.distance(&p1), 5.0);
    assert_eq!(p1.squared_euclidean_distance(&p2), 25.0);
  }

  #[test]
  fn orientation_method_delegates() {
    let p1 = Point::new(0.0, 0.0);
    let p2 = Point::new(1.0, 1.0);
    let p3 = Point::new(2.0, 2.0);
    assert_eq!(p1.orientation(&p2, &p3), Orientation::CoLinear);
    assert_eq!(p1.orientation(&p2, &p3), Orientation::new(&p1, &p2, &p3));
  }

  #[test]
  fn nan_points_are_rejected() {
    let nan: Result<Point<NotNan<f64>>, _> = Point::new(f64::NAN, 0.0).try_into();
    assert_err!(nan);
    let ok: Result<Point<NotNan<f64>>, _> = Point::new(0.5, 1.5).try_into();
    let back: Point<f64> = assert_ok!(ok).into();
    assert_eq!(back, Point::new(0.5, 1.5));
  }
}
