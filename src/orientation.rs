use num_traits::Float;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p` to `q`
  /// to `r`.
  ///
  /// The turn is the sign of the cross product
  /// `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`: exactly zero is
  /// `CoLinear`, positive is `ClockWise`, negative is `CounterClockWise`.
  /// Plain IEEE arithmetic, no epsilon: only an exact zero counts as
  /// colinear.
  ///
  /// NaN or infinite coordinates give an undefined geometric result but never
  /// a panic; every NaN comparison is false, so such triplets land in the
  /// `CounterClockWise` fallthrough.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use geom2d::data::Point;
  /// # use geom2d::Orientation;
  /// let p1 = Point::new(0.0, 0.0);
  /// let p2 = Point::new(0.0, 1.0); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new(0.0, 2.0)).is_colinear());
  /// // (0,0) -> (0,1) -> (-2,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(-2.0, 2.0)).is_ccw());
  /// // (0,0) -> (0,1) -> (2,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new(2.0, 2.0)).is_cw());
  /// ```
  pub fn new<T>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Float,
  {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == T::zero() {
      CoLinear
    } else if val > T::zero() {
      ClockWise
    } else {
      CounterClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
