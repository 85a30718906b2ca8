// This module contains proptest strategies for points:
//  * any_finite: finite coordinates with capped exponents, safe for the
//    exact sign and symmetry properties (no overflow to infinity).
//  * any_bounded: small coordinates, safe for tight metric inequalities.
use crate::data::Point;

use num_traits::Float;
use proptest::prelude::*;

pub fn any_finite() -> impl Strategy<Value = Point<f64>> {
  (finite(), finite()).prop_map(|(x, y)| Point::new(x, y))
}

pub fn any_bounded() -> impl Strategy<Value = Point<f64>> {
  (-1.0e3..1.0e3, -1.0e3..1.0e3).prop_map(|(x, y)| Point::new(x, y))
}

fn finite() -> impl Strategy<Value = f64> {
  use proptest::num::f64::*;
  (POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO).prop_map(rem_float)
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero). Such extremes
// would overflow the cross products and squared distances to infinity.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = f.integer_decode();
  ((mantissa as f64) * 2f64.powi(i32::from(exponent) % 250)).copysign(f64::from(sign))
}
