pub mod rate;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::Serialize;

/// Float tagged with its power, time, and cost dimensions, totally ordered so that prices can be
/// sorted and used as keys.
#[derive(
    Clone,
    Copy,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::Sub,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(
    pub OrderedFloat<f64>,
);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn abs(self) -> Self {
        Self(OrderedFloat(self.0.0.abs()))
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }
}

/// Scaling keeps the dimensions.
impl<const POWER: isize, const TIME: isize, const COST: isize> Mul<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn mul(self, factor: f64) -> Self::Output {
        Self(self.0 * factor)
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Div<f64>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn div(self, divisor: f64) -> Self::Output {
        Self(self.0 / divisor)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::quantity::rate::KilowattHourRate;

    #[test]
    fn test_abs() {
        assert_eq!(KilowattHourRate::from(-0.15).abs(), KilowattHourRate::from(0.15));
        assert_eq!(KilowattHourRate::from(0.15).abs(), KilowattHourRate::from(0.15));
    }

    #[test]
    fn test_scaled_rise() {
        let minimum = KilowattHourRate::from(-0.10);
        let threshold = minimum + minimum.abs() * 0.2;
        assert_abs_diff_eq!(threshold.0.0, -0.08);
    }

    #[test]
    fn test_spread() {
        let spread = KilowattHourRate::from(0.31) - KilowattHourRate::from(0.12);
        assert_abs_diff_eq!(spread.0.0, 0.19);
    }

    #[test]
    fn test_average() {
        let prices = [0.10, 0.20, 0.45].map(KilowattHourRate::from);
        let average = prices.into_iter().sum::<KilowattHourRate>() / 3.0;
        assert_abs_diff_eq!(average.0.0, 0.25);
    }

    #[test]
    fn test_is_finite() {
        assert!(KilowattHourRate::from(1.0).is_finite());
        assert!(!(KilowattHourRate::from(1.0) / 0.0).is_finite());
        assert!(!KilowattHourRate::from(f64::NAN).is_finite());
    }
}
