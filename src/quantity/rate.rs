use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

/// Currency per kilowatt-hour.
pub type KilowattHourRate = Quantity<1, 1, -1>;

impl KilowattHourRate {
    /// Smallest meaningful price step, used instead of a zero denominator.
    pub const ONE_CENT: Self = Self(OrderedFloat(0.01));

    /// Convert from cents per kilowatt-hour.
    pub fn from_cents(cents: u32) -> Self {
        Self(OrderedFloat(f64::from(cents) / 100.0))
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} €/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}€/kWh", self.0)
    }
}
