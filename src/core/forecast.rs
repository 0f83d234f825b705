use chrono::{DateTime, Local};

use crate::{prelude::*, quantity::rate::KilowattHourRate};

/// Single hourly forecast entry as supplied by the source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Constructor)]
pub struct ForecastPoint {
    /// Start of the hour.
    pub timestamp: DateTime<Local>,

    /// Price in the source's fixed-point unit, see [`PriceScale`].
    pub raw_price: i64,

    /// Whether the solar yield or percentage is positive for this hour.
    pub has_solar: bool,
}

/// Conversion of the fixed-point raw price into currency per kilowatt-hour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PriceScale {
    divisor: f64,
}

impl Default for PriceScale {
    fn default() -> Self {
        Self { divisor: Self::DEFAULT_DIVISOR }
    }
}

impl PriceScale {
    pub const DEFAULT_DIVISOR: f64 = 10_000_000.0;

    /// Raw prices are already in currency per kilowatt-hour.
    #[cfg(test)]
    pub const IDENTITY: Self = Self { divisor: 1.0 };

    pub fn try_new(divisor: f64) -> Result<Self> {
        ensure!(
            divisor.is_finite() && divisor > 0.0,
            "the price divisor must be a positive number, got {divisor}",
        );
        Ok(Self { divisor })
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn convert(self, raw_price: i64) -> KilowattHourRate {
        KilowattHourRate::from(raw_price as f64 / self.divisor)
    }
}
