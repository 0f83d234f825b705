use bon::Builder;

use crate::{core::forecast::PriceScale, prelude::*, quantity::rate::KilowattHourRate};

/// Parameters of a scheduling run, immutable until explicitly reconfigured.
#[derive(Copy, Clone, Debug, Builder)]
pub struct EngineConfig {
    /// Number of cheapest hours to charge in every profitable interval.
    #[builder(default = 2)]
    pub charge_hours_per_interval: usize,

    /// Number of most expensive hours to discharge in every profitable interval.
    #[builder(default = 2)]
    pub discharge_hours_per_interval: usize,

    /// Relative rise above the running minimum that opens a new interval.
    #[builder(default = 20.0)]
    pub price_delta_threshold_percent: f64,

    /// Minimal spread between the interval's most expensive and cheapest hours.
    #[builder(default = KilowattHourRate::from_cents(6))]
    pub min_profit_per_unit: KilowattHourRate,

    #[builder(default)]
    pub price_scale: PriceScale,
}

impl EngineConfig {
    pub fn validate(&self) -> Result {
        ensure!(self.charge_hours_per_interval >= 1, "at least one charge hour is required");
        ensure!(self.discharge_hours_per_interval >= 1, "at least one discharge hour is required");
        ensure!(
            self.price_delta_threshold_percent.is_finite()
                && self.price_delta_threshold_percent > 0.0,
            "the price delta threshold must be positive, got {}",
            self.price_delta_threshold_percent,
        );
        ensure!(
            self.min_profit_per_unit.is_finite()
                && self.min_profit_per_unit >= KilowattHourRate::ZERO,
            "the minimal profit must be non-negative, got {}",
            self.min_profit_per_unit,
        );
        Ok(())
    }
}
