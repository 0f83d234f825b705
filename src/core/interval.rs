use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{core::schedule::ScheduledHour, quantity::rate::KilowattHourRate};

/// Contiguous run of hours between a price valley and the following peak («wave»).
///
/// Exists only during a single computation, the schedule keeps an [`IntervalSummary`] instead.
#[must_use]
pub struct Interval {
    /// 1-based sequence number.
    pub id: usize,

    pub hours: Vec<ScheduledHour>,
}

impl Interval {
    pub fn open(id: usize, first_hour: ScheduledHour) -> Self {
        Self { id, hours: vec![first_hour] }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    #[must_use]
    pub fn min_price(&self) -> Option<KilowattHourRate> {
        self.hours.iter().map(|hour| hour.price).min()
    }

    #[must_use]
    pub fn max_price(&self) -> Option<KilowattHourRate> {
        self.hours.iter().map(|hour| hour.price).max()
    }

    /// Recalculate the multipliers relative to this interval's cheapest hour.
    pub fn apply_multipliers(&mut self) {
        if let Some(min_price) = self.min_price() {
            for hour in &mut self.hours {
                hour.multiplier = multiplier(hour.price, min_price);
            }
        }
    }

    /// # Returns
    ///
    /// [`None`] for an empty interval.
    #[must_use]
    pub fn summarize(&self, min_profit: KilowattHourRate) -> Option<IntervalSummary> {
        let first = self.hours.first()?;
        let last = self.hours.last()?;
        let min_price = self.min_price()?;
        let max_price = self.max_price()?;
        let profit = max_price - min_price;
        Some(IntervalSummary {
            id: self.id,
            start: first.timestamp,
            end: last.end(),
            n_hours: self.hours.len(),
            min_price,
            max_price,
            profit,
            is_eligible: profit >= min_profit,
        })
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IntervalSummary {
    pub id: usize,

    /// Inclusive.
    pub start: DateTime<Local>,

    /// Exclusive.
    pub end: DateTime<Local>,

    pub n_hours: usize,
    pub min_price: KilowattHourRate,
    pub max_price: KilowattHourRate,
    pub profit: KilowattHourRate,

    /// Whether the profit clears the minimum and slots were assigned.
    pub is_eligible: bool,
}

/// Price relative to the interval's minimum, rounded to 4 decimals.
///
/// Zero minimum is replaced with one cent, and a negative minimum switches to `1 + price / |min|`
/// to keep the value finite and monotonic.
#[must_use]
pub fn multiplier(price: KilowattHourRate, interval_min: KilowattHourRate) -> f64 {
    let price = price.0.0;
    let interval_min = interval_min.0.0;
    let multiplier = if interval_min > 0.0 {
        price / interval_min
    } else if interval_min < 0.0 {
        1.0 + price / interval_min.abs()
    } else {
        price / KilowattHourRate::ONE_CENT.0.0
    };
    (multiplier * 10_000.0).round() / 10_000.0
}
