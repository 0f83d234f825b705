use std::cmp::Reverse;

use chrono::{DateTime, Local, TimeDelta};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{action::Action, forecast::ForecastPoint, interval::IntervalSummary},
    quantity::rate::KilowattHourRate,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ScheduledHour {
    /// Inclusive start of the hour.
    pub timestamp: DateTime<Local>,

    pub price: KilowattHourRate,

    /// Price relative to the interval's minimum.
    pub multiplier: f64,

    pub action: Action,

    /// 1-based interval number.
    pub interval_id: usize,

    pub has_solar: bool,
}

impl ScheduledHour {
    pub const DURATION: TimeDelta = TimeDelta::hours(1);

    /// Hour that is not yet assigned to an interval.
    pub const fn pending(point: &ForecastPoint, price: KilowattHourRate) -> Self {
        Self {
            timestamp: point.timestamp,
            price,
            multiplier: 1.0,
            action: Action::Stop,
            interval_id: 0,
            has_solar: point.has_solar,
        }
    }

    /// Exclusive end of the hour.
    #[must_use]
    pub fn end(&self) -> DateTime<Local> {
        self.timestamp + Self::DURATION
    }

    #[must_use]
    pub fn contains(&self, time: DateTime<Local>) -> bool {
        (self.timestamp <= time) && (time < self.end())
    }
}

/// Fully annotated schedule, recomputed from scratch on every run.
#[must_use]
#[derive(Clone, Debug, Default, Serialize)]
pub struct Schedule {
    /// Time-ordered hours covering the whole forecast.
    pub hours: Vec<ScheduledHour>,

    pub intervals: Vec<IntervalSummary>,
}

impl Schedule {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Action for the hour that contains `now`, or [`Action::Stop`] outside the forecast horizon.
    #[must_use]
    pub fn current_action(&self, now: DateTime<Local>) -> Action {
        current_action(&self.hours, now)
    }

    #[must_use]
    pub fn count(&self, action: Action) -> usize {
        self.hours.iter().filter(|hour| hour.action == action).count()
    }

    /// The most expensive hour over the whole horizon.
    #[must_use]
    pub fn peak(&self) -> Option<&ScheduledHour> {
        peak_position(&self.hours).map(|index| &self.hours[index])
    }

    /// The cheapest hour over the whole horizon.
    #[must_use]
    pub fn valley(&self) -> Option<&ScheduledHour> {
        self.hours.iter().min_by_key(|hour| (hour.price, hour.timestamp))
    }
}

/// Position of the most expensive hour, the earliest one wins the ties.
#[must_use]
pub fn peak_position(hours: &[ScheduledHour]) -> Option<usize> {
    hours.iter().position_min_by_key(|hour| (Reverse(hour.price), hour.timestamp))
}

/// Linear scan relying on the hours being sorted by time.
#[must_use]
pub fn current_action(hours: &[ScheduledHour], now: DateTime<Local>) -> Action {
    hours.iter().find(|hour| hour.contains(now)).map_or(Action::Stop, |hour| hour.action)
}
