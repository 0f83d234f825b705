use std::cmp::Reverse;

use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

use crate::{
    core::{
        forecast::{ForecastPoint, PriceScale},
        schedule::ScheduledHour,
    },
    quantity::rate::KilowattHourRate,
    reporter::{Reporter, State},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    /// The most expensive hour.
    Peak,

    /// The cheapest hour.
    Valley,
}

impl Extremum {
    /// Find the extremal hour, the earliest one wins the ties.
    #[must_use]
    pub fn find(self, forecast: &[ForecastPoint], scale: PriceScale) -> Option<ExtremumHour> {
        let hours = forecast.iter().map(|point| ExtremumHour {
            timestamp: point.timestamp,
            price: scale.convert(point.raw_price),
        });
        match self {
            Self::Peak => hours.min_by_key(|hour| (Reverse(hour.price), hour.timestamp)),
            Self::Valley => hours.min_by_key(|hour| (hour.price, hour.timestamp)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtremumHour {
    pub timestamp: DateTime<Local>,
    pub price: KilowattHourRate,
}

impl ExtremumHour {
    #[must_use]
    pub fn contains(&self, time: DateTime<Local>) -> bool {
        (self.timestamp <= time) && (time < self.timestamp + ScheduledHour::DURATION)
    }
}

/// Reports the hour with the highest or lowest price over the whole forecast.
#[must_use]
#[derive(Clone)]
pub struct PriceExtremumReporter {
    extremum: Extremum,
    scale: PriceScale,
    hour: Option<ExtremumHour>,
}

impl PriceExtremumReporter {
    pub const fn new(extremum: Extremum, scale: PriceScale) -> Self {
        Self { extremum, scale, hour: None }
    }

    pub const fn extremum(&self) -> Extremum {
        self.extremum
    }

    #[must_use]
    pub const fn hour(&self) -> Option<ExtremumHour> {
        self.hour
    }
}

impl Reporter for PriceExtremumReporter {
    fn name(&self) -> &'static str {
        match self.extremum {
            Extremum::Peak => "peak_hour",
            Extremum::Valley => "valley_hour",
        }
    }

    fn compute(&mut self, forecast: Option<&[ForecastPoint]>) {
        self.hour = forecast.and_then(|forecast| self.extremum.find(forecast, self.scale));
    }

    fn state(&self, _now: DateTime<Local>) -> State {
        State::Time(self.hour.map(|hour| hour.timestamp))
    }

    fn attributes(&self) -> serde_json::Value {
        serde_json::json!({
            "extremum": self.extremum,
            "hour_of_day": self.hour.map(|hour| hour.timestamp.hour()),
            "price": self.hour.map(|hour| hour.price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{at, points};

    #[test]
    fn test_find_peak_earliest_tie() {
        let hour = Extremum::Peak.find(&points(&[5, 9, 1, 9]), PriceScale::IDENTITY).unwrap();
        assert_eq!(hour.timestamp, at(1));
        assert_eq!(hour.price, KilowattHourRate::from(9));
    }

    #[test]
    fn test_find_valley_earliest_tie() {
        let hour = Extremum::Valley.find(&points(&[5, 1, 9, 1]), PriceScale::IDENTITY).unwrap();
        assert_eq!(hour.timestamp, at(1));
    }

    #[test]
    fn test_find_empty() {
        assert!(Extremum::Peak.find(&[], PriceScale::IDENTITY).is_none());
    }

    #[test]
    fn test_compute_missing_source_resets() {
        let mut reporter = PriceExtremumReporter::new(Extremum::Valley, PriceScale::IDENTITY);
        reporter.compute(Some(&points(&[3, 2, 1])));
        assert_eq!(reporter.state(at(0)), State::Time(Some(at(2))));
        reporter.compute(None);
        assert_eq!(reporter.state(at(0)), State::Time(None));
    }

    #[test]
    fn test_attributes() {
        let mut reporter = PriceExtremumReporter::new(Extremum::Peak, PriceScale::IDENTITY);
        reporter.compute(Some(&points(&[3, 7])));
        let attributes = reporter.attributes();
        assert_eq!(attributes["extremum"], "peak");
        assert_eq!(attributes["price"], 7.0);
        assert_eq!(attributes["hour_of_day"], at(1).hour());
    }
}
