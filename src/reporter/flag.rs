use chrono::{DateTime, Local};

use crate::{
    core::forecast::ForecastPoint,
    reporter::{Extremum, PriceExtremumReporter, Reporter, State},
};

/// Whether the current time falls into the peak or valley hour.
#[must_use]
pub struct HourFlag(PriceExtremumReporter);

impl HourFlag {
    pub const fn new(extremum: PriceExtremumReporter) -> Self {
        Self(extremum)
    }

    /// Take over the hour already found by the extremum reporter.
    pub fn follow(&mut self, extremum: &PriceExtremumReporter) {
        self.0.clone_from(extremum);
    }
}

impl Reporter for HourFlag {
    fn name(&self) -> &'static str {
        match self.0.extremum() {
            Extremum::Peak => "is_peak_hour",
            Extremum::Valley => "is_valley_hour",
        }
    }

    fn compute(&mut self, forecast: Option<&[ForecastPoint]>) {
        self.0.compute(forecast);
    }

    fn state(&self, now: DateTime<Local>) -> State {
        State::Flag(self.0.hour().is_some_and(|hour| hour.contains(now)))
    }

    fn attributes(&self) -> serde_json::Value {
        self.0.attributes()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::core::{
        forecast::PriceScale,
        testing::{at, points},
    };

    #[test]
    fn test_state() {
        let mut flag =
            HourFlag::new(PriceExtremumReporter::new(Extremum::Peak, PriceScale::IDENTITY));
        flag.compute(Some(&points(&[1, 5, 2])));
        assert_eq!(flag.state(at(0)), State::Flag(false));
        assert_eq!(flag.state(at(1)), State::Flag(true));
        assert_eq!(flag.state(at(1) + TimeDelta::minutes(30)), State::Flag(true));
        assert_eq!(flag.state(at(2)), State::Flag(false));
    }

    #[test]
    fn test_follow() {
        let mut peak = PriceExtremumReporter::new(Extremum::Peak, PriceScale::IDENTITY);
        peak.compute(Some(&points(&[1, 5, 2])));
        let mut flag =
            HourFlag::new(PriceExtremumReporter::new(Extremum::Peak, PriceScale::IDENTITY));
        flag.follow(&peak);
        assert_eq!(flag.state(at(1)), State::Flag(true));
        assert_eq!(flag.name(), "is_peak_hour");
    }

    #[test]
    fn test_state_without_forecast() {
        let mut flag =
            HourFlag::new(PriceExtremumReporter::new(Extremum::Valley, PriceScale::IDENTITY));
        flag.compute(None);
        assert_eq!(flag.state(at(0)), State::Flag(false));
    }
}
