mod extremum;
mod flag;
mod schedule;

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};
use serde::Serialize;

pub use self::{
    extremum::{Extremum, PriceExtremumReporter},
    flag::HourFlag,
    schedule::ScheduleReporter,
};
use crate::core::{action::Action, forecast::ForecastPoint};

/// Primary value of a reporter at some moment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum State {
    Action(Action),
    Flag(bool),
    Time(Option<DateTime<Local>>),
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(action) => write!(f, "{action}"),
            Self::Flag(true) => write!(f, "on"),
            Self::Flag(false) => write!(f, "off"),
            Self::Time(Some(time)) => write!(f, "{}", time.format("%Y-%m-%d %H:%M")),
            Self::Time(None) => write!(f, "unknown"),
        }
    }
}

/// Something the host displays, computed from the shared forecast.
pub trait Reporter {
    fn name(&self) -> &'static str;

    /// Recompute from the freshly loaded forecast, [`None`] means that the source is missing.
    fn compute(&mut self, forecast: Option<&[ForecastPoint]>);

    fn state(&self, now: DateTime<Local>) -> State;

    fn attributes(&self) -> serde_json::Value;
}

/// The schedule and the price extremum reporters computed together.
///
/// Each extremum is computed once per run, the hour flags follow the extremum reporters.
#[must_use]
pub struct Reporters {
    pub schedule: ScheduleReporter,
    peak: PriceExtremumReporter,
    valley: PriceExtremumReporter,
    is_peak: HourFlag,
    is_valley: HourFlag,
}

impl Reporters {
    pub fn new(schedule: ScheduleReporter) -> Self {
        let scale = schedule.engine().config().price_scale;
        let peak = PriceExtremumReporter::new(Extremum::Peak, scale);
        let valley = PriceExtremumReporter::new(Extremum::Valley, scale);
        Self {
            schedule,
            is_peak: HourFlag::new(peak.clone()),
            is_valley: HourFlag::new(valley.clone()),
            peak,
            valley,
        }
    }

    pub fn compute(&mut self, forecast: Option<&[ForecastPoint]>) {
        self.schedule.compute(forecast);
        self.peak.compute(forecast);
        self.valley.compute(forecast);
        self.is_peak.follow(&self.peak);
        self.is_valley.follow(&self.valley);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Reporter> {
        [
            &self.schedule as &dyn Reporter,
            &self.peak,
            &self.valley,
            &self.is_peak,
            &self.is_valley,
        ]
        .into_iter()
    }

    /// Reporter states and attributes keyed by the reporter names.
    pub fn to_json(&self, now: DateTime<Local>) -> serde_json::Value {
        self.iter()
            .map(|reporter| {
                (
                    reporter.name().to_owned(),
                    serde_json::json!({
                        "state": reporter.state(now),
                        "attributes": reporter.attributes(),
                    }),
                )
            })
            .collect::<serde_json::Map<_, _>>()
            .into()
    }
}
