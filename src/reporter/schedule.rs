use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    core::{action::Action, engine::Engine, forecast::ForecastPoint, schedule::Schedule},
    prelude::*,
    reporter::{Reporter, State},
};

/// Outcome of the latest computation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Nothing computed yet.
    #[display("pending")]
    Pending,

    #[display("ready")]
    Ready,

    /// The forecast is present but contains no usable hours.
    #[display("no data")]
    NoData,

    #[display("missing source")]
    MissingSource,

    /// The latest run failed, the schedule is from an earlier run.
    #[display("failed")]
    Failed,
}

/// Owns the engine and reports the current battery action.
#[must_use]
pub struct ScheduleReporter {
    engine: Engine,
    schedule: Schedule,
    status: Status,
}

impl ScheduleReporter {
    pub fn new(engine: Engine) -> Self {
        Self { engine, schedule: Schedule::default(), status: Status::Pending }
    }

    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

impl Reporter for ScheduleReporter {
    fn name(&self) -> &'static str {
        "battery_action"
    }

    fn compute(&mut self, forecast: Option<&[ForecastPoint]>) {
        let Some(forecast) = forecast else {
            warn!("no forecast, clearing the schedule");
            self.schedule = Schedule::default();
            self.status = Status::MissingSource;
            return;
        };
        match self.engine.recompute(forecast) {
            Ok(schedule) => {
                self.status = if schedule.is_empty() { Status::NoData } else { Status::Ready };
                self.schedule = schedule;
            }
            Err(error) => {
                error!(n_retained = self.schedule.hours.len(), "failed to schedule: {error:#}");
                self.status = Status::Failed;
            }
        }
    }

    fn state(&self, now: DateTime<Local>) -> State {
        State::Action(self.schedule.current_action(now))
    }

    fn attributes(&self) -> serde_json::Value {
        let n_discharge_hours =
            self.schedule.count(Action::Discharge) + self.schedule.count(Action::SuperDischarge);
        serde_json::json!({
            "status": self.status,
            "n_charge_hours": self.schedule.count(Action::Charge),
            "n_discharge_hours": n_discharge_hours,
            "n_self_consume_hours": self.schedule.count(Action::SelfConsume),
            "intervals": self.schedule.intervals,
            "schedule": self.schedule.hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            config::EngineConfig,
            forecast::PriceScale,
            testing::{at, points},
        },
        quantity::rate::KilowattHourRate,
    };

    fn reporter() -> Result<ScheduleReporter> {
        let config = EngineConfig::builder()
            .charge_hours_per_interval(1)
            .discharge_hours_per_interval(1)
            .min_profit_per_unit(KilowattHourRate::from(30))
            .price_scale(PriceScale::IDENTITY)
            .build();
        Ok(ScheduleReporter::new(Engine::try_new(config)?))
    }

    #[test]
    fn test_pending() -> Result {
        let reporter = reporter()?;
        assert_eq!(reporter.status(), Status::Pending);
        assert_eq!(reporter.state(at(0)), State::Action(Action::Stop));
        Ok(())
    }

    #[test]
    fn test_ready() -> Result {
        let mut reporter = reporter()?;
        reporter.compute(Some(&points(&[10, 50, 100, 20])));
        assert_eq!(reporter.status(), Status::Ready);
        assert_eq!(reporter.state(at(3)), State::Action(Action::Charge));
        assert_eq!(reporter.schedule().hours.len(), 4);
        Ok(())
    }

    #[test]
    fn test_no_data() -> Result {
        let mut reporter = reporter()?;
        reporter.compute(Some(&[]));
        assert_eq!(reporter.status(), Status::NoData);
        assert_eq!(reporter.state(at(0)), State::Action(Action::Stop));
        Ok(())
    }

    #[test]
    fn test_missing_source_clears_schedule() -> Result {
        let mut reporter = reporter()?;
        reporter.compute(Some(&points(&[10, 50, 100, 20])));
        reporter.compute(None);
        assert_eq!(reporter.status(), Status::MissingSource);
        assert!(reporter.schedule().is_empty());
        assert_eq!(reporter.state(at(3)), State::Action(Action::Stop));
        Ok(())
    }

    #[test]
    fn test_failure_retains_previous_schedule() -> Result {
        let mut reporter = reporter()?;
        reporter.compute(Some(&points(&[10, 50, 100, 20])));

        let mut unordered = points(&[1, 2]);
        unordered.reverse();
        reporter.compute(Some(&unordered));

        assert_eq!(reporter.status(), Status::Failed);
        assert_eq!(reporter.schedule().hours.len(), 4);
        assert_eq!(reporter.state(at(3)), State::Action(Action::Charge));
        Ok(())
    }

    #[test]
    fn test_attributes() -> Result {
        let mut reporter = reporter()?;
        reporter.compute(Some(&points(&[10, 50, 100, 20])));
        let attributes = reporter.attributes();
        assert_eq!(attributes["status"], "ready");
        assert_eq!(attributes["n_charge_hours"], 1);
        assert_eq!(attributes["n_discharge_hours"], 1);
        assert_eq!(attributes["intervals"].as_array().map(Vec::len), Some(3));
        assert_eq!(attributes["schedule"][3]["action"], "charge");
        assert_eq!(attributes["schedule"][3]["interval_id"], 3);
        Ok(())
    }
}
