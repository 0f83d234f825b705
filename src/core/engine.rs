use itertools::Itertools;

use crate::{
    core::{
        allocator::allocate,
        config::EngineConfig,
        forecast::ForecastPoint,
        schedule::Schedule,
        segmenter::segment,
    },
    prelude::*,
};

/// Stateless scheduler: every call recomputes the schedule from scratch.
#[must_use]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn try_new(config: EngineConfig) -> Result<Self> {
        config.validate().context("invalid engine configuration")?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Segment the forecast and allocate the actions.
    ///
    /// An empty forecast produces an empty schedule. Any failure abandons the whole run,
    /// so that a partial schedule never escapes.
    #[instrument(skip_all, fields(n_points = forecast.len()))]
    pub fn recompute(&self, forecast: &[ForecastPoint]) -> Result<Schedule> {
        if let Some((previous, next)) = forecast
            .iter()
            .tuple_windows()
            .find(|(previous, next)| previous.timestamp >= next.timestamp)
        {
            bail!(
                "the forecast is not strictly ordered by time: {} is followed by {}",
                previous.timestamp,
                next.timestamp,
            );
        }
        let scale = self.config.price_scale;
        if let Some(point) =
            forecast.iter().find(|point| !scale.convert(point.raw_price).is_finite())
        {
            bail!("price at {} cannot be converted: {}", point.timestamp, point.raw_price);
        }

        let intervals = segment(forecast, scale, self.config.price_delta_threshold_percent);
        let schedule = allocate(intervals, &self.config);
        ensure!(
            schedule.hours.len() == forecast.len(),
            "the intervals cover {} hours out of {}",
            schedule.hours.len(),
            forecast.len(),
        );

        info!(n_hours = schedule.hours.len(), n_intervals = schedule.intervals.len(), "scheduled");
        Ok(schedule)
    }
}
