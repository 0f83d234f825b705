use crate::{
    core::{
        forecast::{ForecastPoint, PriceScale},
        interval::Interval,
        schedule::ScheduledHour,
    },
    prelude::*,
    quantity::rate::KilowattHourRate,
};

/// Split the forecast into time-ordered intervals that partition it.
///
/// The running minimum is tracked while walking the forecast, and a new interval opens at the first
/// hour whose price rises above the minimum by more than `threshold_percent`. Falling prices never
/// open an interval. The minimum then restarts from the price of that hour.
#[instrument(skip_all, fields(n_points = forecast.len(), threshold_percent = threshold_percent))]
pub fn segment(
    forecast: &[ForecastPoint],
    scale: PriceScale,
    threshold_percent: f64,
) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = Vec::new();
    let mut running_min = KilowattHourRate::ZERO;

    for point in forecast {
        let hour = ScheduledHour::pending(point, scale.convert(point.raw_price));

        let Some(current) = intervals.last_mut() else {
            running_min = hour.price;
            intervals.push(Interval::open(1, hour));
            continue;
        };

        running_min = running_min.min(hour.price);
        if hour.price > rising_threshold(running_min, threshold_percent) && !current.is_empty() {
            let next_id = current.id + 1;
            running_min = hour.price;
            intervals.push(Interval::open(next_id, hour));
        } else {
            current.hours.push(hour);
        }
    }

    for interval in &mut intervals {
        for hour in &mut interval.hours {
            hour.interval_id = interval.id;
        }
    }

    debug!(n_intervals = intervals.len(), "segmented");
    intervals
}

/// Equals `min * (1 + percent / 100)` for a non-negative minimum.
///
/// For a negative minimum that product would fall below the minimum and split every hour, so the
/// rise is measured from `|min|` instead.
fn rising_threshold(running_min: KilowattHourRate, threshold_percent: f64) -> KilowattHourRate {
    running_min + running_min.abs() * (threshold_percent / 100.0)
}
