use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

use crate::core::forecast::ForecastPoint;

/// Start of the specified hour counted from midnight UTC of a fixed winter day.
pub fn at(hour: u32) -> DateTime<Local> {
    let midnight = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
    (midnight + TimeDelta::hours(i64::from(hour))).with_timezone(&Local)
}

/// Consecutive hourly points without solar starting at `at(0)`.
pub fn points(raw_prices: &[i64]) -> Vec<ForecastPoint> {
    (0..)
        .zip(raw_prices)
        .map(|(hour, &raw_price)| ForecastPoint::new(at(hour), raw_price, false))
        .collect()
}
