use std::cmp::Reverse;

use itertools::Itertools;

use crate::{
    core::{
        action::Action,
        config::EngineConfig,
        interval::Interval,
        schedule::{Schedule, ScheduledHour, peak_position},
    },
    prelude::*,
};

/// Assign the actions to the segmented intervals and flatten them into the schedule.
///
/// Intervals which do not clear the minimal profit keep their hours idle but stay in the schedule.
#[instrument(skip_all, fields(n_intervals = intervals.len()))]
pub fn allocate(intervals: Vec<Interval>, config: &EngineConfig) -> Schedule {
    let mut schedule = Schedule {
        hours: Vec::with_capacity(intervals.iter().map(|interval| interval.hours.len()).sum()),
        intervals: Vec::with_capacity(intervals.len()),
    };

    for mut interval in intervals {
        let Some(summary) = interval.summarize(config.min_profit_per_unit) else {
            continue;
        };
        interval.apply_multipliers();
        if summary.is_eligible {
            assign_slots(
                &mut interval.hours,
                config.charge_hours_per_interval,
                config.discharge_hours_per_interval,
            );
        } else {
            debug!(
                interval.id,
                profit = %summary.profit,
                min_profit = %config.min_profit_per_unit,
                "skipping unprofitable interval",
            );
        }
        schedule.intervals.push(summary);
        schedule.hours.extend(interval.hours);
    }

    apply_overrides(&mut schedule.hours);
    schedule
}

/// Charge on the cheapest hours and discharge on the most expensive ones.
///
/// Earlier hours win the price ties. When an hour qualifies for both, discharging wins.
fn assign_slots(hours: &mut [ScheduledHour], n_charge_hours: usize, n_discharge_hours: usize) {
    let cheapest = (0..hours.len())
        .sorted_by_key(|&index| (hours[index].price, hours[index].timestamp))
        .take(n_charge_hours)
        .collect_vec();
    let most_expensive = (0..hours.len())
        .sorted_by_key(|&index| (Reverse(hours[index].price), hours[index].timestamp))
        .take(n_discharge_hours)
        .collect_vec();
    for index in cheapest {
        hours[index].action = Action::Charge;
    }
    for index in most_expensive {
        hours[index].action = Action::Discharge;
    }
}

/// Apply the horizon-wide overrides: super-discharge on the global peak, then self-consumption on
/// any solar hour.
fn apply_overrides(hours: &mut [ScheduledHour]) {
    if let Some(index) = peak_position(hours) {
        let peak = &mut hours[index];
        debug!(timestamp = %peak.timestamp, price = %peak.price, "super-discharge");
        peak.action = Action::SuperDischarge;
    }
    for hour in hours.iter_mut().filter(|hour| hour.has_solar) {
        hour.action = Action::SelfConsume;
    }
}
