use chrono::{DateTime, Local};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{interval::IntervalSummary, schedule::Schedule},
    quantity::rate::KilowattHourRate,
    reporter::Reporters,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_schedule_table(schedule: &Schedule, now: DateTime<Local>) -> Table {
    #[expect(clippy::cast_precision_loss)]
    let average_price = if schedule.is_empty() {
        KilowattHourRate::ZERO
    } else {
        schedule.hours.iter().map(|hour| hour.price).sum::<KilowattHourRate>()
            / schedule.hours.len() as f64
    };

    let mut table = new_table();
    table.set_header(vec!["Start", "End", "Interval", "Price", "Multiplier", "Solar", "Action"]);
    for hour in &schedule.hours {
        let mut start = Cell::new(hour.timestamp.format("%a %H:%M"));
        if hour.contains(now) {
            start = start.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            start,
            Cell::new(hour.end().format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(hour.interval_id).set_alignment(CellAlignment::Right),
            Cell::new(hour.price).set_alignment(CellAlignment::Right).fg(
                if hour.price >= average_price { Color::Red } else { Color::Green },
            ),
            Cell::new(format!("×{:.2}", hour.multiplier)).set_alignment(CellAlignment::Right),
            Cell::new(if hour.has_solar { "yes" } else { "" }).fg(Color::DarkYellow),
            Cell::new(hour.action).fg(hour.action.color()),
        ]);
    }
    table
}

#[must_use]
pub fn build_intervals_table(intervals: &[IntervalSummary]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Interval", "Start", "End", "Hours", "Min", "Max", "Profit"]);
    for interval in intervals {
        let profit = Cell::new(interval.profit).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(interval.id).set_alignment(CellAlignment::Right),
            Cell::new(interval.start.format("%a %H:%M")),
            Cell::new(interval.end.format("%a %H:%M")).add_attribute(Attribute::Dim),
            Cell::new(interval.n_hours).set_alignment(CellAlignment::Right),
            Cell::new(interval.min_price).set_alignment(CellAlignment::Right),
            Cell::new(interval.max_price).set_alignment(CellAlignment::Right),
            if interval.is_eligible {
                profit.fg(Color::Green)
            } else {
                profit.add_attribute(Attribute::Dim)
            },
        ]);
    }
    table
}

#[must_use]
pub fn build_reporters_table(reporters: &Reporters, now: DateTime<Local>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Reporter", "State"]);
    table.add_row(vec![Cell::new("status"), Cell::new(reporters.schedule.status())]);
    for reporter in reporters.iter() {
        table.add_row(vec![Cell::new(reporter.name()), Cell::new(reporter.state(now))]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            config::EngineConfig,
            engine::Engine,
            forecast::PriceScale,
            testing::{at, points},
        },
        prelude::*,
    };

    #[test]
    fn test_build_schedule_table() -> Result {
        let engine = Engine::try_new(
            EngineConfig::builder()
                .price_scale(PriceScale::IDENTITY)
                .min_profit_per_unit(1.into())
                .build(),
        )?;
        let schedule = engine.recompute(&points(&[1, 5, 2]))?;
        let table = build_schedule_table(&schedule, at(0));
        assert_eq!(table.row_count(), 3);
        let intervals_table = build_intervals_table(&schedule.intervals);
        assert_eq!(intervals_table.row_count(), schedule.intervals.len());
        Ok(())
    }

    #[test]
    fn test_build_schedule_table_empty() {
        assert_eq!(build_schedule_table(&Schedule::default(), at(0)).row_count(), 0);
    }
}
