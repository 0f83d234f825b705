mod plan;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};

pub use self::plan::{current, plan};
use crate::{
    core::{config::EngineConfig, engine::Engine, forecast::PriceScale},
    prelude::*,
    quantity::rate::KilowattHourRate,
    source::Source,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compute the schedule and print it together with the price extremums.
    #[clap(name = "plan")]
    Plan(Box<PlanArgs>),

    /// Print only the action for the current hour.
    #[clap(name = "current")]
    Current(Box<CurrentArgs>),
}

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    pub forecast: ForecastArgs,

    #[clap(flatten)]
    pub engine: EngineArgs,

    /// Print the reporters as JSON instead of the tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct CurrentArgs {
    #[clap(flatten)]
    pub forecast: ForecastArgs,

    #[clap(flatten)]
    pub engine: EngineArgs,
}

#[derive(Parser)]
pub struct ForecastArgs {
    /// Exported forecast document: Home Assistant entity state or a list of entries, `-` for stdin.
    #[clap(long = "forecast-file", env = "FORECAST_FILE")]
    pub source: Source,

    /// Override the current time, for example: `2025-01-15T13:30:00+01:00`.
    #[clap(long, env = "NOW")]
    pub now: Option<DateTime<Local>>,
}

impl ForecastArgs {
    #[must_use]
    pub fn now(&self) -> DateTime<Local> {
        self.now.unwrap_or_else(Local::now)
    }
}

#[derive(Copy, Clone, Parser)]
pub struct EngineArgs {
    /// Number of cheapest hours to charge in every profitable interval.
    #[clap(long, default_value = "2", env = "CHARGE_HOURS")]
    pub charge_hours: usize,

    /// Number of most expensive hours to discharge in every profitable interval.
    #[clap(long, default_value = "2", env = "DISCHARGE_HOURS")]
    pub discharge_hours: usize,

    /// Relative price rise above the running minimum that starts a new interval.
    #[clap(long = "price-delta-percent", default_value = "20", env = "PRICE_DELTA_PERCENT")]
    pub price_delta_percent: f64,

    /// Minimal spread between the interval's most expensive and cheapest hours.
    #[clap(long = "min-profit-cents-per-kwh", default_value = "6", env = "MIN_PROFIT_C_KWH")]
    pub min_profit_cents: u32,

    /// Divisor converting the raw forecast prices into currency per kilowatt-hour.
    #[clap(long, default_value = "10000000", env = "PRICE_DIVISOR")]
    pub price_divisor: f64,
}

impl EngineArgs {
    pub fn try_new_engine(self) -> Result<Engine> {
        Engine::try_new(
            EngineConfig::builder()
                .charge_hours_per_interval(self.charge_hours)
                .discharge_hours_per_interval(self.discharge_hours)
                .price_delta_threshold_percent(self.price_delta_percent)
                .min_profit_per_unit(KilowattHourRate::from_cents(self.min_profit_cents))
                .price_scale(PriceScale::try_new(self.price_divisor)?)
                .build(),
        )
    }
}
