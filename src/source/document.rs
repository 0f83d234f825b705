use chrono::{DateTime, Local};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{core::forecast::ForecastPoint, prelude::*};

/// Forecast document exported by the host.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    /// Home Assistant entity state with the forecast in its attributes.
    State { attributes: Attributes },

    /// Bare list of entries.
    Entries(Vec<Value>),
}

#[derive(Deserialize)]
struct Attributes {
    forecast: Vec<Value>,
}

#[serde_as]
#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "datetime")]
    timestamp: DateTime<Local>,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "electricity_price")]
    raw_price: i64,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    solar_yield: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    solar_percentage: Option<f64>,
}

impl From<Entry> for ForecastPoint {
    fn from(entry: Entry) -> Self {
        let has_solar = entry.solar_yield.is_some_and(|solar_yield| solar_yield > 0.0)
            || entry.solar_percentage.is_some_and(|percentage| percentage > 0.0);
        Self::new(entry.timestamp, entry.raw_price, has_solar)
    }
}

/// Parse the forecast document into time-ordered points.
///
/// Malformed entries and entries repeating an earlier timestamp are skipped with a warning.
#[instrument(skip_all)]
pub fn parse_document(text: &str) -> Result<Vec<ForecastPoint>> {
    let entries = match serde_json::from_str::<Document>(text)
        .context("the document contains neither a forecast attribute nor a list of entries")?
    {
        Document::State { attributes } => attributes.forecast,
        Document::Entries(entries) => entries,
    };

    let mut points = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Entry>(entry) {
            Ok(entry) => Some(ForecastPoint::from(entry)),
            Err(error) => {
                warn!(index, "skipping malformed forecast entry: {error:#}");
                None
            }
        })
        .collect_vec();

    points.sort_by_key(|point| point.timestamp);
    let n_parsed = points.len();
    points.dedup_by_key(|point| point.timestamp);
    if points.len() != n_parsed {
        warn!(n_duplicates = n_parsed - points.len(), "dropped entries with duplicate timestamps");
    }

    info!(n_points = points.len(), "parsed the forecast");
    Ok(points)
}
