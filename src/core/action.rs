use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Battery action for a single hour.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Forced charging from the grid.
    Charge,

    /// Forced discharging into the grid.
    Discharge,

    /// Discharging at the single most expensive hour of the whole forecast.
    SuperDischarge,

    /// Cover own consumption from solar, overrides everything else.
    SelfConsume,

    /// Do not do anything.
    #[default]
    Stop,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Discharge => "discharge",
            Self::SuperDischarge => "super_discharge",
            Self::SelfConsume => "self_consume",
            Self::Stop => "stop",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Charge => Color::Green,
            Self::Discharge => Color::Blue,
            Self::SuperDischarge => Color::Magenta,
            Self::SelfConsume => Color::DarkYellow,
            Self::Stop => Color::Reset,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Charge => write!(f, "Charge"),
            Self::Discharge => write!(f, "Discharge"),
            Self::SuperDischarge => write!(f, "Super-discharge"),
            Self::SelfConsume => write!(f, "Self-consume"),
            Self::Stop => write!(f, "Stop"),
        }
    }
}
