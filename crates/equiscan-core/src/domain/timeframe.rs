use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Dashboard lookback window.
///
/// Each window fixes how volatile the simulated prices are and how many
/// points the chart history carries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl Timeframe {
    pub const ALL: [Self; 5] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::OneYear,
        Self::FiveYears,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
        }
    }

    /// Scale applied to the simulated percent change and price walk.
    pub const fn volatility_multiplier(self) -> f64 {
        match self {
            Self::OneDay => 0.03,
            Self::OneWeek => 0.08,
            Self::OneMonth => 0.15,
            Self::OneYear => 0.50,
            Self::FiveYears => 2.50,
        }
    }

    /// Number of price points in a generated history.
    pub const fn history_points(self) -> usize {
        match self {
            Self::OneDay => 24,
            Self::OneWeek => 35,
            Self::OneMonth => 30,
            Self::OneYear => 52,
            Self::FiveYears => 60,
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "1Y" => Ok(Self::OneYear),
            "5Y" => Ok(Self::FiveYears),
            _ => Err(ValidationError::InvalidTimeframe {
                value: value.trim().to_owned(),
            }),
        }
    }
}
