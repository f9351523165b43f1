//! Time-related types: seasons, weeks, season types and scoring periods.

use crate::error::{PickemError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Portion of the season a contest belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    Preseason,
    Regular,
    Playoffs,
}

impl SeasonType {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Preseason => "preseason",
            SeasonType::Regular => "regular",
            SeasonType::Playoffs => "playoffs",
        }
    }
}

impl Default for SeasonType {
    fn default() -> Self {
        Self::Regular
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "preseason" | "pre" => Ok(Self::Preseason),
            "regular" | "reg" => Ok(Self::Regular),
            "playoffs" | "postseason" | "post" => Ok(Self::Playoffs),
            _ => Err(PickemError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

/// A (week, season, season type) tuple over which standings and awards are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub week: Week,
    pub season: Season,
    pub season_type: SeasonType,
}

impl Period {
    pub fn new(week: Week, season: Season, season_type: SeasonType) -> Self {
        Self {
            week,
            season,
            season_type,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} week {}", self.season, self.season_type, self.week)
    }
}
