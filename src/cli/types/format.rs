//! Fantasy scoring formats.

use crate::error::{PickemError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy scoring format. Only the per-reception value differs between formats.
///
/// # Examples
///
/// ```rust
/// use pickem_engine::ScoringFormat;
///
/// assert_eq!(ScoringFormat::HalfPpr.points_per_reception(), 0.5);
/// assert_eq!("half_ppr".parse::<ScoringFormat>().unwrap(), ScoringFormat::HalfPpr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormat {
    /// Full point per reception
    Ppr,
    /// Half point per reception
    #[value(name = "half_ppr")]
    HalfPpr,
    /// No reception points
    Standard,
}

impl ScoringFormat {
    pub const ALL: [ScoringFormat; 3] = [Self::Ppr, Self::HalfPpr, Self::Standard];

    pub fn points_per_reception(&self) -> f64 {
        match self {
            ScoringFormat::Ppr => 1.0,
            ScoringFormat::HalfPpr => 0.5,
            ScoringFormat::Standard => 0.0,
        }
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringFormat::Ppr => write!(f, "ppr"),
            ScoringFormat::HalfPpr => write!(f, "half_ppr"),
            ScoringFormat::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for ScoringFormat {
    type Err = PickemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ppr" | "full_ppr" => Ok(Self::Ppr),
            "half_ppr" | "half" => Ok(Self::HalfPpr),
            "standard" | "std" => Ok(Self::Standard),
            _ => Err(PickemError::InvalidScoringFormat {
                value: s.to_string(),
            }),
        }
    }
}
