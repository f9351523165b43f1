//! Type-safe wrappers and enums for pick'em data.

pub mod format;
pub mod ids;
pub mod time;


pub use format::ScoringFormat;
pub use ids::{ContestId, PickId, UserId};
pub use time::{Period, Season, SeasonType, Week};
