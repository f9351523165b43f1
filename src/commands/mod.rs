//! Command implementations for the pick'em CLI

pub mod common;
pub mod contest;
pub mod fantasy;
pub mod import;
pub mod season;
pub mod weekly;


pub use common::{open_database, resolve_period, resolve_season};
