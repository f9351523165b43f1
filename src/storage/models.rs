//! Data models for the storage layer

use crate::cli::types::UserId;
use crate::engine::{Contest, FantasyStatLine, Pick};
use serde::{Deserialize, Serialize};

/// Contest participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

/// Everything the `import` command loads from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportBundle {
    pub users: Vec<User>,
    pub contests: Vec<Contest>,
    pub picks: Vec<Pick>,
    pub stat_lines: Vec<FantasyStatLine>,
}

/// Row counts written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub users: usize,
    pub contests: usize,
    pub picks: usize,
    pub stat_lines: usize,
}
