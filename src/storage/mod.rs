//! Storage layer for the pick'em engine
//!
//! SQLite-backed implementation of [`PickemStore`](crate::engine::PickemStore),
//! organized into logical components:
//! - `models`: Data structures that exist only at the storage boundary
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD operations and the store implementation

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PickemDatabase;
