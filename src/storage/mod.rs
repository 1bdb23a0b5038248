//! Storage layer for the NBA betting database
//!
//! This module provides a thin abstraction over the SQLite file,
//! organized into logical components:
//! - `models`: Report and catalog data structures
//! - `schema`: Declarative table/index definitions and connection management
//! - `catalog`: Introspection of the live schema
//! - `verify`: Row counts and schema checks after setup

pub mod catalog;
pub mod models;
pub mod schema;
pub mod verify;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{BettingDatabase, INDEXES, TABLES};
pub use verify::verify_database;
