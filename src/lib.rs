// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod progress;
pub mod roster;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{Result, ScrapeError};
pub use roster::{Character, Role, Roster};
