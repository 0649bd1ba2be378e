// src/core/mod.rs

pub mod image;
pub mod net;

pub use net::{Fetch, HttpFetcher};
