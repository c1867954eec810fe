//! property-service - serves a static properties document over HTTP
//!
//! A single JSON file on disk is the source of truth. Every request to
//! `/properties` re-reads it and returns it unchanged, with cross-origin
//! access open to any browser frontend.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{Error, Result};
