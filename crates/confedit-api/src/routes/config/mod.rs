//! Configuration document routes - read/write API

pub mod api;

pub use api::{api_config_get, api_config_save};
