//! Route modules for the API server
//!
//! - config: configuration document read/write (JSON API)
//! - editor: the static editor page

pub mod config;
pub mod editor;
