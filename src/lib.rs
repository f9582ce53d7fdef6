//! Filterbooth - photo filters in the browser
//!
//! Serves a page where a user uploads or captures a photo, picks one of the
//! tone filters from `tone-filters`, adjusts brightness and scale, and
//! downloads the result as PNG.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
