//! CodeFun server
//!
//! Single-binary HTTP API for cataloguing coding challenges, tracking
//! per-user progress, and collecting 1-5 star ratings. Embedded SQLite
//! storage; session tokens are issued by an external identity provider and
//! only verified here.

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod utils;
