//! Utility functions

pub mod crypto;
pub mod time;
