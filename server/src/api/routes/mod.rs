//! API route handlers

pub mod challenges;
pub mod health;
pub mod users;
