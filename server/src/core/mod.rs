//! Core application modules

pub mod cli;
pub mod config;
pub mod constants;
pub mod seed;
pub mod shutdown;
pub mod storage;

pub use crate::app::CoreApp;
