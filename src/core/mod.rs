//! Configuration and the run-level data model

pub mod config;
pub mod dispatch;
pub mod models;
