pub mod config;
pub mod model;
pub mod persistence;
pub mod repository;
pub mod runtime;
pub mod telemetry;
pub mod ui;
