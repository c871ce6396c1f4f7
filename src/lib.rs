// Library exports for integration tests and reusable components

pub mod config;
pub mod dx_client;
pub mod models;
pub mod ui;
