//! Cafe Desk admin library.
//!
//! Shared by the dashboard server and the `cafe-cli` maintenance tool:
//! configuration, the platform database layer, password hashing, the
//! registration client and the role dashboards.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod tasks;
pub mod telemetry;
