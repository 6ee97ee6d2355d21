//! Cafe Desk Core - Shared types library.
//!
//! This crate provides common types used across all Cafe Desk components:
//! - `admin` - Repositories, services and the dashboard server
//! - `cli` - Command-line maintenance tasks
//!
//! # Architecture
//!
//! The core crate contains only types and display logic - no I/O, no database
//! access, no HTTP clients.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, phones, prices and roles
//! - [`chart`] - Chart series with placeholder fallback
//! - [`dashboard`] - Dashboard kinds and stat cards

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chart;
pub mod dashboard;
pub mod types;

pub use chart::{ChartBar, ChartData, ChartPoint};
pub use dashboard::{DashboardKind, StatCard};
pub use types::*;
