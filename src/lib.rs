//! # CCA Rust Backend
//!
//! Reporting engine for creator channel analytics.
//!
//! This crate provides a Rust backend for the Creator Channel Analytics (CCA)
//! system. It loads a flat dataset of per-day channel metrics, aggregates it
//! into daily, weekly, monthly and creator-calendar quarterly reporting
//! buckets, and computes period-over-period changes and completeness flags.
//! The backend exposes a REST API via Axum for the dashboard frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse per-day channel metrics from CSV format
//! - **Aggregation**: Bucket records by reporting frequency and sum metrics
//! - **Creator Calendar**: Custom quarter mapping with a February year start
//! - **Deltas**: Period-over-period absolute and percentage changes
//! - **Completeness**: Classify buckets as complete or partial against an
//!   injected reference time
//! - **HTTP API**: Read-only RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Core domain types (records, periods, the creator calendar)
//! - [`services`]: Aggregation, filtering, delta and report services
//! - [`io`]: Dataset loading and fingerprinting
//! - [`config`]: Server configuration from TOML files
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!
//! ## Determinism
//!
//! The service layer is pure: every computation that depends on the current
//! time takes it as a parameter. Only the HTTP shell and the server binary
//! ever read a real clock.

pub mod api;

pub mod config;
pub mod io;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
