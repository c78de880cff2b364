//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and table bootstrap (PostgreSQL)
//! - Contact repositories (PostgreSQL and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
