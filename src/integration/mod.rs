//! Integration testing module
//!
//! End-to-end tests for the conversion server:
//! - Conversion through the full router
//! - Request validation and method gating
//! - Download headers and file naming
//! - Metrics and stats endpoints
//! - A live server on a real socket

pub mod e2e;
pub mod fixtures;
