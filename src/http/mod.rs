//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the conversion endpoint
//! - Request handlers for conversion, health and stats
//! - Download file name sanitization
//! - Request logging middleware
//! - CORS and body size limits

pub mod filename;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
