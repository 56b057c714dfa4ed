//! Scenario tests
//!
//! End-to-end conversions of realistic SBV documents:
//! - Documented conversion scenarios
//! - Structural validation of the produced WebVTT
//! - Recovery from malformed input
