//! Structured logging facility for vassert
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use vassert_core::logging_facility::{init, Profile};
//!
//! // Initialize once at harness startup
//! init(Profile::Development);
//! ```
//!
//! Every assertion check logs a `start` and an `end` event under its
//! operation name (`assert_equals`, `assert_deep_equals`, ...). A failed
//! critical assertion additionally logs an `end_error` event.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
