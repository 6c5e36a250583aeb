//! Core types shared across vassert facilities
//!
//! This crate provides foundational types used by the comparator, the
//! renderer and the logging facility:
//!
//! - **Severity**: the level an assertion reports at (`Error` / `Critical`)
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod severity;

pub use severity::Severity;
