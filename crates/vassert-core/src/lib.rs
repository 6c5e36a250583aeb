//! vassert core - structural value comparison for test assertions
//!
//! This crate provides the comparison engine behind a test assertion helper,
//! including:
//! - A dynamic value model with typed and untyped nil
//! - Shallow (identity for shared containers) and deep (recursive) equality
//! - Per-path mismatch reporting for deep comparisons
//! - Deterministic failure rendering with `Error:` / `Critical:` headers
//! - A fluent assertion front door and output sinks
//!
//! Comparison never fails: a mismatch is data, not an error. Errors only come
//! from option validation, output sinks and critical assertion hand-off.

pub mod assertion;
pub mod compare;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod path;
pub mod render;
pub mod value;

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing;
pub use vassert_core_types::schema;

// Re-export commonly used types
pub use assertion::{Assertion, BufferOutput, Output, Reporter, Subject, Verdict, WriterOutput};
pub use compare::{compare, compare_with, Check, ComparisonResult, Mismatch, MismatchKind, Mode};
pub use config::{CompareOptions, RenderOptions};
pub use errors::{ExError, ExErrorKind, Result, VassertError};
pub use path::{Path, Segment};
pub use value::{MapKey, Value};
pub use vassert_core_types::Severity;
