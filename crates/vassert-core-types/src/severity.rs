//! Assertion severity levels
//!
//! The severity is echoed into the rendered header (`Error:` / `Critical:`)
//! and carried on the verdict so the host harness can decide whether a
//! failure aborts the current test.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level an assertion reports its failure at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// Failure is reported and the test continues
    #[default]
    Error,
    /// Failure is reported and the harness is expected to abort the test
    Critical,
}

impl Severity {
    /// Header prefix used in rendered blocks
    pub fn header(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }

    /// True if a failure at this level should stop the running test
    pub fn aborts(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
