//! Comparison output types.
//!
//! Mismatches are recorded in traversal order: declaration order for records,
//! index order for sequences, sorted key order for mappings.

use crate::path::Path;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Identity or primitive-value comparison, no structural descent
    Shallow,
    /// Recursive structural comparison collecting every leaf disagreement
    Deep,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Shallow => f.write_str("shallow"),
            Mode::Deep => f.write_str("deep"),
        }
    }
}

/// The six assertion checks a verdict can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Check {
    Equals,
    NotEquals,
    DeepEquals,
    DeepNotEquals,
    IsNil,
    IsNotNil,
}

impl Check {
    /// Comparison mode for binary checks; `None` for the unary nil checks.
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Check::Equals | Check::NotEquals => Some(Mode::Shallow),
            Check::DeepEquals | Check::DeepNotEquals => Some(Mode::Deep),
            Check::IsNil | Check::IsNotNil => None,
        }
    }

    /// True for checks that expect inequality (or non-nilness).
    pub fn negated(&self) -> bool {
        matches!(
            self,
            Check::NotEquals | Check::DeepNotEquals | Check::IsNotNil
        )
    }

    /// Stable operation name used in structured logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            Check::Equals => "assert_equals",
            Check::NotEquals => "assert_not_equals",
            Check::DeepEquals => "assert_deep_equals",
            Check::DeepNotEquals => "assert_deep_not_equals",
            Check::IsNil => "assert_is_nil",
            Check::IsNotNil => "assert_is_not_nil",
        }
    }
}

/// What kind of disagreement a mismatch records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchKind {
    /// Ordinary value disagreement at a leaf
    Leaf,
    /// The two sides disagree on nilness (untyped nil vs typed nil or non-nil)
    Nil,
}

/// One leaf-level disagreement found by a comparison.
///
/// `got` / `want` are `None` when the entry is absent on that side (a mapping
/// key or record field present on only one side).
#[derive(Debug, Clone)]
pub struct Mismatch {
    pub path: Path,
    pub kind: MismatchKind,
    pub got: Option<Value>,
    pub want: Option<Value>,
}

impl Mismatch {
    pub fn leaf(path: Path, got: Option<Value>, want: Option<Value>) -> Self {
        Self {
            path,
            kind: MismatchKind::Leaf,
            got,
            want,
        }
    }

    pub fn nil(path: Path, got: Value, want: Value) -> Self {
        Self {
            path,
            kind: MismatchKind::Nil,
            got: Some(got),
            want: Some(want),
        }
    }
}

/// Result of a single comparison.
///
/// `equal` is true iff `mismatches` is empty.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub mode: Mode,
    pub equal: bool,
    pub mismatches: Vec<Mismatch>,
}

impl ComparisonResult {
    pub fn from_mismatches(mode: Mode, mismatches: Vec<Mismatch>) -> Self {
        Self {
            mode,
            equal: mismatches.is_empty(),
            mismatches,
        }
    }

    /// Machine-readable view with every value rendered to its display form.
    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            mode: self.mode,
            equal: self.equal,
            mismatches: self
                .mismatches
                .iter()
                .map(|m| MismatchSummary {
                    path: m.path.clone(),
                    kind: m.kind,
                    got: crate::render::render_side(m.got.as_ref()),
                    want: crate::render::render_side(m.want.as_ref()),
                })
                .collect(),
        }
    }

    /// Serialize the summary to a JSON string.
    ///
    /// # Errors
    ///
    /// * `Serialization` - If the summary could not be encoded
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}

/// Serializable form of a [`ComparisonResult`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResultSummary {
    pub mode: Mode,
    pub equal: bool,
    pub mismatches: Vec<MismatchSummary>,
}

/// Serializable form of a [`Mismatch`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MismatchSummary {
    pub path: Path,
    pub kind: MismatchKind,
    pub got: String,
    pub want: String,
}
