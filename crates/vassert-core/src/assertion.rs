//! Fluent assertion front door.
//!
//! Ties the comparator and the renderer together:
//!
//! ```
//! use vassert_core::assertion::{Assertion, BufferOutput, Reporter};
//!
//! let mut reporter = Reporter::new(BufferOutput::new());
//! reporter
//!     .report(reporter.for_label("A message").that(false).equals(true))
//!     .unwrap();
//!
//! assert_eq!(
//!     reporter.output().contents(),
//!     "Error:A message\n    Got       false\n    Expect == true\n"
//! );
//! ```
//!
//! Nothing here panics or unwinds. A failed `Critical` assertion is returned
//! as [`VassertError::CriticalFailure`] from [`Verdict::into_result`] and
//! [`Reporter::report`]; the harness decides whether to abort.

use crate::compare::model::ResultSummary;
use crate::compare::{compare_with, Check, ComparisonResult};
use crate::config::{CompareOptions, RenderOptions};
use crate::errors::{Result, VassertError};
use crate::render::{join_block, render_block, render_nil_check, render_result};
use crate::value::Value;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use vassert_core_types::Severity;

/// An assertion under construction: label, severity and options.
#[derive(Debug, Clone, Default)]
pub struct Assertion {
    label: String,
    severity: Severity,
    compare_options: CompareOptions,
    render_options: RenderOptions,
}

impl Assertion {
    /// Unlabelled assertion; its header renders as `Error:`.
    pub fn with() -> Self {
        Self::default()
    }

    /// Assertion whose header carries `label`.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Report failures at `Critical` level.
    pub fn critical(self) -> Self {
        self.at(Severity::Critical)
    }

    pub fn at(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn compare_options(mut self, options: CompareOptions) -> Self {
        self.compare_options = options;
        self
    }

    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Attach the value under test.
    pub fn that(self, got: impl Into<Value>) -> Subject {
        Subject {
            assertion: self,
            got: got.into(),
        }
    }
}

/// An assertion bound to the value under test.
#[derive(Debug, Clone)]
pub struct Subject {
    assertion: Assertion,
    got: Value,
}

impl Subject {
    pub fn equals(self, want: impl Into<Value>) -> Verdict {
        self.binary(Check::Equals, want.into())
    }

    pub fn not_equals(self, want: impl Into<Value>) -> Verdict {
        self.binary(Check::NotEquals, want.into())
    }

    pub fn deep_equals(self, want: impl Into<Value>) -> Verdict {
        self.binary(Check::DeepEquals, want.into())
    }

    pub fn deep_not_equals(self, want: impl Into<Value>) -> Verdict {
        self.binary(Check::DeepNotEquals, want.into())
    }

    pub fn is_nil(self) -> Verdict {
        self.unary(Check::IsNil)
    }

    pub fn is_not_nil(self) -> Verdict {
        self.unary(Check::IsNotNil)
    }

    fn binary(self, check: Check, want: Value) -> Verdict {
        let started = Instant::now();
        let op = check.op_name();
        log_op_start!(op, label = self.assertion.label.as_str());

        let mode = check.mode().unwrap_or(crate::compare::Mode::Shallow);
        let result = compare_with(&self.got, &want, mode, &self.assertion.compare_options);
        let passed = result.equal != check.negated();
        let lines = if passed {
            Vec::new()
        } else {
            render_result(
                &self.got,
                &want,
                &result,
                check.negated(),
                &self.assertion.render_options,
            )
        };

        log_op_end!(
            op,
            duration_ms = started.elapsed().as_millis() as u64,
            passed = passed,
            mismatches = result.mismatches.len() as u64
        );

        Verdict {
            check,
            severity: self.assertion.severity,
            label: self.assertion.label,
            passed,
            result: Some(result),
            lines,
        }
    }

    fn unary(self, check: Check) -> Verdict {
        let started = Instant::now();
        let op = check.op_name();
        log_op_start!(op, label = self.assertion.label.as_str());

        let passed = self.got.is_nil() != check.negated();
        let lines = if passed {
            Vec::new()
        } else {
            render_nil_check(&self.got, check.negated())
        };

        log_op_end!(
            op,
            duration_ms = started.elapsed().as_millis() as u64,
            passed = passed
        );

        Verdict {
            check,
            severity: self.assertion.severity,
            label: self.assertion.label,
            passed,
            result: None,
            lines,
        }
    }
}

/// Outcome of one assertion.
///
/// `lines` holds the rendered failure lines (without header) and is empty
/// when the assertion passed. `result` is `None` for the unary nil checks.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub check: Check,
    pub severity: Severity,
    pub label: String,
    pub passed: bool,
    pub result: Option<ComparisonResult>,
    pub lines: Vec<String>,
}

impl Verdict {
    pub fn failed(&self) -> bool {
        !self.passed
    }

    /// Header plus indented lines, or `None` when the assertion passed.
    pub fn block(&self) -> Option<Vec<String>> {
        self.failed()
            .then(|| render_block(self.severity, &self.label, &self.lines))
    }

    /// [`Verdict::block`] joined into the text written to a sink.
    pub fn text(&self) -> Option<String> {
        self.block().map(|block| join_block(&block))
    }

    /// True if the harness should abort the running test.
    pub fn aborts(&self) -> bool {
        self.failed() && self.severity.aborts()
    }

    /// Machine-readable view of this verdict.
    pub fn summary(&self) -> VerdictSummary {
        VerdictSummary {
            check: self.check,
            severity: self.severity,
            label: self.label.clone(),
            passed: self.passed,
            result: self.result.as_ref().map(ComparisonResult::summary),
            lines: self.lines.clone(),
        }
    }

    /// # Errors
    ///
    /// * `Serialization` - If the summary could not be encoded
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }

    /// `Ok` unless this is a failed critical assertion.
    ///
    /// # Errors
    ///
    /// * `CriticalFailure` - If the assertion failed at `Critical` severity
    pub fn into_result(self) -> Result<()> {
        if self.aborts() {
            return Err(VassertError::CriticalFailure {
                mismatches: self.result.as_ref().map_or(0, |r| r.mismatches.len()),
                label: self.label,
            });
        }
        Ok(())
    }
}

/// Serializable form of a [`Verdict`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerdictSummary {
    pub check: Check,
    pub severity: Severity,
    pub label: String,
    pub passed: bool,
    pub result: Option<ResultSummary>,
    pub lines: Vec<String>,
}

/// Destination for rendered failure blocks.
pub trait Output {
    /// Write one complete block (no trailing newline included).
    ///
    /// # Errors
    ///
    /// * `SinkWrite` - If the underlying sink rejected the write
    fn write_block(&mut self, block: &str) -> Result<()>;
}

/// In-memory sink; each block is followed by a newline.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    text: String,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Output for BufferOutput {
    fn write_block(&mut self, block: &str) -> Result<()> {
        self.text.push_str(block);
        self.text.push('\n');
        Ok(())
    }
}

/// Sink over any `io::Write`, e.g. stdout or a file.
#[derive(Debug)]
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriterOutput<W> {
    fn write_block(&mut self, block: &str) -> Result<()> {
        writeln!(self.writer, "{block}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Runs assertions against a shared configuration and writes failures to an
/// [`Output`] in the order they are reported.
#[derive(Debug)]
pub struct Reporter<O: Output> {
    output: O,
    compare_options: CompareOptions,
    render_options: RenderOptions,
    failures: usize,
}

impl<O: Output> Reporter<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            compare_options: CompareOptions::default(),
            render_options: RenderOptions::default(),
            failures: 0,
        }
    }

    /// Reporter with validated options.
    ///
    /// # Errors
    ///
    /// * `InvalidOptions` - If either option set fails validation
    pub fn with_options(
        output: O,
        compare_options: CompareOptions,
        render_options: RenderOptions,
    ) -> Result<Self> {
        compare_options.validate()?;
        render_options.validate()?;
        Ok(Self {
            output,
            compare_options,
            render_options,
            failures: 0,
        })
    }

    /// Unlabelled assertion carrying this reporter's options.
    pub fn with(&self) -> Assertion {
        self.for_label("")
    }

    /// Labelled assertion carrying this reporter's options.
    pub fn for_label(&self, label: impl Into<String>) -> Assertion {
        Assertion::labelled(label)
            .compare_options(self.compare_options.clone())
            .render_options(self.render_options.clone())
    }

    /// Write a failed verdict's block to the output.
    ///
    /// # Errors
    ///
    /// * `SinkWrite` - If the output rejected the block
    /// * `CriticalFailure` - If the verdict failed at `Critical` severity; the
    ///   block has already been written
    pub fn report(&mut self, verdict: Verdict) -> Result<()> {
        let started = Instant::now();
        let Some(text) = verdict.text() else {
            return Ok(());
        };
        self.failures += 1;
        self.output.write_block(&text)?;

        let op = verdict.check.op_name();
        verdict.into_result().map_err(|err| {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            err
        })
    }

    /// Number of failed verdicts reported so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Direct access to the sink, e.g. for harness output between blocks.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
