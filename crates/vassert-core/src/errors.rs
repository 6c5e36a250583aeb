use thiserror::Error;
use vassert_core_types::Severity;

/// Result type alias using VassertError
pub type Result<T> = std::result::Result<T, VassertError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Mismatches are never errors: a comparison always produces a result. The
/// kinds below cover the surfaces around the comparator (options, the output
/// sink and the severity hand-off to the harness). Each kind maps to a stable
/// error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Comparison or render options failed validation
    InvalidOptions,
    /// A critical assertion failed; the harness should abort the test
    CriticalFailure,
    /// The output sink rejected a write
    SinkWrite,
    /// A result could not be serialized
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
            ExErrorKind::CriticalFailure => "ERR_CRITICAL_FAILURE",
            ExErrorKind::SinkWrite => "ERR_SINK_WRITE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus context
/// (operation, assertion label, severity) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    label: Option<String>,
    severity: Option<Severity>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            label: None,
            severity: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add assertion label context
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add severity context
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the assertion label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the severity, if any
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(label) = &self.label {
            write!(f, " (label: {})", label)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for vassert operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VassertError {
    /// Options failed validation or could not be parsed
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// A critical assertion failed
    #[error("Critical assertion failed: {label} ({mismatches} mismatches)")]
    CriticalFailure { label: String, mismatches: usize },

    /// The output sink rejected a write
    #[error("Output sink write failed: {reason}")]
    SinkWrite { reason: String },

    /// Serialization failed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<VassertError> for ExError {
    fn from(err: VassertError) -> Self {
        match err {
            VassertError::InvalidOptions { reason } => ExError::new(ExErrorKind::InvalidOptions)
                .with_op("validate_options")
                .with_message(reason),

            VassertError::CriticalFailure { label, mismatches } => {
                ExError::new(ExErrorKind::CriticalFailure)
                    .with_label(label)
                    .with_severity(Severity::Critical)
                    .with_message(format!(
                        "critical assertion failed with {} mismatches",
                        mismatches
                    ))
            }

            VassertError::SinkWrite { reason } => ExError::new(ExErrorKind::SinkWrite)
                .with_op("write_block")
                .with_message(reason),

            VassertError::Serialization { reason } => {
                ExError::new(ExErrorKind::Serialization).with_message(reason)
            }
        }
    }
}

impl From<std::io::Error> for VassertError {
    fn from(err: std::io::Error) -> Self {
        VassertError::SinkWrite {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VassertError {
    fn from(err: serde_json::Error) -> Self {
        VassertError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidOptions, "ERR_INVALID_OPTIONS"),
            (ExErrorKind::CriticalFailure, "ERR_CRITICAL_FAILURE"),
            (ExErrorKind::SinkWrite, "ERR_SINK_WRITE"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_ex_error_display() {
        let err = ExError::new(ExErrorKind::SinkWrite)
            .with_op("write_block")
            .with_message("broken pipe");
        assert_eq!(
            err.to_string(),
            "[ERR_SINK_WRITE] in operation 'write_block': broken pipe"
        );
    }

    #[test]
    fn test_ex_error_source_chain() {
        let inner = ExError::new(ExErrorKind::Serialization).with_message("inner");
        let outer = ExError::new(ExErrorKind::SinkWrite).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Serialization)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn test_io_error_becomes_sink_write() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: VassertError = io.into();
        assert!(matches!(err, VassertError::SinkWrite { .. }));
    }
}
