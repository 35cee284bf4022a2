use thiserror::Error;

/// Result type alias using NormError
pub type Result<T> = std::result::Result<T, NormError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Randomness
    RandomSourceUnavailable,

    // Pattern compilation
    InvalidPattern,

    // Container shape
    InconsistentLengths,
    InvalidInput,

    // Collaborator boundary
    InvalidLogLevel,
    AlreadyExists,

    // Configuration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::RandomSourceUnavailable => "ERR_RANDOM_SOURCE_UNAVAILABLE",
            ExErrorKind::InvalidPattern => "ERR_INVALID_PATTERN",
            ExErrorKind::InconsistentLengths => "ERR_INCONSISTENT_LENGTHS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidLogLevel => "ERR_INVALID_LOG_LEVEL",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// Whether the caller can reasonably recover without changing its input.
    ///
    /// Only entropy failures qualify: `text::random_or_fallback` recovers from
    /// them by switching generators.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExErrorKind::RandomSourceUnavailable)
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the mapping key or registry name the error is about
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for normkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormError {
    /// The secure entropy source could not be read
    #[error("Secure random source unavailable: {reason}")]
    RandomSourceUnavailable { reason: String },

    /// A glob pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A stacked-field sequence does not match the length of the first one
    #[error("Stacked field '{key}' has {actual} entries, expected {expected}")]
    InconsistentLengths {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// A stacked-field value is not a sequence
    #[error("Stacked field '{key}' is not a sequence")]
    NotASequence { key: String },

    /// Log level outside the known severities
    #[error("Invalid log level supplied: {level}")]
    InvalidLogLevel { level: String },

    /// Schema name registered twice without force
    #[error("Schema already registered: {name}")]
    SchemaAlreadyRegistered { name: String },

    /// Options could not be decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<NormError> for ExError {
    fn from(err: NormError) -> Self {
        match err {
            NormError::RandomSourceUnavailable { reason } => {
                ExError::new(ExErrorKind::RandomSourceUnavailable)
                    .with_op("random")
                    .with_message(reason)
            }

            NormError::InvalidPattern { pattern, reason } => {
                ExError::new(ExErrorKind::InvalidPattern)
                    .with_op("is")
                    .with_key(pattern)
                    .with_message(reason)
            }

            NormError::InconsistentLengths {
                key,
                expected,
                actual,
            } => ExError::new(ExErrorKind::InconsistentLengths)
                .with_op("normalize_stacked")
                .with_key(key)
                .with_message(format!("expected {} entries, found {}", expected, actual)),

            NormError::NotASequence { key } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("normalize_stacked")
                .with_key(key)
                .with_message("Stacked field is not a sequence"),

            NormError::InvalidLogLevel { level } => ExError::new(ExErrorKind::InvalidLogLevel)
                .with_op("log")
                .with_message(format!("Invalid log level: {}", level)),

            NormError::SchemaAlreadyRegistered { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("register")
                .with_key(name)
                .with_message("Schema already registered"),

            NormError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to NormError
impl From<serde_json::Error> for NormError {
    fn from(err: serde_json::Error) -> Self {
        NormError::Serialization {
            message: err.to_string(),
        }
    }
}
