//! Error types for the portal's domain logic.
//!
//! Each concern gets its own enum so callers can match on exactly the
//! failures an operation can produce. [`crate::PortalError`] wraps the ones
//! that can abort the terminal application.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid assessment definitions and rejected assessment interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// An assessment must contain at least one question.
    #[error("assessment {0} has no questions")]
    NoQuestions(u32),

    /// The advertised duration must be positive.
    #[error("assessment {0} must have a positive duration")]
    ZeroDuration(u32),

    /// A question needs at least two options to be a choice.
    #[error("question {question} needs at least 2 options, found {found}")]
    TooFewOptions { question: u32, found: usize },

    /// The answer key points outside the option list.
    #[error("question {question} marks option {index} correct but has only {len} options")]
    CorrectOptionOutOfRange { question: u32, index: usize, len: usize },

    /// A learner selected an option that does not exist.
    #[error("option {option} is out of range for question {position} ({len} options)")]
    OptionOutOfRange {
        position: usize,
        option: usize,
        len: usize,
    },

    /// Submit was requested before the final question was answered.
    #[error("answer the final question before submitting")]
    NotReadyToSubmit,
}

/// Rejected module progress updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("unknown module: {0}")]
    UnknownModule(u32),

    #[error("module {0} is locked")]
    Locked(u32),

    #[error("module {0} has not been started")]
    NotStarted(u32),

    #[error("percentage must be between 0 and 100, got {0}")]
    PercentOutOfRange(u8),
}

/// A single failed form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field failures of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Sign-in failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The login form itself was incomplete or malformed.
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Registration wizard failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Invalid(FieldErrors),

    /// Registration can only be completed from the verification step.
    #[error("registration can only be completed from the final step")]
    NotFinalStep,
}

/// Rejected job board actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("unknown job: {0}")]
    UnknownJob(u32),

    #[error("job {0} is not accepting applications")]
    PostingClosed(u32),

    #[error("{applicant} has already applied to job {job}")]
    AlreadyApplied { job: u32, applicant: String },
}

/// Failures of the session storage collaborator.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Catalog loading failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} defines assessment {id} more than once")]
    DuplicateAssessment { origin: String, id: u32 },

    #[error("{origin} defines module {id} more than once")]
    DuplicateModule { origin: String, id: u32 },

    #[error("{origin} must contain at least one module")]
    NoModules { origin: String },

    #[error("{origin} defines job {id} more than once")]
    DuplicateJob { origin: String, id: u32 },

    #[error("{origin}: application {application} refers to unknown job {job}")]
    UnknownJob {
        origin: String,
        application: u32,
        job: u32,
    },
}
