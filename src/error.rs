//! Canonical error and result types for the crate.
//!
//! Registration failures are fatal at startup; dispatch failures are
//! fatal to the current scenario. Handler errors pass through the
//! dispatcher transparently, with no added wrapping.

use thiserror::Error;

use crate::{handler::HandlerError, step::StepKeyword};

/// Errors raised while building a step registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The pattern's regular expression does not compile.
    #[error("malformed step pattern `{pattern}`")]
    MalformedPattern {
        /// Pattern text as supplied to `register`.
        pattern: String,
        /// Underlying compilation failure.
        #[source]
        source: regex::Error,
    },
    /// The handler's argument count differs from the pattern's
    /// capture-group count.
    #[error(
        "step pattern `{pattern}` captures {captures} group(s) but the handler takes {arity} argument(s)"
    )]
    ArityMismatch {
        /// Pattern text as supplied to `register`.
        pattern: String,
        /// Capture groups the pattern extracts.
        captures: usize,
        /// Arguments the handler accepts.
        arity: usize,
    },
}

/// Errors raised while dispatching a single step.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// No registered pattern matches the step text.
    #[error("no registered {keyword} step matches `{text}`")]
    UnmatchedStep {
        /// Keyword the step was dispatched under.
        keyword: StepKeyword,
        /// Literal step text that failed to match.
        text: String,
    },
    /// The matched handler failed; the underlying error is surfaced
    /// unmodified.
    #[error(transparent)]
    Handler(HandlerError),
}

/// Errors raised while building or running a scenario.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScenarioError {
    /// `and` was used before any Given/When/Then step established a
    /// keyword to repeat.
    #[error("`and` used before any Given, When, or Then step")]
    DanglingConjunction,
    /// A step failed; the scenario is aborted at that step.
    #[error("step `{step}` failed")]
    StepFailed {
        /// Display text of the offending step.
        step: String,
        /// Underlying dispatch failure.
        #[source]
        source: DispatchError,
    },
}

/// Result type used throughout the builder API.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
