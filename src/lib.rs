//! Public API for the `stepframe` library.
//!
//! This crate provides building blocks for behaviour-driven test glue:
//! a registry mapping pattern-matched step phrases to async handlers, a
//! dispatcher resolving literal step text to exactly one handler, and
//! capability traits for the automation driver those handlers call into.

pub mod driver;
pub mod error;
pub mod handler;
pub mod pattern;
pub mod prelude;
pub mod registry;
pub mod scenario;
pub mod step;
pub mod steps;

/// Result type alias re-exported for convenience when working with the
/// registry builder.
pub use error::Result;
pub use error::{DispatchError, RegistryError, ScenarioError};
pub use handler::{HandlerError, IntoStepHandler, StepHandler};
pub use pattern::StepPattern;
pub use registry::StepRegistry;
pub use scenario::{Scenario, ScenarioBuilder};
pub use step::{CapturedArguments, Step, StepKeyword};
