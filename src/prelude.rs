//! Optional convenience imports for common stepframe workflows.
//!
//! This module is intentionally small and focused on high-frequency
//! types. Prefer importing specialised APIs directly from their owning
//! modules.
//!
//! # Examples
//!
//! ```rust
//! use stepframe::prelude::*;
//!
//! fn build() -> Result<StepRegistry> { Ok(StepRegistry::new()) }
//! ```

pub use crate::{
    driver::{Asserter, AutomationDriver, InstallRequest, Installer, Navigator},
    error::{DispatchError, RegistryError, Result, ScenarioError},
    handler::{HandlerError, IntoStepHandler, StepHandler},
    registry::StepRegistry,
    scenario::{Scenario, ScenarioBuilder},
    step::{CapturedArguments, Step, StepKeyword},
};
