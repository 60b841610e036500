//! Programmatic scenarios and sequential step execution.
//!
//! A [`Scenario`] is an ordered list of steps run strictly one at a
//! time: each step's handler is awaited to completion before the next
//! step is dispatched. The first failure aborts the scenario and is
//! reported with the offending step's text.

use tracing::debug;

use crate::{
    error::ScenarioError,
    registry::StepRegistry,
    step::{Step, StepKeyword},
};

/// Named ordered sequence of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    steps: Vec<Step>,
}

impl Scenario {
    /// Start building a scenario with the given name.
    pub fn named(name: impl Into<String>) -> ScenarioBuilder {
        ScenarioBuilder {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Scenario name, used in logs.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// The steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] { &self.steps }

    /// Dispatch each step against `registry`, in order, failing fast.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::StepFailed`] naming the offending step
    /// and carrying the dispatch failure as its source.
    pub async fn run(&self, registry: &StepRegistry) -> Result<(), ScenarioError> {
        debug!(scenario = %self.name, steps = self.steps.len(), "running scenario");
        for step in &self.steps {
            registry
                .dispatch_step(step)
                .await
                .map_err(|source| ScenarioError::StepFailed {
                    step: step.to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Builder assembling a [`Scenario`] step by step.
#[derive(Debug)]
pub struct ScenarioBuilder {
    name: String,
    steps: Vec<Step>,
}

impl ScenarioBuilder {
    /// Append a `Given` step.
    #[must_use]
    pub fn given(self, text: impl Into<String>) -> Self {
        self.push(StepKeyword::Given, text)
    }

    /// Append a `When` step.
    #[must_use]
    pub fn when(self, text: impl Into<String>) -> Self {
        self.push(StepKeyword::When, text)
    }

    /// Append a `Then` step.
    #[must_use]
    pub fn then(self, text: impl Into<String>) -> Self {
        self.push(StepKeyword::Then, text)
    }

    /// Append a step repeating the previous step's keyword, the role
    /// `And` plays in scenario text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::DanglingConjunction`] when no previous
    /// step establishes a keyword to repeat.
    pub fn and(self, text: impl Into<String>) -> Result<Self, ScenarioError> {
        let Some(keyword) = self.steps.last().map(Step::keyword) else {
            return Err(ScenarioError::DanglingConjunction);
        };
        Ok(self.push(keyword, text))
    }

    /// Finish building and return the scenario.
    #[must_use]
    pub fn build(self) -> Scenario {
        Scenario {
            name: self.name,
            steps: self.steps,
        }
    }

    fn push(mut self, keyword: StepKeyword, text: impl Into<String>) -> Self {
        self.steps.push(Step::new(keyword, text));
        self
    }
}
