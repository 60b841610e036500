//! Step registry and dispatcher.
//!
//! [`StepRegistry`] stores ordered (pattern, handler) entries per
//! keyword. Methods return [`Result<Self>`] so registrations can be
//! chained ergonomically; the registry is built once before scenarios
//! run and is read-only during execution.
//!
//! Dispatch scans a keyword's entries in registration order and invokes
//! the first full match exactly once, awaiting the handler to completion
//! before returning control to the runner. When several patterns match
//! the same text the first-registered one wins and the shadowed patterns
//! are reported through a `warn!` diagnostic.

use tracing::{debug, warn};

use crate::{
    error::{DispatchError, RegistryError, Result},
    handler::{IntoStepHandler, StepHandler},
    pattern::StepPattern,
    step::{Step, StepKeyword},
};


struct StepDefinition {
    pattern: StepPattern,
    handler: StepHandler,
}

impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered collection of step definitions keyed by phrase category.
#[derive(Debug, Default)]
pub struct StepRegistry {
    given: Vec<StepDefinition>,
    when: Vec<StepDefinition>,
    then: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Register a step definition under `keyword`.
    ///
    /// Insertion order is significant: when several patterns match a
    /// dispatched text, the first-registered definition wins.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedPattern`] when `pattern` does
    /// not compile, or [`RegistryError::ArityMismatch`] when the
    /// handler's argument count differs from the pattern's capture-group
    /// count.
    pub fn register<Args>(
        mut self,
        keyword: StepKeyword,
        pattern: &str,
        handler: impl IntoStepHandler<Args>,
    ) -> Result<Self> {
        let compiled = StepPattern::compile(pattern)?;
        let arity = arity_of(&handler);
        if compiled.capture_count() != arity {
            return Err(RegistryError::ArityMismatch {
                pattern: pattern.to_owned(),
                captures: compiled.capture_count(),
                arity,
            });
        }
        debug!(%keyword, pattern, arity, "registering step definition");
        self.entries_mut(keyword).push(StepDefinition {
            pattern: compiled,
            handler: handler.into_handler(),
        });
        Ok(self)
    }

    /// Register a precondition step.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::register`].
    pub fn given<Args>(self, pattern: &str, handler: impl IntoStepHandler<Args>) -> Result<Self> {
        self.register(StepKeyword::Given, pattern, handler)
    }

    /// Register an action step.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::register`].
    pub fn when<Args>(self, pattern: &str, handler: impl IntoStepHandler<Args>) -> Result<Self> {
        self.register(StepKeyword::When, pattern, handler)
    }

    /// Register an assertion step.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::register`].
    pub fn then<Args>(self, pattern: &str, handler: impl IntoStepHandler<Args>) -> Result<Self> {
        self.register(StepKeyword::Then, pattern, handler)
    }

    /// Number of definitions registered under `keyword`.
    #[must_use]
    pub fn definition_count(&self, keyword: StepKeyword) -> usize {
        self.entries(keyword).len()
    }

    /// Resolve `text` against the definitions registered under `keyword`
    /// and run the matching handler to completion.
    ///
    /// Each dispatch is stateless with respect to prior dispatches; the
    /// registry itself never changes between calls.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnmatchedStep`] when no pattern matches
    /// (no handler is invoked), or [`DispatchError::Handler`] carrying
    /// the handler's own error unmodified.
    pub async fn dispatch(
        &self,
        keyword: StepKeyword,
        text: &str,
    ) -> Result<(), DispatchError> {
        let entries = self.entries(keyword);
        let Some((index, definition, arguments)) = entries
            .iter()
            .enumerate()
            .find_map(|(index, definition)| {
                let arguments = definition.pattern.captures(text)?;
                Some((index, definition, arguments))
            })
        else {
            return Err(DispatchError::UnmatchedStep {
                keyword,
                text: text.to_owned(),
            });
        };

        let shadowed: Vec<&str> = entries[index + 1..]
            .iter()
            .filter(|definition| definition.pattern.is_match(text))
            .map(|definition| definition.pattern.as_str())
            .collect();
        if !shadowed.is_empty() {
            warn!(
                %keyword,
                text,
                winner = definition.pattern.as_str(),
                ?shadowed,
                "step text matches multiple patterns; first registered wins",
            );
        }

        debug!(%keyword, text, pattern = definition.pattern.as_str(), "dispatching step");
        (definition.handler)(arguments)
            .await
            .map_err(DispatchError::Handler)
    }

    /// Dispatch a [`Step`] under its own keyword.
    ///
    /// # Errors
    ///
    /// See [`StepRegistry::dispatch`].
    pub async fn dispatch_step(&self, step: &Step) -> Result<(), DispatchError> {
        self.dispatch(step.keyword(), step.text()).await
    }

    fn entries(&self, keyword: StepKeyword) -> &[StepDefinition] {
        match keyword {
            StepKeyword::Given => &self.given,
            StepKeyword::When => &self.when,
            StepKeyword::Then => &self.then,
        }
    }

    fn entries_mut(&mut self, keyword: StepKeyword) -> &mut Vec<StepDefinition> {
        match keyword {
            StepKeyword::Given => &mut self.given,
            StepKeyword::When => &mut self.when,
            StepKeyword::Then => &mut self.then,
        }
    }
}

fn arity_of<Args, H: IntoStepHandler<Args>>(_: &H) -> usize { H::ARITY }
