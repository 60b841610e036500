//! Compiled step patterns and capture extraction.
//!
//! A [`StepPattern`] wraps a regular expression authored by a step
//! definition. Patterns are used exactly as written; anchoring is the
//! author's responsibility, and the bundled catalogues anchor every
//! phrase with `^...$`.

use regex::Regex;

use crate::{error::RegistryError, step::CapturedArguments};

/// Textual matcher associated with a registered step definition.
#[derive(Clone, Debug)]
pub struct StepPattern {
    regex: Regex,
}

impl StepPattern {
    /// Compile a pattern from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedPattern`] when the expression
    /// does not compile.
    pub fn compile(pattern: &str) -> Result<Self, RegistryError> {
        let regex = Regex::new(pattern).map_err(|source| RegistryError::MalformedPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Number of capture groups the pattern extracts (group 0 excluded).
    #[must_use]
    pub fn capture_count(&self) -> usize { self.regex.captures_len() - 1 }

    /// Match `text` and extract the captured groups in order.
    ///
    /// Returns `None` when the pattern does not match. A group that did
    /// not participate in the match captures the empty string.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<CapturedArguments> {
        let captures = self.regex.captures(text)?;
        let arguments = captures
            .iter()
            .skip(1)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_owned()))
            .collect();
        Some(CapturedArguments::new(arguments))
    }

    /// Returns `true` when the pattern matches `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool { self.regex.is_match(text) }

    /// The pattern's textual form, as registered.
    #[must_use]
    pub fn as_str(&self) -> &str { self.regex.as_str() }
}

impl std::fmt::Display for StepPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
