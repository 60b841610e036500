//! Step vocabulary shared by the registry, dispatcher, and runner.
//!
//! A [`Step`] pairs a [`StepKeyword`] with the literal phrase a scenario
//! uses; [`CapturedArguments`] carries the strings a matching pattern
//! extracted, in left-to-right group order.

use thiserror::Error;

/// Phrase category a step definition is registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Precondition steps.
    Given,
    /// Action steps.
    When,
    /// Assertion steps.
    Then,
}

impl StepKeyword {
    /// Return the keyword as it appears in scenario text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl std::fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a keyword from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown step keyword `{0}`, expected Given, When, or Then")]
pub struct UnknownKeywordError(pub String);

impl std::str::FromStr for StepKeyword {
    type Err = UnknownKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Given" => Ok(Self::Given),
            "When" => Ok(Self::When),
            "Then" => Ok(Self::Then),
            other => Err(UnknownKeywordError(other.to_owned())),
        }
    }
}

/// A single scenario step: a keyword plus the literal phrase to match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    keyword: StepKeyword,
    text: String,
}

impl Step {
    /// Create a step from a keyword and its literal text.
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }

    /// Keyword the step dispatches under.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword { self.keyword }

    /// Literal step text, without the keyword.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.keyword, self.text)
    }
}

/// Strings extracted from a successful pattern match, in group order.
///
/// Arguments are passed positionally to the handler; no validation is
/// applied beyond what the pattern itself encodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedArguments(Vec<String>);

/// Error returned when a capture list is converted to the wrong arity.
///
/// Registration validates handler arity against the pattern's group
/// count, so this surfaces only if a registry is assembled by other
/// means.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("handler expects {expected} captured arguments, pattern produced {actual}")]
pub struct CaptureCountError {
    /// Arity the handler was declared with.
    pub expected: usize,
    /// Number of captures the match produced.
    pub actual: usize,
}

impl CapturedArguments {
    /// Wrap an ordered list of captured strings.
    #[must_use]
    pub fn new(captures: Vec<String>) -> Self { Self(captures) }

    /// Number of captured arguments.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns `true` when the match produced no captures.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// View the captures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] { &self.0 }

    /// Consume the captures as a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> { self.0 }

    /// Convert the captures into a fixed-size array for typed handler
    /// invocation.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureCountError`] if the capture count is not `N`.
    pub fn into_array<const N: usize>(self) -> Result<[String; N], CaptureCountError> {
        let actual = self.0.len();
        <[String; N]>::try_from(self.0).map_err(|_| CaptureCountError {
            expected: N,
            actual,
        })
    }
}

impl From<Vec<String>> for CapturedArguments {
    fn from(captures: Vec<String>) -> Self { Self(captures) }
}

impl<const N: usize> From<[&str; N]> for CapturedArguments {
    fn from(captures: [&str; N]) -> Self {
        Self(captures.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case("When", StepKeyword::When)]
    #[case("Then", StepKeyword::Then)]
    fn keyword_round_trips_through_text(#[case] text: &str, #[case] keyword: StepKeyword) {
        assert_eq!(text.parse::<StepKeyword>(), Ok(keyword));
        assert_eq!(keyword.to_string(), text);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        let err = "Whenever".parse::<StepKeyword>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown step keyword `Whenever`, expected Given, When, or Then",
        );
    }

    #[test]
    fn step_displays_keyword_and_text() {
        let step = Step::new(StepKeyword::Given, "there is a configuration sync directory");
        assert_eq!(
            step.to_string(),
            "Given there is a configuration sync directory",
        );
    }

    #[test]
    fn captures_convert_to_matching_arity() {
        let args = CapturedArguments::from(["features/config", "Test page type"]);
        let [config, name] = args.into_array().expect("arity matches");
        assert_eq!(config, "features/config");
        assert_eq!(name, "Test page type");
    }

    #[test]
    fn capture_count_mismatch_is_reported() {
        let args = CapturedArguments::from(["features/config"]);
        let err = args.into_array::<2>().unwrap_err();
        assert_eq!(err, CaptureCountError {
            expected: 2,
            actual: 1,
        });
    }
}
