//! Capability interfaces for the automation driver.
//!
//! Step handlers perform their side effects against an external
//! automation driver: triggering an installation, navigating an
//! authenticated browser session, and asserting page content. Each
//! concern is a narrow trait so harnesses can substitute recording or
//! real drivers independently. Driver errors are [`HandlerError`]s and
//! cross the dispatcher unmodified.

use async_trait::async_trait;

use crate::handler::HandlerError;

/// Parameters for an installation run.
///
/// The configuration directory and the optional cache archive are
/// opaque identifiers passed through to the driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallRequest {
    /// Installation profile to apply.
    pub profile: String,
    /// Configuration sync directory to install from.
    pub config: String,
    /// Optional install cache archive to restore instead of a full
    /// installation.
    pub cache: Option<String>,
}

/// Installs the system under test from a configuration directory.
#[async_trait]
pub trait Installer: Send + Sync {
    /// Run an installation with the given parameters.
    async fn install(&self, request: InstallRequest) -> Result<(), HandlerError>;
}

/// Drives an authenticated browser session.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Start a session for the named user.
    async fn start_session(&self, user: &str) -> Result<(), HandlerError>;

    /// Navigate the session to a path.
    async fn visit(&self, path: &str) -> Result<(), HandlerError>;
}

/// Asserts against the currently rendered page.
#[async_trait]
pub trait Asserter: Send + Sync {
    /// Fail unless the current page contains `text`.
    async fn assert_page_contains(&self, text: &str) -> Result<(), HandlerError>;
}

/// Full driver surface a step catalogue is wired against.
pub trait AutomationDriver: Installer + Navigator + Asserter {}

impl<T: Installer + Navigator + Asserter> AutomationDriver for T {}
