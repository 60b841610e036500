//! Step definitions for the content-management installation workflow.
//!
//! These definitions validate that installing from a configuration sync
//! directory (optionally restored from an install cache archive) brings
//! up the content types the configuration declares. Handlers delegate to
//! the injected [`AutomationDriver`]; the registry is built explicitly
//! rather than through ambient registration globals.

use std::sync::Arc;

use crate::{
    driver::{Asserter, AutomationDriver, InstallRequest, Installer, Navigator},
    error::Result,
    handler::HandlerError,
    registry::StepRegistry,
};

/// Installation profile applied by every install step.
pub const DEFAULT_PROFILE: &str = "minimal";

/// User the content-type listing is viewed as.
pub const ADMIN_USER: &str = "admin";

/// Path of the content-type listing page.
pub const CONTENT_TYPE_LISTING: &str = "/admin/structure/types";

/// Build the registry of configuration-installation step definitions.
///
/// # Errors
///
/// Returns [`RegistryError`](crate::error::RegistryError) if a pattern
/// fails to compile or a handler's arity disagrees with its pattern;
/// with the definitions below this indicates a programming error in the
/// catalogue itself.
pub fn configuration_steps(driver: Arc<dyn AutomationDriver>) -> Result<StepRegistry> {
    let installer = Arc::clone(&driver);
    let cached_installer = Arc::clone(&driver);
    let navigator = Arc::clone(&driver);
    let asserter = driver;

    StepRegistry::new()
        .given(
            r#"^there is a configuration sync directory "([^"]*)"$"#,
            |_directory: String| async { Ok::<(), HandlerError>(()) },
        )?
        .given(
            r#"^"([^"]*)" contains a new content type "([^"]*)"$"#,
            |_directory: String, _content_type: String| async { Ok::<(), HandlerError>(()) },
        )?
        .when(
            r#"^the test uses 'cy.drupalInstall' to install from "([^"]*)"$"#,
            move |config: String| {
                let installer = Arc::clone(&installer);
                async move {
                    installer
                        .install(InstallRequest {
                            profile: DEFAULT_PROFILE.to_owned(),
                            config,
                            cache: None,
                        })
                        .await
                }
            },
        )?
        .when(
            r#"^the test uses 'cy.drupalInstall' to install from "([^"]*)" from a install cache file "([^"]*)"$"#,
            move |config: String, cache: String| {
                let installer = Arc::clone(&cached_installer);
                async move {
                    installer
                        .install(InstallRequest {
                            profile: DEFAULT_PROFILE.to_owned(),
                            config,
                            cache: Some(cache),
                        })
                        .await
                }
            },
        )?
        .when(
            r"^the test accesses the content type listing$",
            move || {
                let navigator = Arc::clone(&navigator);
                async move {
                    navigator.start_session(ADMIN_USER).await?;
                    navigator.visit(CONTENT_TYPE_LISTING).await
                }
            },
        )?
        .then(
            r#"^there should be a content type called "([^"]*)"$"#,
            move |content_type: String| {
                let asserter = Arc::clone(&asserter);
                async move { asserter.assert_page_contains(&content_type).await }
            },
        )
}
