//! End-to-end tests for the installation workflow step catalogue.
//!
//! A recording driver stands in for the real automation driver so the
//! tests can assert exactly which collaborator operations each step
//! triggers, and in which order.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stepframe::{
    driver::{Asserter, AutomationDriver, InstallRequest, Installer, Navigator},
    error::{DispatchError, ScenarioError},
    handler::HandlerError,
    scenario::Scenario,
    steps::configuration_steps,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum DriverCall {
    Install(InstallRequest),
    StartSession(String),
    Visit(String),
    AssertContains(String),
}

#[derive(Debug, thiserror::Error)]
#[error("page does not contain `{0}`")]
struct PageContentMissing(String);

/// Driver that records every call and serves a canned page body.
#[derive(Default)]
struct RecordingDriver {
    calls: Mutex<Vec<DriverCall>>,
    page: String,
}

impl RecordingDriver {
    fn with_page(page: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            page: page.to_owned(),
        }
    }

    fn record(&self, call: DriverCall) {
        self.calls.lock().expect("lock").push(call);
    }

    fn calls(&self) -> Vec<DriverCall> { self.calls.lock().expect("lock").clone() }
}

#[async_trait]
impl Installer for RecordingDriver {
    async fn install(&self, request: InstallRequest) -> Result<(), HandlerError> {
        self.record(DriverCall::Install(request));
        Ok(())
    }
}

#[async_trait]
impl Navigator for RecordingDriver {
    async fn start_session(&self, user: &str) -> Result<(), HandlerError> {
        self.record(DriverCall::StartSession(user.to_owned()));
        Ok(())
    }

    async fn visit(&self, path: &str) -> Result<(), HandlerError> {
        self.record(DriverCall::Visit(path.to_owned()));
        Ok(())
    }
}

#[async_trait]
impl Asserter for RecordingDriver {
    async fn assert_page_contains(&self, text: &str) -> Result<(), HandlerError> {
        self.record(DriverCall::AssertContains(text.to_owned()));
        if self.page.contains(text) {
            Ok(())
        } else {
            Err(Box::new(PageContentMissing(text.to_owned())))
        }
    }
}

fn catalogue(driver: &Arc<RecordingDriver>) -> stepframe::StepRegistry {
    configuration_steps(Arc::clone(driver) as Arc<dyn AutomationDriver>)
        .expect("catalogue builds")
}

fn installation_scenario() -> Scenario {
    Scenario::named("installing from configuration creates content types")
        .given(r#"there is a configuration sync directory "features/config""#)
        .and(r#""features/config" contains a new content type "Test page type""#)
        .expect("previous step exists")
        .when(r#"the test uses 'cy.drupalInstall' to install from "features/config""#)
        .and("the test accesses the content type listing")
        .expect("previous step exists")
        .then(r#"there should be a content type called "Test page type""#)
        .build()
}

#[tokio::test]
async fn installation_scenario_drives_collaborators_in_order() {
    let driver = Arc::new(RecordingDriver::with_page("Test page type"));
    let registry = catalogue(&driver);

    installation_scenario()
        .run(&registry)
        .await
        .expect("scenario passes");

    assert_eq!(driver.calls(), [
        DriverCall::Install(InstallRequest {
            profile: "minimal".to_owned(),
            config: "features/config".to_owned(),
            cache: None,
        }),
        DriverCall::StartSession("admin".to_owned()),
        DriverCall::Visit("/admin/structure/types".to_owned()),
        DriverCall::AssertContains("Test page type".to_owned()),
    ]);
}

#[tokio::test]
async fn cached_install_passes_the_archive_through() {
    let driver = Arc::new(RecordingDriver::default());
    let registry = catalogue(&driver);

    registry
        .dispatch(
            stepframe::StepKeyword::When,
            r#"the test uses 'cy.drupalInstall' to install from "features/config" from a install cache file "features/install-cache.zip""#,
        )
        .await
        .expect("install step dispatches");

    assert_eq!(driver.calls(), [DriverCall::Install(InstallRequest {
        profile: "minimal".to_owned(),
        config: "features/config".to_owned(),
        cache: Some("features/install-cache.zip".to_owned()),
    })]);
}

#[tokio::test]
async fn failed_page_assertion_fails_the_scenario_at_the_then_step() {
    let driver = Arc::new(RecordingDriver::with_page("No content types available"));
    let registry = catalogue(&driver);

    let err = installation_scenario()
        .run(&registry)
        .await
        .expect_err("assertion step fails");

    let ScenarioError::StepFailed { step, source } = err else {
        panic!("expected step failure");
    };
    assert_eq!(
        step,
        r#"Then there should be a content type called "Test page type""#,
    );
    let DispatchError::Handler(inner) = source else {
        panic!("expected handler error");
    };
    assert!(inner.downcast_ref::<PageContentMissing>().is_some());
}

#[tokio::test]
async fn unknown_step_text_is_unmatched() {
    let driver = Arc::new(RecordingDriver::default());
    let registry = catalogue(&driver);

    let err = registry
        .dispatch(stepframe::StepKeyword::When, "the moon is made of cheese")
        .await
        .expect_err("no pattern matches");

    assert!(matches!(err, DispatchError::UnmatchedStep { .. }));
    assert!(driver.calls().is_empty());
}
