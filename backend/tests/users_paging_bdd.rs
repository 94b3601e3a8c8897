//! Behavioural tests for paged users retrieval over HTTP.
//!
//! Each scenario runs the users page service against the reqwest adapter and
//! a local HTTP double standing in for the users directory.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use httpmock::prelude::*;
use pagination::PageRequest;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use showcase::domain::ports::{UserDirectory, UserDirectoryError};
use showcase::domain::registration::{RegistrationReceipt, RegistrationSubmission};
use showcase::domain::{User, UsersPage, UsersPageService};
use showcase::outbound::users_api::UsersApiHttpSource;
use showcase::test_support::{MutableClock, fixture_now, sample_users};
use tokio::runtime::Runtime;
use url::Url;

/// Directory wrapper counting fetches that reach the HTTP adapter.
struct CountingDirectory {
    inner: UsersApiHttpSource,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl UserDirectory for CountingDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_users().await
    }

    async fn register(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<RegistrationReceipt, UserDirectoryError> {
        self.inner.register(submission).await
    }
}

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

/// Scenario state shared between steps.
#[derive(Default, ScenarioState)]
struct PagingWorld {
    runtime: Slot<RuntimeHandle>,
    server: Slot<Arc<MockServer>>,
    clock: Slot<Arc<MutableClock>>,
    fetches: Slot<Arc<AtomicUsize>>,
    service: Slot<UsersPageService>,
    outcome: Slot<Result<UsersPage, UserDirectoryError>>,
}

impl PagingWorld {
    fn start_directory(&self, respond: impl FnOnce(httpmock::Then)) {
        let server = Arc::new(MockServer::start());
        server.mock(|when, then| {
            when.method(Method::GET).path("/users");
            respond(then);
        });

        let base = Url::parse(&server.base_url()).expect("mock server URL");
        let fetches = Arc::new(AtomicUsize::new(0));
        let directory = CountingDirectory {
            inner: UsersApiHttpSource::new(base, Duration::from_secs(5)).expect("client builds"),
            fetches: fetches.clone(),
        };
        let clock = Arc::new(MutableClock::new(fixture_now()));

        self.runtime
            .set(RuntimeHandle(Arc::new(Runtime::new().expect("create runtime"))));
        self.service
            .set(UsersPageService::new(Arc::new(directory), clock.clone()));
        self.server.set(server);
        self.clock.set(clock);
        self.fetches.set(fetches);
    }

    fn request(&self, request: PageRequest) {
        let runtime = self.runtime.get().expect("runtime");
        let service = self.service.get().expect("service");
        let outcome = runtime.0.block_on(service.users_page(request));
        self.outcome.set(outcome);
    }

    fn page(&self) -> UsersPage {
        self.outcome
            .get()
            .expect("a page should have been requested")
            .expect("the directory should answer")
    }
}

#[fixture]
fn world() -> PagingWorld {
    PagingWorld::default()
}

#[given("a users directory holding {count:usize} users")]
fn a_users_directory_holding(world: &PagingWorld, count: usize) {
    let body = serde_json::to_value(sample_users(count)).expect("serialise users");
    world.start_directory(move |then| {
        then.status(200).json_body(body);
    });
}

#[given("a users directory answering with status {status:u16}")]
fn a_users_directory_answering_with_status(world: &PagingWorld, status: u16) {
    world.start_directory(move |then| {
        then.status(status).json_body(json!({ "error": "boom" }));
    });
}

#[when("page {page:usize} is requested with {limit:usize} users per page")]
fn page_is_requested(world: &PagingWorld, page: usize, limit: usize) {
    world.request(PageRequest::new(page, limit).expect("valid page request"));
}

#[when("the default page is requested")]
fn the_default_page_is_requested(world: &PagingWorld) {
    world.request(PageRequest::default());
}

#[when("{minutes:u64} minutes pass")]
fn minutes_pass(world: &PagingWorld, minutes: u64) {
    let clock = world.clock.get().expect("clock");
    clock.advance(Duration::from_secs(minutes * 60));
}

#[then("the page holds {count:usize} users")]
fn the_page_holds(world: &PagingWorld, count: usize) {
    assert_eq!(world.page().users.len(), count);
}

#[then("the page reports a total of {total:usize}")]
fn the_page_reports_a_total(world: &PagingWorld, total: usize) {
    assert_eq!(world.page().total, total);
}

#[then("the page lists users {first:usize} to {last:usize}")]
fn the_page_lists_users(world: &PagingWorld, first: usize, last: usize) {
    let ids: Vec<String> = world.page().users.into_iter().map(|user| user.id).collect();
    let expected: Vec<String> = (first..=last).map(|id| id.to_string()).collect();
    assert_eq!(ids, expected);
}

#[then("the directory was asked {count:usize} times")]
fn the_directory_was_asked(world: &PagingWorld, count: usize) {
    let fetches = world.fetches.get().expect("fetch counter");
    assert_eq!(fetches.load(Ordering::SeqCst), count);
}

#[then("the request fails with \"{message}\"")]
fn the_request_fails_with(world: &PagingWorld, message: String) {
    let outcome = world.outcome.get().expect("a page should have been requested");
    let error = outcome.expect_err("the directory should fail");
    assert_eq!(error.to_string(), message);
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "The last page holds the remainder"
)]
fn the_last_page_holds_the_remainder(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "A page past the end is empty"
)]
fn a_page_past_the_end_is_empty(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "An empty directory yields an empty first page"
)]
fn an_empty_directory_yields_an_empty_first_page(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "A middle page lists the expected users"
)]
fn a_middle_page_lists_the_expected_users(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "Repeat requests inside the window are served from cache"
)]
fn repeat_requests_inside_the_window_are_served_from_cache(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "Requests after the window refetch"
)]
fn requests_after_the_window_refetch(world: PagingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users_paging.feature",
    name = "A failing directory reports a fixed message"
)]
fn a_failing_directory_reports_a_fixed_message(world: PagingWorld) {
    let _ = world;
}
