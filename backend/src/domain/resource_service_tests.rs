//! Tests for the resource service and its unit-of-work use cases.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::MockResourceRepository;
use crate::domain::ErrorCode;
use crate::test_support::{InMemoryResourceStore, MutableClock, fixture_timestamp};

fn stored(id: i64, email: &str) -> Resource {
    Resource {
        id: ResourceId::new(id),
        name: "Stored".to_owned(),
        email: email.to_owned(),
        age: 40,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

fn use_cases(store: &InMemoryResourceStore) -> ResourceUseCases<InMemoryResourceStore> {
    ResourceUseCases::new(Arc::new(store.clone()))
}

#[rstest]
#[case("", "a@b.co", 1, "name", "cannot be empty")]
#[case("   ", "a@b.co", 1, "name", "cannot be empty")]
#[case("Ann", "ann.example.com", 1, "email", "must be valid email address")]
#[case("Ann", "ann@b.co", -1, "age", "must be between 0 and 150")]
#[case("Ann", "ann@b.co", 151, "age", "must be between 0 and 150")]
#[tokio::test]
async fn create_rejects_invalid_input_without_touching_storage(
    #[case] name: &str,
    #[case] email: &str,
    #[case] age: i32,
    #[case] field: &str,
    #[case] issue: &str,
) {
    let mut repo = MockResourceRepository::new();
    repo.expect_find_by_email().times(0);
    repo.expect_create().times(0);

    let error = ResourceService::new(&mut repo)
        .create(CreateResourceRequest::new(name, email, age))
        .await
        .expect_err("validation failure");

    assert_eq!(error, ResourceError::validation(field, issue));
}

#[tokio::test]
async fn create_reports_first_failing_field_only() {
    let mut repo = MockResourceRepository::new();
    repo.expect_create().times(0);

    let error = ResourceService::new(&mut repo)
        .create(CreateResourceRequest::new("", "bad", 999))
        .await
        .expect_err("validation failure");

    assert_eq!(error, ResourceError::validation("name", "cannot be empty"));
}

#[tokio::test]
async fn create_passes_valid_request_through_unchanged() {
    let mut repo = MockResourceRepository::new();
    repo.expect_find_by_email().times(0);
    repo.expect_create()
        .withf(|request: &CreateResourceRequest| {
            *request == CreateResourceRequest::new("Ann", "ann@b.co", 0)
        })
        .times(1)
        .return_once(|_| Ok(stored(1, "ann@b.co")));

    let created = ResourceService::new(&mut repo)
        .create(CreateResourceRequest::new("Ann", "ann@b.co", 0))
        .await
        .expect("create succeeds");

    assert_eq!(created.id, ResourceId::new(1));
}

#[tokio::test]
async fn create_propagates_constraint_violation_from_storage() {
    let mut repo = MockResourceRepository::new();
    repo.expect_create()
        .times(1)
        .return_once(|_| Err(ResourceError::duplicate_key("race@b.co")));

    let error = ResourceService::new(&mut repo)
        .create(CreateResourceRequest::new("Race", "race@b.co", 30))
        .await
        .expect_err("duplicate");

    assert_eq!(error, ResourceError::duplicate_key("race@b.co"));
}

#[rstest]
#[case(ResourceError::not_found(ResourceId::new(9)))]
#[case(ResourceError::storage("connection reset"))]
#[tokio::test]
async fn reads_return_repository_errors_verbatim(#[case] failure: ResourceError) {
    let mut repo = MockResourceRepository::new();
    let expected = failure.clone();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = ResourceService::new(&mut repo)
        .find_by_id(ResourceId::new(9))
        .await
        .expect_err("repository failure");

    assert_eq!(error, expected);
}

#[rstest]
#[case(ResourceError::not_found(ResourceId::new(3)))]
#[case(ResourceError::duplicate_key("taken@b.co"))]
#[case(ResourceError::storage("connection reset"))]
#[tokio::test]
async fn update_returns_repository_errors_verbatim(#[case] failure: ResourceError) {
    let mut repo = MockResourceRepository::new();
    let expected = failure.clone();
    repo.expect_find_by_email().times(0);
    repo.expect_update()
        .withf(|id: &ResourceId, request: &UpdateResourceRequest| {
            *id == ResourceId::new(3) && request.email == "taken@b.co"
        })
        .times(1)
        .return_once(move |_, _| Err(failure));

    let error = ResourceService::new(&mut repo)
        .update(
            ResourceId::new(3),
            UpdateResourceRequest::new("Bob", "taken@b.co", 41),
        )
        .await
        .expect_err("repository failure");

    assert_eq!(error, expected);
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let mut repo = MockResourceRepository::new();
    repo.expect_find_by_email().times(0);
    repo.expect_update().times(0);

    let error = ResourceService::new(&mut repo)
        .update(ResourceId::new(1), UpdateResourceRequest::new("Bob", "x@y.z", 200))
        .await
        .expect_err("validation failure");

    assert_eq!(error.code(), ErrorCode::ValidationError);
}

#[tokio::test]
async fn created_resource_reads_back_identically() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);

    let created = ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create succeeds");
    let fetched = cases.get(created.id).await.expect("get succeeds");

    assert_eq!(created, fetched);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(cases.list().await.expect("list succeeds"), vec![created]);
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);
    let created = ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create succeeds");

    ResourcesCommand::delete(&cases, created.id)
        .await
        .expect("first delete succeeds");
    let error = ResourcesCommand::delete(&cases, created.id)
        .await
        .expect_err("second delete fails");

    assert_eq!(error, ResourceError::not_found(created.id));
    assert_eq!(
        cases.get(created.id).await.expect_err("gone"),
        ResourceError::not_found(created.id)
    );
}

#[tokio::test]
async fn duplicate_create_keeps_a_single_record() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);
    let request = CreateResourceRequest::new("Alice", "alice@example.com", 30);

    ResourcesCommand::create(&cases, request.clone())
        .await
        .expect("first create succeeds");
    let error = ResourcesCommand::create(&cases, request)
        .await
        .expect_err("second create fails");

    assert_eq!(error.code(), ErrorCode::DuplicateEmail);
    assert_eq!(store.count_with_email("alice@example.com"), 1);
}

#[tokio::test]
async fn failed_update_leaves_record_unchanged() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);
    let alice = ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create alice");
    ResourcesCommand::create(&cases, CreateResourceRequest::new("Bob", "bob@example.com", 31))
        .await
        .expect("create bob");

    let invalid = ResourcesCommand::update(
        &cases,
        alice.id,
        UpdateResourceRequest::new("", "alice@example.com", 30),
    )
    .await;
    let clash = ResourcesCommand::update(
        &cases,
        alice.id,
        UpdateResourceRequest::new("Alice", "bob@example.com", 30),
    )
    .await;

    assert!(invalid.is_err());
    assert_eq!(clash.expect_err("clash"), ResourceError::duplicate_key("bob@example.com"));
    assert_eq!(cases.get(alice.id).await.expect("still there"), alice);
}

#[tokio::test]
async fn update_of_missing_resource_is_not_found() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);

    let error = ResourcesCommand::update(
        &cases,
        ResourceId::new(42),
        UpdateResourceRequest::new("Ghost", "ghost@example.com", 5),
    )
    .await
    .expect_err("missing");

    assert_eq!(error, ResourceError::not_found(ResourceId::new(42)));
}

#[tokio::test]
async fn update_of_missing_resource_wins_over_taken_email() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);
    ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create alice");

    let error = ResourcesCommand::update(
        &cases,
        ResourceId::new(999),
        UpdateResourceRequest::new("X", "alice@example.com", 1),
    )
    .await
    .expect_err("missing");

    assert_eq!(error, ResourceError::not_found(ResourceId::new(999)));
    assert_eq!(store.count_with_email("alice@example.com"), 1);
}

#[tokio::test]
async fn update_may_keep_its_own_email() {
    let store = InMemoryResourceStore::new();
    let cases = use_cases(&store);
    let alice = ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create alice");

    let updated = ResourcesCommand::update(
        &cases,
        alice.id,
        UpdateResourceRequest::new("Alice Renamed", "alice@example.com", 31),
    )
    .await
    .expect("update succeeds");

    assert_eq!(updated.id, alice.id);
    assert_eq!(updated.name, "Alice Renamed");
}

#[tokio::test]
async fn update_keeps_created_at_and_advances_updated_at() {
    let clock = MutableClock::default();
    let store = InMemoryResourceStore::with_clock(Arc::new(clock.clone()));
    let cases = use_cases(&store);
    let created = ResourcesCommand::create(
        &cases,
        CreateResourceRequest::new("Alice", "alice@example.com", 30),
    )
    .await
    .expect("create succeeds");

    clock.advance_seconds(90);
    let updated = ResourcesCommand::update(
        &cases,
        created.id,
        UpdateResourceRequest::new("Alice B", "alice@example.com", 31),
    )
    .await
    .expect("update succeeds");

    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.name, "Alice B");
    assert_eq!(updated.age, 31);
}

#[tokio::test]
async fn storage_faults_surface_as_storage_errors() {
    let store = InMemoryResourceStore::new();
    store.inject_storage_fault("relation \"resources\" does not exist");
    let cases = use_cases(&store);

    let error = cases.list().await.expect_err("storage failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
