//! Seeding behaviour of the in-memory record store through the public port.

use article_gate::domain::FixtureContent;
use article_gate::domain::ports::{
    ArticleRepository, FixtureSeedRepository, SeedingResult, UserRepository,
};
use article_gate::domain::Username;
use article_gate::outbound::memory::InMemoryRecordStore;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn empty_store_is_seeded_once() {
    let store = InMemoryRecordStore::new();
    let content = FixtureContent::demo().expect("demo content");

    let first = store.seed(&content).await.expect("first seed");
    let second = store.seed(&content).await.expect("second seed");

    assert_eq!(first, SeedingResult::Applied);
    assert_eq!(second, SeedingResult::AlreadySeeded);
    assert_eq!(store.user_count(), 2);
}

#[rstest]
#[tokio::test]
async fn seeded_content_matches_the_demo_set() {
    let store = InMemoryRecordStore::new();
    store
        .seed(&FixtureContent::demo().expect("demo content"))
        .await
        .expect("seed");

    let alice = store
        .find_by_username(&Username::new("alice").expect("valid username"))
        .await
        .expect("lookup")
        .expect("alice exists");
    let public = store.find_by_membership(false).await.expect("query");
    let members = store.find_by_membership(true).await.expect("query");

    assert_eq!(alice.id().get(), 1);
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].content(), "Everyone can read this.");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id().get(), 2);
}
