//! End-to-end pipeline tests against mock collaborators.

use std::collections::BTreeSet;

use uuid::Uuid;

use ingestion::testing::{MockFetcher, MockModel};
use ingestion::{IngestError, LinkStore, MemoryStore, Pipeline, Tag};

fn pipeline(
    fetcher: MockFetcher,
    model: MockModel,
) -> Pipeline<MockFetcher, MockModel, MemoryStore> {
    Pipeline::new(fetcher, model, MemoryStore::new())
}

#[tokio::test]
async fn ingest_stores_extracted_and_enriched_record() {
    let fetcher = MockFetcher::new().with_page(
        "https://example.com/a",
        r#"<title>Hello</title><meta name="description" content="World">"#,
    );
    let model = MockModel::new()
        .with_response("News, Blog")
        .with_response("A page that says hello to the world.");
    let owner = Uuid::new_v4();

    let pipeline = pipeline(fetcher, model);
    let stored = pipeline.ingest("https://example.com/a", owner).await.unwrap();

    assert_eq!(stored.title, "Hello");
    assert_eq!(stored.description, "World");
    assert_eq!(stored.image_url, "");
    assert_eq!(stored.domain, "example.com");
    assert_eq!(stored.tags, BTreeSet::from([Tag::News, Tag::Blog]));
    assert_eq!(stored.summary, "A page that says hello to the world.");
    assert_eq!(stored.owner_id, owner);
    assert_eq!(stored.url, "https://example.com/a");

    let listed = pipeline.store().list_by_owner(owner).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
}

#[tokio::test]
async fn unknown_tags_never_reach_storage() {
    let fetcher =
        MockFetcher::new().with_page("https://example.com/a", "<title>Hello</title>");
    let model = MockModel::new()
        .with_response("Image, Foo, Video")
        .with_response("Summary.");
    let owner = Uuid::new_v4();

    let pipeline = pipeline(fetcher, model);
    let stored = pipeline.ingest("https://example.com/a", owner).await.unwrap();

    assert_eq!(stored.tags, BTreeSet::from([Tag::Image, Tag::Video]));
    for tag in &stored.tags {
        assert!(ingestion::ALL_TAGS.contains(tag));
    }
}

#[tokio::test]
async fn model_failure_on_both_calls_still_succeeds() {
    let fetcher =
        MockFetcher::new().with_page("https://example.com/a", "<title>Hello</title>");
    let model = MockModel::new().with_failure("down").with_failure("down");
    let owner = Uuid::new_v4();

    let pipeline = pipeline(fetcher, model);
    let stored = pipeline.ingest("https://example.com/a", owner).await.unwrap();

    assert!(stored.tags.is_empty());
    assert_eq!(stored.summary, "");
    // Degraded success is silent: the record is otherwise complete.
    assert_eq!(stored.title, "Hello");
    assert_eq!(pipeline.store().link_count(), 1);
}

#[tokio::test]
async fn tag_failure_leaves_summary_intact_and_vice_versa() {
    let owner = Uuid::new_v4();

    let fetcher =
        MockFetcher::new().with_page("https://example.com/a", "<title>Hello</title>");
    let model = MockModel::new()
        .with_failure("quota")
        .with_response("Summary survived.");
    let stored = pipeline(fetcher, model)
        .ingest("https://example.com/a", owner)
        .await
        .unwrap();
    assert!(stored.tags.is_empty());
    assert_eq!(stored.summary, "Summary survived.");

    let fetcher =
        MockFetcher::new().with_page("https://example.com/a", "<title>Hello</title>");
    let model = MockModel::new()
        .with_response("Music")
        .with_failure("quota");
    let stored = pipeline(fetcher, model)
        .ingest("https://example.com/a", owner)
        .await
        .unwrap();
    assert_eq!(stored.tags, BTreeSet::from([Tag::Music]));
    assert_eq!(stored.summary, "");
}

#[tokio::test]
async fn fetch_failure_aborts_and_stores_nothing() {
    let fetcher = MockFetcher::new().with_failure("https://unreachable.example.com/");
    let model = MockModel::new()
        .with_response("News")
        .with_response("Never used.");

    let pipeline = pipeline(fetcher, model.clone());
    let result = pipeline
        .ingest("https://unreachable.example.com/", Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(IngestError::Fetch(_))));
    assert_eq!(pipeline.store().link_count(), 0);
    // Enrichment never ran.
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn non_success_status_aborts() {
    // No canned page registered: the mock answers 404.
    let fetcher = MockFetcher::new();
    let model = MockModel::new();

    let pipeline = pipeline(fetcher, model);
    let result = pipeline
        .ingest("https://example.com/missing", Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(IngestError::Fetch(_))));
    assert_eq!(pipeline.store().link_count(), 0);
}

#[tokio::test]
async fn invalid_url_fails_before_any_fetch() {
    let fetcher = MockFetcher::new();
    let model = MockModel::new();

    let pipeline = pipeline(fetcher.clone(), model);
    let result = pipeline.ingest("not a url", Uuid::new_v4()).await;

    assert!(matches!(result, Err(IngestError::Fetch(_))));
    assert_eq!(fetcher.call_count(), 0);
    assert_eq!(pipeline.store().link_count(), 0);
}

#[tokio::test]
async fn domain_resists_document_spoofing() {
    let fetcher = MockFetcher::new().with_page(
        "https://example.com/page",
        r#"<title>Spoof</title><meta property="og:url" content="https://evil.example.net/">"#,
    );
    let model = MockModel::new().with_response("").with_response("");

    let stored = pipeline(fetcher, model)
        .ingest("https://example.com/page", Uuid::new_v4())
        .await
        .unwrap();

    assert_eq!(stored.domain, "example.com");
}

#[tokio::test]
async fn concurrent_submissions_of_same_url_produce_two_records() {
    let fetcher =
        MockFetcher::new().with_page("https://example.com/a", "<title>Hello</title>");
    let model = MockModel::new()
        .with_response("News")
        .with_response("One.")
        .with_response("News")
        .with_response("Two.");
    let owner = Uuid::new_v4();

    let pipeline = pipeline(fetcher, model);
    let (first, second) = tokio::join!(
        pipeline.ingest("https://example.com/a", owner),
        pipeline.ingest("https://example.com/a", owner),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(pipeline.store().link_count(), 2);
}
