//! End-to-end regressions over the checked-in sample catalogue:
//! load data/tasks.csv, then rank it the way the storefront would.

use std::path::PathBuf;

use taskmart_core::{Impact, Status, Tag, rank};
use taskmart_ingest::{CatalogueCache, CatalogueSource, parse_catalogue};

fn catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("data/tasks.csv")
}

fn load_fixture() -> Vec<taskmart_core::Task> {
    let text = std::fs::read_to_string(catalogue_path()).expect("sample catalogue present");
    parse_catalogue(&text)
}

#[test]
fn test_fixture_round_trip() {
    let tasks = load_fixture();
    assert_eq!(tasks.len(), 30);

    let first = &tasks[0];
    assert_eq!(first.id, "task-1");
    assert_eq!(first.title, "Order protein bar");
    assert_eq!(first.duration_minutes, 30);
    assert_eq!(first.impact, Impact::Low);
    assert_eq!(first.image, "/image_001_A_premium__unwrapped.png");

    let certificate = tasks
        .iter()
        .find(|t| t.title == "Apply marriage certificate")
        .unwrap();
    assert_eq!(certificate.duration_minutes, 120);
    assert_eq!(certificate.impact, Impact::High);
    assert_eq!(certificate.categories, vec![Tag::GettingMarried]);
    assert_eq!(certificate.statuses, vec![Status::Couple]);
}

#[test]
fn test_ids_unique_and_contiguous() {
    let tasks = load_fixture();
    for (i, task) in tasks.iter().enumerate() {
        assert_eq!(task.id, format!("task-{}", i + 1));
    }
}

#[test]
fn test_no_selection_returns_top_15_by_impact() {
    let tasks = load_fixture();
    let out = rank(&tasks, None, &[]);

    assert_eq!(out.len(), 15);
    // The fixture has exactly 10 High-impact tasks; they all lead.
    assert!(out[..10].iter().all(|r| r.task.impact == Impact::High));
    assert!(out[10..].iter().all(|r| r.task.impact == Impact::Medium));
}

#[test]
fn test_parents_status_prefers_pregnancy_tasks() {
    let tasks = load_fixture();
    let out = rank(&tasks, Some(Status::Parents), &[]);

    let expected = tasks.iter().filter(|t| t.has_status(Status::Parents)).count();
    assert_eq!(out.len(), expected);
    assert!(out.len() > 15, "status-only results are uncapped");

    // Pregnancy and Baby ranks 1 for Parents; equal scores break on
    // impact then title.
    assert_eq!(out[0].task.title, "Order prenatal meds");
    assert_eq!(out[0].priority_score, Some(1));
    assert_eq!(out[1].task.title, "Plan baby shower");
}

#[test]
fn test_couple_with_wedding_tag_promotes_certificate() {
    let tasks = load_fixture();
    let out = rank(&tasks, Some(Status::Couple), &[Tag::GettingMarried]);

    let titles: Vec<&str> = out.iter().map(|r| r.task.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Apply marriage certificate",
            "Book wedding vendors",
            "Plan wedding venue",
            "Manage wedding invites",
            "Plan honeymoon travel",
            "Send wedding gifts",
        ]
    );
    assert!(out[0].is_popular);
    assert!(out[1..].iter().all(|r| !r.is_popular));
}

#[tokio::test]
async fn test_cached_load_from_disk() {
    let cache = CatalogueCache::new();
    let source = CatalogueSource::Path(catalogue_path());

    let catalogue = cache.get_or_load(&source).await;
    assert_eq!(catalogue.len(), 30);

    // Second call is served from the cache: same snapshot, same stamp.
    let again = cache.get_or_load(&source).await;
    assert_eq!(again.loaded_at, catalogue.loaded_at);
}
