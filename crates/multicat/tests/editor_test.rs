#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Editing workflow integration tests.
//!
//! Exercises selection loading precedence, option building, and the
//! soft-fail save path against the in-memory store.

use std::sync::Arc;

use multicat::editor::{EditorService, MemoryPendingEditCache, PendingEditCache};
use multicat::store::CategoryStore;
use multicat_test_utils::{
    CategoryTreeBuilder, FailingCategoryStore, MemoryCategoryStore, sample_tree,
};

struct Workbench {
    store: Arc<MemoryCategoryStore>,
    pending: Arc<MemoryPendingEditCache>,
    editor: EditorService,
}

fn workbench(store: MemoryCategoryStore) -> Workbench {
    let store = Arc::new(store);
    let pending = Arc::new(MemoryPendingEditCache::new());
    let editor = EditorService::new(store.clone(), pending.clone());
    Workbench {
        store,
        pending,
        editor,
    }
}

fn failing_editor() -> EditorService {
    EditorService::new(
        Arc::new(FailingCategoryStore),
        Arc::new(MemoryPendingEditCache::new()),
    )
}

// -------------------------------------------------------------------------
// Selection loading
// -------------------------------------------------------------------------

#[tokio::test]
async fn submitted_selections_win_over_stored_ones() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.store.seed_associations(7, vec![2]);

    let loaded = bench
        .editor
        .load_selections(Some(7), Some(&[5, 3, 3, -2]), "form:7")
        .await;

    assert_eq!(loaded, vec![3, 5]);
}

#[tokio::test]
async fn empty_resubmission_is_respected() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.store.seed_associations(7, vec![2]);

    let loaded = bench.editor.load_selections(Some(7), Some(&[]), "form:7").await;

    assert_eq!(loaded, Vec::<i64>::new());
}

#[tokio::test]
async fn stored_selections_load_for_existing_items() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.store.seed_associations(7, vec![9, 4]);

    let loaded = bench.editor.load_selections(Some(7), None, "form:7").await;

    assert_eq!(loaded, vec![4, 9]);
}

#[tokio::test]
async fn pending_cache_backs_new_items() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.pending.put("form:new", vec![5, -1, 5]).await;

    let loaded = bench.editor.load_selections(None, None, "form:new").await;

    assert_eq!(loaded, vec![5]);
}

#[tokio::test]
async fn store_failure_loads_empty_without_cache_fallback() {
    let pending = Arc::new(MemoryPendingEditCache::new());
    pending.put("form:7", vec![5]).await;
    let editor = EditorService::new(Arc::new(FailingCategoryStore), pending);

    let loaded = editor.load_selections(Some(7), None, "form:7").await;

    assert_eq!(loaded, Vec::<i64>::new());
}

// -------------------------------------------------------------------------
// Option building
// -------------------------------------------------------------------------

#[tokio::test]
async fn options_follow_tree_order_with_indentation() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));

    let options = bench.editor.category_options().await;
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

    assert_eq!(labels, vec!["Root", "— A", "— — B", "— C"]);
}

#[tokio::test]
async fn options_mark_everything_not_published() {
    let tree = CategoryTreeBuilder::new()
        .with(1, "Live", 1, 1, 8)
        .with(2, "Hidden", 2, 2, 3)
        .unpublished()
        .with(3, "Retired", 2, 4, 5)
        .archived()
        .with(4, "Gone", 2, 6, 7)
        .trashed()
        .build();
    let bench = workbench(MemoryCategoryStore::new(tree));

    let options = bench.editor.category_options().await;

    assert_eq!(options.len(), 3, "trashed categories are not offered");
    assert!(!options[0].unpublished);
    assert!(options[1].unpublished);
    assert!(options[2].unpublished);
}

#[tokio::test]
async fn options_soft_fail_to_empty() {
    let options = failing_editor().category_options().await;
    assert!(options.is_empty());
}

// -------------------------------------------------------------------------
// Saving
// -------------------------------------------------------------------------

#[tokio::test]
async fn save_sanitizes_and_excludes_the_primary_category() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));

    bench.editor.save(1, 7, &[7, 9, 9, 0, -3]).await;

    assert_eq!(bench.store.item_categories(1).await.unwrap(), vec![9]);
}

#[tokio::test]
async fn save_with_no_selections_clears_all_rows() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.store.seed_associations(1, vec![2, 4]);

    bench.editor.save(1, 7, &[]).await;

    assert_eq!(
        bench.store.item_categories(1).await.unwrap(),
        Vec::<i64>::new()
    );
}

#[tokio::test]
async fn save_replaces_the_previous_set_wholesale() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));
    bench.store.seed_associations(1, vec![2, 4]);

    bench.editor.save(1, 7, &[3]).await;

    assert_eq!(bench.store.item_categories(1).await.unwrap(), vec![3]);
}

#[tokio::test]
async fn save_ignores_items_without_identity() {
    let bench = workbench(MemoryCategoryStore::new(sample_tree()));

    bench.editor.save(0, 7, &[9]).await;
    bench.editor.save(-4, 7, &[9]).await;

    assert_eq!(bench.store.items_with_associations(), 0);
}

#[tokio::test]
async fn save_failure_is_swallowed() {
    // The host's primary save has already committed; a dead store must
    // not surface as an error here.
    failing_editor().save(1, 7, &[9]).await;
}
