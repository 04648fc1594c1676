mod common;

use common::{app_with, logged_in, titles, ScriptedStore};
use memo_core::{CategoryId, FallbackPolicy, MemoDraft, MemoId};

#[tokio::test]
async fn opening_category_loads_its_memos() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;

    app.navigation().toggle_category(CategoryId(1)).await;

    let snapshot = projector.last();
    assert_eq!(snapshot.selected_category_id, Some(CategoryId(1)));
    assert_eq!(snapshot.selected_category_name.as_deref(), Some("Personal"));
    assert!(snapshot.memo_list_open());
    assert_eq!(titles(&snapshot), vec!["Groceries", "Books"]);
    assert!(!snapshot.detail_open);
    assert!(snapshot.new_memo_enabled);
    assert!(!snapshot.delete_memo_enabled);
    assert!(!snapshot.degraded);
}

#[tokio::test]
async fn failed_restaurant_fetch_shows_fixture_memos() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    store.fail_all(true);

    app.navigation().toggle_category(CategoryId(2)).await;

    let snapshot = projector.last();
    assert_eq!(titles(&snapshot), vec!["Blue Plate", "Daily Grill"]);
    assert_eq!(snapshot.memos[0].id, MemoId(10));
    assert_eq!(snapshot.memos[0].content, "Blue Plate is a restaurant.");
    assert_eq!(snapshot.memos[1].id, MemoId(11));
    assert_eq!(snapshot.memos[1].content, "Daily Grill is a restaurant.");
    assert!(snapshot.degraded);
}

#[tokio::test]
async fn failed_fetch_for_other_category_shows_empty_list() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    store.fail_on("list_memos:1");

    app.navigation().toggle_category(CategoryId(1)).await;

    let snapshot = projector.last();
    assert_eq!(snapshot.selected_category_id, Some(CategoryId(1)));
    assert!(snapshot.memos.is_empty());
}

#[tokio::test]
async fn strict_policy_never_shows_fixture_memos() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Strict).await;
    store.fail_all(true);

    app.navigation().toggle_category(CategoryId(2)).await;

    let snapshot = projector.last();
    assert!(snapshot.memos.is_empty());
    assert!(!snapshot.degraded);
    assert!(snapshot.last_failure.is_some());
}

#[tokio::test]
async fn toggling_open_category_collapses_everything() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    app.navigation().toggle_category(CategoryId(1)).await;
    assert!(app.navigation().select_memo(MemoId(1)).await);
    store.fail_all(true);

    app.navigation().toggle_category(CategoryId(1)).await;

    let snapshot = projector.last();
    assert_eq!(snapshot.selected_category_id, None);
    assert_eq!(snapshot.selected_memo_id, None);
    assert!(snapshot.memos.is_empty());
    assert!(!snapshot.detail_open);
    assert!(!snapshot.new_memo_enabled);
    assert!(!snapshot.delete_memo_enabled);
    assert_eq!(snapshot.memo_edit_buffer, MemoDraft::default());
    assert_eq!(
        store.calls().iter().filter(|call| *call == "list_memos:1").count(),
        1
    );
}

#[tokio::test]
async fn switching_category_closes_detail_and_clears_memo_selection() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store, FallbackPolicy::Demo).await;
    app.navigation().toggle_category(CategoryId(1)).await;
    app.navigation().select_memo(MemoId(2)).await;
    assert!(projector.last().detail_open);

    app.navigation().toggle_category(CategoryId(2)).await;

    let snapshot = projector.last();
    assert_eq!(snapshot.selected_category_id, Some(CategoryId(2)));
    assert_eq!(snapshot.selected_memo_id, None);
    assert!(!snapshot.detail_open);
    assert_eq!(titles(&snapshot), vec!["Noodle Bar"]);
}

#[tokio::test]
async fn toggle_sequences_never_leave_detail_open() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;

    for (step, id) in [1, 2, 2, 3, 1, 1, 2].into_iter().enumerate() {
        if step == 3 {
            store.fail_all(true);
        }
        app.navigation().toggle_category(CategoryId(id)).await;
        assert!(!projector.last().detail_open, "detail open after step {step}");
    }
}

#[tokio::test]
async fn selecting_memo_fills_edit_buffer_and_opens_detail() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store, FallbackPolicy::Demo).await;
    app.navigation().toggle_category(CategoryId(1)).await;

    assert!(app.navigation().select_memo(MemoId(1)).await);

    let snapshot = projector.last();
    assert_eq!(snapshot.selected_memo_id, Some(MemoId(1)));
    assert!(snapshot.detail_open);
    assert!(snapshot.delete_memo_enabled);
    assert_eq!(
        snapshot.memo_edit_buffer,
        MemoDraft::new("Groceries", "milk, eggs")
    );
}

#[tokio::test]
async fn failed_detail_fetch_uses_fixture_table() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    store.fail_all(true);
    app.navigation().toggle_category(CategoryId(2)).await;

    assert!(app.navigation().select_memo(MemoId(11)).await);
    let snapshot = projector.last();
    assert!(snapshot.detail_open);
    assert_eq!(
        snapshot.memo_edit_buffer,
        MemoDraft::new("Daily Grill", "13 Newcastle Ave. Woodbridge, VA 22191")
    );

    assert!(app.navigation().select_memo(MemoId(10)).await);
    assert_eq!(
        projector.last().memo_edit_buffer,
        MemoDraft::new("Blue Plate", "Blue Plate is a restaurant.")
    );
}

#[tokio::test]
async fn failed_detail_fetch_for_unknown_memo_shows_blank_template() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    app.navigation().toggle_category(CategoryId(1)).await;
    store.fail_on("get_memo:2");

    assert!(app.navigation().select_memo(MemoId(2)).await);

    let snapshot = projector.last();
    assert!(snapshot.detail_open);
    assert_eq!(snapshot.memo_edit_buffer, MemoDraft::blank());
}

#[tokio::test]
async fn strict_detail_failure_uses_loaded_record() {
    let store = ScriptedStore::seeded();
    let (app, projector) = logged_in(store.clone(), FallbackPolicy::Strict).await;
    app.navigation().toggle_category(CategoryId(1)).await;
    store.fail_all(true);

    assert!(app.navigation().select_memo(MemoId(2)).await);

    let snapshot = projector.last();
    assert!(snapshot.detail_open);
    assert_eq!(snapshot.memo_edit_buffer, MemoDraft::new("Books", "to read"));
}

#[tokio::test]
async fn selecting_memo_outside_loaded_list_is_ignored() {
    let store = ScriptedStore::seeded();
    let (app, _projector) = logged_in(store.clone(), FallbackPolicy::Demo).await;
    app.navigation().toggle_category(CategoryId(1)).await;

    assert!(!app.navigation().select_memo(MemoId(3)).await);

    let snapshot = app.snapshot();
    assert_eq!(snapshot.selected_memo_id, None);
    assert!(!snapshot.detail_open);
    assert!(!store.calls().contains(&"get_memo:3".to_string()));
}

#[tokio::test]
async fn navigation_requires_active_session_and_known_category() {
    let store = ScriptedStore::seeded();
    let (app, projector) = app_with(store.clone(), FallbackPolicy::Demo);

    app.navigation().toggle_category(CategoryId(1)).await;
    assert!(store.calls().is_empty());
    assert!(projector.snapshots().is_empty());

    app.session().login(common::VALID_TOKEN).await;
    app.navigation().toggle_category(CategoryId(42)).await;
    assert_eq!(app.snapshot().selected_category_id, None);
    assert_eq!(store.calls(), vec!["list_categories"]);
}
