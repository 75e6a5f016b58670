//! # Catalog Actions Hook
//!
//! Every user action that talks to the backend goes through here: the
//! initial load, record submission, row deletion and the filter panel's
//! apply and reset buttons.
//!
//! An action runs in three steps:
//! 1. [`CatalogAction::prepare`] updates local state and captures the book
//!    filter the refetch will use
//! 2. [`CatalogAction::run`] performs the request and the refetch
//! 3. the resulting report is folded into [`APP_STATE`]
//!
//! Actions are not serialized against each other; whichever finishes last
//! overwrites the collections it refreshed.
//!
//! The request task belongs to the root scope. Popups dispatch and close in
//! the same handler, and a task owned by the popup would be dropped with it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let actions = use_catalog_actions();
//! actions.dispatch(CatalogAction::Delete { collection, id, label });
//! ```

use bookshelf_core::{Collection, CollectionSet, RecordId};
use bookshelf_gateway::{CatalogGateway, CatalogSync, SyncReport};
use bookshelf_model::{BookFilter, RecordPayload};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::state::{APP_STATE, AppState, StatusLevel, catalog_sync};

// ============================================================================
// Actions
// ============================================================================

/// A backend round trip started by the user
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Fetch every collection
    LoadAll,
    /// Create or update a record
    Submit(RecordPayload),
    /// Delete one row
    Delete {
        collection: Collection,
        id: RecordId,
        label: String,
    },
    /// Refetch books with new criteria and show the summary
    ApplyFilter(BookFilter),
    /// Refetch books without criteria and hide the summary
    ResetFilter,
}

impl CatalogAction {
    /// Update local state before the request goes out
    ///
    /// Returns the book filter to refetch with.
    pub fn prepare(&self, state: &mut AppState) -> Option<BookFilter> {
        match self {
            CatalogAction::ApplyFilter(filter) => state.catalog.apply_filter(filter.clone()),
            CatalogAction::ResetFilter => state.catalog.reset_filter(),
            _ => {}
        }
        state.begin_request();
        state.catalog.active_filter.clone()
    }

    /// Perform the request and the refetch it triggers
    pub async fn run<G: CatalogGateway>(
        self,
        sync: &CatalogSync<G>,
        filter: Option<BookFilter>,
    ) -> SyncReport {
        let filter = filter.as_ref();
        match self {
            CatalogAction::LoadAll => sync.load_all(filter).await,
            CatalogAction::Submit(payload) => sync.submit(payload, filter).await,
            CatalogAction::Delete {
                collection,
                id,
                label,
            } => sync.delete(collection, id, label, filter).await,
            CatalogAction::ApplyFilter(_) | CatalogAction::ResetFilter => {
                sync.refresh(CollectionSet::of(&[Collection::Books]), filter)
                    .await
            }
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Handle for starting catalog actions from components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogActions;

impl CatalogActions {
    /// Start an action in the background
    ///
    /// The task outlives the calling component.
    pub fn dispatch(&self, action: CatalogAction) {
        let Some(sync) = catalog_sync() else {
            tracing::error!("Catalog gateway is not initialized");
            APP_STATE
                .write()
                .ui
                .set_status("Catalog server is not configured", StatusLevel::Error);
            return;
        };

        let filter = action.prepare(&mut APP_STATE.write());

        spawn_forever(async move {
            let report = action.run(sync, filter).await;
            APP_STATE.write().apply_report(report);
        });
    }

    /// Submit a create or update
    pub fn submit(&self, payload: RecordPayload) {
        self.dispatch(CatalogAction::Submit(payload));
    }

    /// Delete a row
    pub fn delete(&self, collection: Collection, id: RecordId, label: String) {
        self.dispatch(CatalogAction::Delete {
            collection,
            id,
            label,
        });
    }
}

/// Hook returning the catalog action handle
pub fn use_catalog_actions() -> CatalogActions {
    CatalogActions
}

/// Load every collection once, when the calling component mounts
pub fn use_initial_load() {
    use_hook(|| {
        tracing::info!("Loading catalog");
        CatalogActions.dispatch(CatalogAction::LoadAll);
    });
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bookshelf_gateway::ClientError;
    use bookshelf_model::payload::NewAuthor;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingGateway {
        fn log(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl CatalogGateway for RecordingGateway {
        async fn fetch_rows(
            &self,
            collection: Collection,
            query: &[(String, String)],
        ) -> Result<Value, ClientError> {
            let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
            self.log(format!("GET {collection} [{}]", keys.join(",")));
            Ok(match collection {
                Collection::Books => json!([[1, "Dune", "Frank Herbert", "Sci-Fi", "", 4.0, 2]]),
                _ => json!([]),
            })
        }

        async fn create_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
            self.log(format!("POST {}", payload.collection()));
            Ok(())
        }

        async fn update_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
            self.log(format!("PUT {}", payload.collection()));
            Ok(())
        }

        async fn delete_record(
            &self,
            collection: Collection,
            id: RecordId,
        ) -> Result<(), ClientError> {
            self.log(format!("DELETE {collection}/{id}"));
            Ok(())
        }
    }

    fn herbert() -> BookFilter {
        let mut filter = BookFilter::new();
        filter.set_author_name("Frank Herbert");
        filter
    }

    #[test]
    fn test_apply_filter_shows_summary() {
        let mut state = AppState::new();
        let filter = CatalogAction::ApplyFilter(herbert()).prepare(&mut state);

        assert_eq!(filter, Some(herbert()));
        assert!(state.catalog.show_summary);
        assert!(state.ui.is_busy());
    }

    #[test]
    fn test_reset_filter_hides_summary() {
        let mut state = AppState::new();
        CatalogAction::ApplyFilter(herbert()).prepare(&mut state);

        let filter = CatalogAction::ResetFilter.prepare(&mut state);
        assert_eq!(filter, None);
        assert!(!state.catalog.show_summary);
        assert_eq!(state.ui.pending_requests, 2);
    }

    #[test]
    fn test_mutation_keeps_active_filter() {
        let mut state = AppState::new();
        state.catalog.apply_filter(herbert());

        let action = CatalogAction::Delete {
            collection: Collection::Books,
            id: 1,
            label: "Dune".into(),
        };
        assert_eq!(action.prepare(&mut state), Some(herbert()));
    }

    #[test]
    fn test_filter_refetches_books_only() {
        let sync = CatalogSync::new(RecordingGateway::default());
        let report = tokio_test::block_on(
            CatalogAction::ApplyFilter(herbert()).run(&sync, Some(herbert())),
        );

        assert_eq!(
            *sync.gateway().calls.lock().unwrap(),
            vec!["GET books [bookName,authorName,avg_rating,num_rating]"]
        );
        assert_eq!(report.snapshots.len(), 1);
    }

    #[test]
    fn test_submit_then_apply_report() {
        let sync = CatalogSync::new(RecordingGateway::default());
        let mut state = AppState::new();

        let action = CatalogAction::Submit(RecordPayload::CreateAuthor(NewAuthor {
            author_name: "Frank Herbert".into(),
        }));
        let filter = action.prepare(&mut state);
        let report = tokio_test::block_on(action.run(&sync, filter));
        state.apply_report(report);

        assert_eq!(
            *sync.gateway().calls.lock().unwrap(),
            vec![
                "POST authors",
                "GET books []",
                "GET genres []",
                "GET authors []",
                "GET reviews []"
            ]
        );
        assert_eq!(state.catalog.books[0].title, "Dune");
        assert!(!state.ui.is_busy());
        assert_eq!(
            state.ui.status_message.unwrap().text,
            "Author 'Frank Herbert' added"
        );
    }

    // ------------------------------------------------------------------------
    // Dispatch from a mounted popup
    // ------------------------------------------------------------------------

    use crate::components::dialogs::record_dialog::submit_draft;
    use crate::state::{Dialog, RecordDialogMode, install_gateway};
    use bookshelf_model::{AuthorDraft, RecordDraft};
    use dioxus::core::NoOpMutations;

    /// Stateless backend with one book, shared by every mounted test
    struct OneBookGateway;

    #[async_trait]
    impl CatalogGateway for OneBookGateway {
        async fn fetch_rows(
            &self,
            collection: Collection,
            _query: &[(String, String)],
        ) -> Result<Value, ClientError> {
            Ok(match collection {
                Collection::Books => json!([[1, "Dune", "Frank Herbert", "Sci-Fi", "", 4.0, 2]]),
                _ => json!([]),
            })
        }

        async fn create_record(&self, _payload: &RecordPayload) -> Result<(), ClientError> {
            Ok(())
        }

        async fn update_record(&self, _payload: &RecordPayload) -> Result<(), ClientError> {
            Ok(())
        }

        async fn delete_record(
            &self,
            _collection: Collection,
            _id: RecordId,
        ) -> Result<(), ClientError> {
            Ok(())
        }
    }

    /// Sends an author draft the way the add form does, on first render
    #[component]
    fn AuthorPopup() -> Element {
        let actions = use_catalog_actions();
        use_effect(move || {
            let draft = AuthorDraft {
                name: "Frank Herbert".into(),
            };
            submit_draft(RecordDraft::AddAuthor(draft), actions);
        });
        rsx! { div { "Add Author" } }
    }

    /// Closes itself and dispatches, like the filter panel's buttons
    #[component]
    fn FilterPopup(action: CatalogAction) -> Element {
        let actions = use_catalog_actions();
        use_effect(move || {
            APP_STATE.write().ui.submit_dialog();
            actions.dispatch(action.clone());
        });
        rsx! { div { "Filter Books" } }
    }

    fn author_host() -> Element {
        let open = APP_STATE.read().ui.active_dialog.is_some();
        rsx! {
            if open {
                AuthorPopup {}
            }
        }
    }

    fn filter_host() -> Element {
        let open = APP_STATE.read().ui.active_dialog.is_some();
        rsx! {
            if open {
                FilterPopup { action: CatalogAction::ApplyFilter(herbert()) }
            }
        }
    }

    /// Mount `host` with `dialog` open and render until no request is pending
    fn run_with_dialog(host: fn() -> Element, dialog: Dialog) -> VirtualDom {
        install_gateway(OneBookGateway);

        let mut dom = VirtualDom::new(host);
        dom.in_scope(ScopeId::ROOT, || APP_STATE.write().ui.show_dialog(dialog));
        dom.rebuild_in_place();

        for _ in 0..10 {
            dom.render_immediate(&mut NoOpMutations);
            let idle = dom.in_scope(ScopeId::ROOT, || {
                let state = APP_STATE.read();
                state.ui.active_dialog.is_none() && !state.ui.is_busy()
            });
            if idle {
                break;
            }
        }
        dom
    }

    #[test]
    fn test_record_submit_refreshes_after_popup_closes() {
        let dom = run_with_dialog(author_host, Dialog::Record(RecordDialogMode::AddAuthor));

        dom.in_scope(ScopeId::ROOT, || {
            let state = APP_STATE.read();
            assert!(state.ui.active_dialog.is_none());
            assert_eq!(state.ui.pending_requests, 0);
            assert_eq!(state.catalog.books.len(), 1);
            assert_eq!(
                state.ui.status_message.as_ref().map(|m| m.text.as_str()),
                Some("Author 'Frank Herbert' added")
            );
        });
    }

    #[test]
    fn test_filter_apply_refreshes_after_panel_closes() {
        let dom = run_with_dialog(filter_host, Dialog::Filter);

        dom.in_scope(ScopeId::ROOT, || {
            let state = APP_STATE.read();
            assert!(state.ui.active_dialog.is_none());
            assert_eq!(state.ui.pending_requests, 0);
            assert_eq!(state.catalog.active_filter, Some(herbert()));
            assert_eq!(state.catalog.books[0].author_name, "Frank Herbert");
            assert!(state.catalog.summary().is_some());
        });
    }
}
