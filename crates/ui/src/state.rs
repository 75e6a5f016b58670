//! Application State Management for Bookshelf
//!
//! This module provides centralized state management using Dioxus 0.7 Signals.
//! It holds the catalog snapshot, the active popup and the status bar, and
//! owns the gateway every network action goes through.

use bookshelf_core::{CatalogConfig, Collection, RecordId};
use bookshelf_gateway::{ApiClient, CatalogGateway, CatalogSync, SyncReport};
use bookshelf_model::{Catalog, DialogEvent, DialogPhase};
use dioxus::prelude::*;
use std::sync::OnceLock;

// ============================================================================
// Dialogs
// ============================================================================

/// Which record popup is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDialogMode {
    AddUser,
    AddBook,
    AddGenre,
    AddAuthor,
    AddReview,
    /// Edit the user with this identifier
    EditUser(RecordId),
}

impl RecordDialogMode {
    /// Add mode for a collection
    pub fn add(collection: Collection) -> Self {
        match collection {
            Collection::Users => RecordDialogMode::AddUser,
            Collection::Books => RecordDialogMode::AddBook,
            Collection::Genres => RecordDialogMode::AddGenre,
            Collection::Authors => RecordDialogMode::AddAuthor,
            Collection::Reviews => RecordDialogMode::AddReview,
        }
    }

    /// Popup heading
    pub fn title(&self) -> String {
        match self {
            RecordDialogMode::EditUser(_) => "Edit User".to_string(),
            other => format!("Add {}", other.collection().record_name()),
        }
    }

    /// Collection the popup writes to
    pub fn collection(&self) -> Collection {
        match self {
            RecordDialogMode::AddUser | RecordDialogMode::EditUser(_) => Collection::Users,
            RecordDialogMode::AddBook => Collection::Books,
            RecordDialogMode::AddGenre => Collection::Genres,
            RecordDialogMode::AddAuthor => Collection::Authors,
            RecordDialogMode::AddReview => Collection::Reviews,
        }
    }
}

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Create or edit a record
    Record(RecordDialogMode),
    /// Book filter panel
    Filter,
}

impl Dialog {
    /// Whether Escape or a backdrop click closes this dialog
    ///
    /// The edit-user popup only closes through its own controls.
    pub fn is_dismissable(&self) -> bool {
        !matches!(self, Dialog::Record(RecordDialogMode::EditUser(_)))
    }

    /// CSS width class for the dialog body
    pub fn width_class(&self) -> &'static str {
        match self {
            Dialog::Filter => "max-w-2xl w-full",
            Dialog::Record(RecordDialogMode::AddBook | RecordDialogMode::AddReview) => {
                "max-w-xl w-full"
            }
            Dialog::Record(_) => "max-w-lg w-full",
        }
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (dialogs, panels, etc.)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Collection shown in the main area
    pub active_collection: Collection,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Lifecycle of the active dialog
    pub dialog_phase: DialogPhase,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Requests started but not yet finished
    pub pending_requests: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            active_collection: Collection::Books,
            active_dialog: None,
            dialog_phase: DialogPhase::Closed,
            status_message: None,
            pending_requests: 0,
        }
    }
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the collection shown in the main area
    pub fn show_collection(&mut self, collection: Collection) {
        self.active_collection = collection;
    }

    /// Show a dialog, replacing any open one
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
        self.dialog_phase = DialogPhase::Mounted;
        self.dialog_phase.advance(DialogEvent::Show);
    }

    /// Close the current dialog after its form was submitted
    pub fn submit_dialog(&mut self) {
        self.finish_dialog(DialogEvent::Submit);
    }

    /// Close the current dialog without submitting
    pub fn close_dialog(&mut self) {
        self.finish_dialog(DialogEvent::Cancel);
    }

    /// Close the current dialog from Escape or a backdrop click
    ///
    /// Returns whether the dialog was closed.
    pub fn dismiss_dialog(&mut self) -> bool {
        match &self.active_dialog {
            Some(dialog) if dialog.is_dismissable() => {
                self.close_dialog();
                true
            }
            _ => false,
        }
    }

    fn finish_dialog(&mut self, event: DialogEvent) {
        if self.active_dialog.is_none() {
            return;
        }
        self.dialog_phase.advance(event);
        self.dialog_phase.advance(DialogEvent::Finish);
        self.active_dialog = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Whether any request is in flight
    pub fn is_busy(&self) -> bool {
        self.pending_requests > 0
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last fetched snapshot of every collection
    pub catalog: Catalog,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that a request was started
    pub fn begin_request(&mut self) {
        self.ui.pending_requests += 1;
    }

    /// Fold the result of a finished action into the state
    ///
    /// Refreshed collections replace their previous snapshot; failed ones
    /// keep it. Whatever finishes last wins.
    pub fn apply_report(&mut self, report: SyncReport) {
        self.ui.pending_requests = self.ui.pending_requests.saturating_sub(1);

        let level = if report.is_success() {
            StatusLevel::Success
        } else if report.snapshots.is_empty() && report.mutation.is_none() {
            StatusLevel::Error
        } else if report.mutation.as_ref().is_some_and(|m| !m.succeeded()) {
            StatusLevel::Error
        } else {
            StatusLevel::Warning
        };
        self.ui.set_status(report.status_line(), level);
        report.apply_to(&mut self.catalog);
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Orchestrator over whichever gateway startup installed
pub type SharedSync = CatalogSync<Box<dyn CatalogGateway>>;

/// Gateway shared by every action, set once at startup
static SYNC: OnceLock<SharedSync> = OnceLock::new();

/// Initialize the gateway from configuration
/// Call this once at app startup
pub fn init_app_state(config: &CatalogConfig) -> Result<(), bookshelf_gateway::ClientError> {
    install_gateway(ApiClient::new(config)?);
    Ok(())
}

/// Install the gateway every action goes through
///
/// Returns `false` and keeps the existing one if a gateway is already set.
pub fn install_gateway(gateway: impl CatalogGateway + 'static) -> bool {
    let installed = SYNC.set(CatalogSync::new(Box::new(gateway))).is_ok();
    if !installed {
        tracing::warn!("Gateway already initialized, keeping the first one");
    }
    installed
}

/// The shared gateway, if startup initialized it
pub fn catalog_sync() -> Option<&'static SharedSync> {
    SYNC.get()
}

// ============================================================================
// Tests
// ============================================================================
