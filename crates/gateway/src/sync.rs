//! Mutation and refresh orchestration
//!
//! `CatalogSync` runs one user action end to end: the mutation (if any),
//! then a refetch of every collection the mutation invalidates. Failures are
//! caught here, logged once, and reported; they never abort the remaining
//! refetches. A failed fetch leaves that collection's snapshot untouched.

use bookshelf_core::{Collection, CollectionSet, MutationKind, RecordId};
use bookshelf_model::{BookFilter, Catalog, CollectionSnapshot, RecordPayload};
use tracing::{error, info};

use crate::gateway::CatalogGateway;

// ============================================================================
// Reports
// ============================================================================

/// Outcome of the mutation part of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    /// What was mutated, for status lines
    pub subject: String,
    /// User-facing failure text, if the mutation failed
    pub error: Option<String>,
}

impl MutationOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// A collection that could not be refreshed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub collection: Collection,
    pub message: String,
}

/// Everything one action produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    pub mutation: Option<MutationOutcome>,
    pub snapshots: Vec<CollectionSnapshot>,
    pub failures: Vec<FetchFailure>,
}

impl SyncReport {
    /// Whether every step succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.mutation.as_ref().is_none_or(MutationOutcome::succeeded)
    }

    /// Replace the refreshed collections in a catalog
    ///
    /// Collections whose fetch failed keep their previous snapshot.
    pub fn apply_to(self, catalog: &mut Catalog) {
        for snapshot in self.snapshots {
            catalog.replace(snapshot);
        }
    }

    /// One-line summary for a status bar
    pub fn status_line(&self) -> String {
        if let Some(outcome) = &self.mutation {
            let record = outcome.kind.target().record_name();
            return match &outcome.error {
                Some(message) => format!("{record} '{}' was not saved: {message}", outcome.subject),
                None if self.failures.is_empty() => {
                    format!("{record} '{}' {}", outcome.subject, outcome.kind.verb())
                }
                None => format!(
                    "{record} '{}' {}, but refreshing {} failed",
                    outcome.subject,
                    outcome.kind.verb(),
                    self.failed_names()
                ),
            };
        }

        if self.failures.is_empty() {
            let names: Vec<&str> = self
                .snapshots
                .iter()
                .map(|s| s.collection().display_name())
                .collect();
            format!("Loaded {}", names.join(", "))
        } else {
            format!("Could not load {}", self.failed_names())
        }
    }

    fn failed_names(&self) -> String {
        self.failures
            .iter()
            .map(|f| f.collection.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Runs actions against a gateway with the fail-and-log policy
#[derive(Debug, Clone)]
pub struct CatalogSync<G> {
    gateway: G,
}

impl<G: CatalogGateway> CatalogSync<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Load every collection, as on first mount
    pub async fn load_all(&self, filter: Option<&BookFilter>) -> SyncReport {
        self.refresh(CollectionSet::of(&Collection::ALL), filter)
            .await
    }

    /// Fetch a set of collections, books with the given filter
    pub async fn refresh(
        &self,
        collections: CollectionSet,
        filter: Option<&BookFilter>,
    ) -> SyncReport {
        let mut report = SyncReport::default();

        for collection in collections.iter() {
            match self.gateway.fetch_collection(collection, filter).await {
                Ok(snapshot) => report.snapshots.push(snapshot),
                Err(e) => {
                    error!("Error fetching {collection}: {e}");
                    report.failures.push(FetchFailure {
                        collection,
                        message: e.user_message(),
                    });
                }
            }
        }

        report
    }

    /// Create or update a record, then refetch what it invalidates
    pub async fn submit(&self, payload: RecordPayload, filter: Option<&BookFilter>) -> SyncReport {
        let kind = payload.kind();
        let subject = payload.summary();

        let error = match self.gateway.send(&payload).await {
            Ok(()) => {
                info!("{} '{subject}' {}", kind.target().record_name(), kind.verb());
                None
            }
            Err(e) => {
                error!("Error sending {kind:?} to {}: {e}", kind.target());
                Some(e.user_message())
            }
        };

        self.finish(MutationOutcome { kind, subject, error }, filter)
            .await
    }

    /// Delete a record, then refetch what it invalidates
    pub async fn delete(
        &self,
        collection: Collection,
        id: RecordId,
        label: impl Into<String>,
        filter: Option<&BookFilter>,
    ) -> SyncReport {
        let kind = MutationKind::delete_of(collection);
        let subject = label.into();

        let error = match self.gateway.delete_record(collection, id).await {
            Ok(()) => {
                info!("Deleted {} {id}", collection.record_name());
                None
            }
            Err(e) => {
                error!("Error deleting {collection}/{id}: {e}");
                Some(e.user_message())
            }
        };

        self.finish(MutationOutcome { kind, subject, error }, filter)
            .await
    }

    /// Refetch after a mutation, whether or not it succeeded
    async fn finish(&self, outcome: MutationOutcome, filter: Option<&BookFilter>) -> SyncReport {
        let mut report = self
            .refresh(outcome.kind.affected_collections(), filter)
            .await;
        report.mutation = Some(outcome);
        report
    }
}

// ============================================================================
// Tests
// ============================================================================
