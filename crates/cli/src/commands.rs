//! Command handlers
//!
//! Listing follows the gateway's fail-and-log policy: a failed fetch prints a
//! warning and an empty result, and the command still succeeds. A failed
//! mutation is reported and makes the command fail.

use anyhow::{Context, Result, bail};
use bookshelf_core::{CatalogConfig, Collection, CollectionSet, RecordId};
use bookshelf_gateway::{ApiClient, CatalogSync, SyncReport};
use bookshelf_model::{
    AuthorDraft, BookDraft, Catalog, GenreDraft, RecordDraft, ReviewDraft, UserDraft,
    UserEditDraft,
};
use colored::Colorize;
use tracing::debug;

use crate::cli::{AddCommand, BookArgs, Cli, Commands, EditUserArgs};
use crate::output::{print_summary, print_table};

/// Run a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = CatalogConfig::load().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url.clone());
    }
    debug!("Using catalog API at {}", config.api_base_url);

    let client = ApiClient::new(&config).context("Failed to build HTTP client")?;
    let sync = CatalogSync::new(client);

    match cli.command {
        Commands::List { collection, json } => list(&sync, collection, json).await,
        Commands::Books(args) => books(&sync, &args).await,
        Commands::Add(command) => add(&sync, command).await,
        Commands::EditUser(args) => edit_user(&sync, args).await,
        Commands::Delete { collection, id } => delete(&sync, collection, id).await,
    }
}

/// Fetch collections into a fresh catalog, warning about any that failed
async fn fetch(
    sync: &CatalogSync<ApiClient>,
    collections: &[Collection],
    catalog: &mut Catalog,
) -> bool {
    let report = sync
        .refresh(CollectionSet::of(collections), catalog.book_query())
        .await;
    let complete = report.failures.is_empty();
    if !complete {
        eprintln!("{}", report.status_line().yellow());
    }
    report.apply_to(catalog);
    complete
}

async fn list(sync: &CatalogSync<ApiClient>, collection: Collection, json: bool) -> Result<()> {
    let mut catalog = Catalog::new();
    if !fetch(sync, &[collection], &mut catalog).await {
        return Ok(());
    }

    if json {
        let snapshot = catalog_snapshot(&catalog, collection)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_table(&catalog.table(collection));
    }
    Ok(())
}

async fn books(sync: &CatalogSync<ApiClient>, args: &BookArgs) -> Result<()> {
    let mut catalog = Catalog::new();
    catalog.apply_filter(args.to_filter());
    if !fetch(sync, &[Collection::Books], &mut catalog).await {
        return Ok(());
    }

    if args.json {
        let body = serde_json::json!({
            "books": catalog.books,
            "summary": catalog.summary(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_table(&catalog.table(Collection::Books));
    if let Some(summary) = catalog.summary() {
        print_summary(&summary);
    }
    Ok(())
}

fn catalog_snapshot(catalog: &Catalog, collection: Collection) -> Result<serde_json::Value> {
    let value = match collection {
        Collection::Users => serde_json::to_value(&catalog.users),
        Collection::Books => serde_json::to_value(&catalog.books),
        Collection::Genres => serde_json::to_value(&catalog.genres),
        Collection::Authors => serde_json::to_value(&catalog.authors),
        Collection::Reviews => serde_json::to_value(&catalog.reviews),
    };
    Ok(value?)
}

/// Turn a command into the draft the matching popup would hold
pub fn draft_for(command: AddCommand) -> RecordDraft {
    match command {
        AddCommand::User {
            username,
            email,
            join_date,
            bio,
        } => RecordDraft::AddUser(UserDraft {
            username,
            email,
            join_date,
            bio,
        }),
        AddCommand::Book {
            title,
            author,
            genre,
            synopsis,
        } => RecordDraft::AddBook(BookDraft {
            title,
            author_name: author,
            genre_name: genre,
            synopsis,
        }),
        AddCommand::Genre { name } => RecordDraft::AddGenre(GenreDraft { name }),
        AddCommand::Author { name } => RecordDraft::AddAuthor(AuthorDraft { name }),
        AddCommand::Review {
            user,
            book,
            rating,
            body,
            date,
        } => RecordDraft::AddReview(ReviewDraft {
            username: user,
            book_title: book,
            rating,
            body,
            review_date: date,
        }),
    }
}

async fn add(sync: &CatalogSync<ApiClient>, command: AddCommand) -> Result<()> {
    submit(sync, draft_for(command)).await
}

async fn edit_user(sync: &CatalogSync<ApiClient>, args: EditUserArgs) -> Result<()> {
    let mut catalog = Catalog::new();
    if !fetch(sync, &[Collection::Users], &mut catalog).await {
        bail!("Could not load user {}", args.id);
    }
    let Some(user) = catalog.user(args.id) else {
        bail!("No user with id {}", args.id);
    };

    let mut draft = UserEditDraft::from_user(user);
    let fields = &mut draft.fields;
    if let Some(username) = args.username {
        fields.username = username;
    }
    if let Some(email) = args.email {
        fields.email = email;
    }
    if let Some(join_date) = args.join_date {
        fields.join_date = join_date;
    }
    if let Some(bio) = args.bio {
        fields.bio = bio;
    }

    submit(sync, RecordDraft::EditUser(draft)).await
}

async fn submit(sync: &CatalogSync<ApiClient>, draft: RecordDraft) -> Result<()> {
    let problems = draft.problems();
    if !problems.is_empty() {
        bail!("{}", problems.join("; "));
    }

    let payload = draft.into_payload()?;
    let report = sync.submit(payload, None).await;
    finish(report)
}

async fn delete(sync: &CatalogSync<ApiClient>, collection: Collection, id: RecordId) -> Result<()> {
    let mut catalog = Catalog::new();
    fetch(sync, &[collection], &mut catalog).await;
    let label = catalog
        .label_of(collection, id)
        .unwrap_or_else(|| format!("#{id}"));

    let report = sync.delete(collection, id, label, None).await;
    finish(report)
}

/// Print the outcome of a mutation; a failed mutation fails the command
fn finish(report: SyncReport) -> Result<()> {
    let line = report.status_line();
    match &report.mutation {
        Some(outcome) if !outcome.succeeded() => bail!("{line}"),
        _ if report.is_success() => println!("{}", line.green()),
        _ => println!("{}", line.yellow()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::MutationKind;
    use bookshelf_gateway::MutationOutcome;

    #[test]
    fn test_add_user_draft_is_gated() {
        let draft = draft_for(AddCommand::User {
            username: "ana".into(),
            email: "not-an-email".into(),
            join_date: "2024-01-01".into(),
            bio: "Reader".into(),
        });
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_review_draft_keeps_rating_text() {
        let draft = draft_for(AddCommand::Review {
            user: "ana".into(),
            book: "Dune".into(),
            rating: "4".into(),
            body: String::new(),
            date: String::new(),
        });
        let RecordDraft::AddReview(review) = draft else {
            panic!("expected review draft");
        };
        assert_eq!(review.rating, "4");
        assert_eq!(review.book_title, "Dune");
    }

    #[test]
    fn test_failed_mutation_fails_command() {
        let report = SyncReport {
            mutation: Some(MutationOutcome {
                kind: MutationKind::CreateGenre,
                subject: "Horror".into(),
                error: Some("Server returned status 500".into()),
            }),
            ..SyncReport::default()
        };
        let err = finish(report).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Genre 'Horror' was not saved: Server returned status 500"
        );
    }

    #[test]
    fn test_refresh_failure_after_mutation_still_succeeds() {
        let report = SyncReport {
            mutation: Some(MutationOutcome {
                kind: MutationKind::DeleteBook,
                subject: "Dune".into(),
                error: None,
            }),
            failures: vec![bookshelf_gateway::FetchFailure {
                collection: Collection::Books,
                message: "Request timed out.".into(),
            }],
            ..SyncReport::default()
        };
        assert!(finish(report).is_ok());
    }
}
