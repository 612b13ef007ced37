//! Interactive glossary management menu.
//!
//! Every action reports its own failure and returns to the menu; only a
//! broken terminal or Ctrl+C ends the loop.

use anyhow::{Result, anyhow};
use inquire::Select;
use std::fmt;
use std::path::Path;

use super::info::{INFO_FILE, write_info};
use crate::config::ResolvedConfig;
use crate::deepl::{DeleteOutcome, GlossaryApi, GlossaryClient, GlossaryError, GlossaryRecord};
use crate::lifecycle::{BulkDeleteOutcome, DeleteDecision, GlossaryManager, UpdateOutcome};
use crate::terms::TermSet;
use crate::ui::{PromptConfirm, Spinner, Style, is_prompt_cancelled, print_error};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Create,
    List,
    ViewEntries,
    DeleteOne,
    DeleteAll,
    Update,
    Exit,
}

impl MenuAction {
    const ALL: [Self; 7] = [
        Self::Create,
        Self::List,
        Self::ViewEntries,
        Self::DeleteOne,
        Self::DeleteAll,
        Self::Update,
        Self::Exit,
    ];

    const fn key(self) -> u8 {
        match self {
            Self::Create => 1,
            Self::List => 2,
            Self::ViewEntries => 3,
            Self::DeleteOne => 4,
            Self::DeleteAll => 5,
            Self::Update => 6,
            Self::Exit => 0,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create new glossary",
            Self::List => "List all glossaries",
            Self::ViewEntries => "View glossary contents",
            Self::DeleteOne => "Delete specific glossary",
            Self::DeleteAll => "Delete all glossaries",
            Self::Update => "Update glossary (recommended)",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

/// Select-list wrapper so a record can be picked by its summary.
#[derive(Clone, Copy)]
struct RecordChoice<'a>(&'a GlossaryRecord);

impl fmt::Display for RecordChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.describe())
    }
}

fn print_header(config: &ResolvedConfig) {
    println!(
        "{} {} - Glossary Manager",
        Style::header("deepl-glossary"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {} {}  {} {} → {}  {} {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint),
        Style::label("languages"),
        config.glossary.source_lang,
        config.glossary.target_lang,
        Style::label("terms"),
        config.terms.len()
    );
    println!(
        "{}",
        Style::hint("Note: DeepL Free accounts can hold only one glossary")
    );
    println!();
}

/// Runs the menu until the user exits.
pub async fn run_menu(config: &ResolvedConfig) -> Result<()> {
    let client = GlossaryClient::new(&config.client_config())?;
    let manager = GlossaryManager::new(&client);

    print_header(config);

    loop {
        let choice = Select::new("Select an option", MenuAction::ALL.to_vec())
            .with_page_size(MenuAction::ALL.len())
            .prompt();

        let action = match choice {
            Ok(action) => action,
            Err(e) if is_prompt_cancelled(&e) => {
                println!();
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if action == MenuAction::Exit {
            break;
        }

        if let Err(e) = run_action(action, &manager, config).await {
            print_error(&format!("{e:#}"));
        }
        println!();
    }

    println!("{}", Style::success("Goodbye!"));
    Ok(())
}

async fn run_action<A: GlossaryApi>(
    action: MenuAction,
    manager: &GlossaryManager<'_, A>,
    config: &ResolvedConfig,
) -> Result<()> {
    match action {
        MenuAction::Create => create(manager, config).await,
        MenuAction::List => list(manager).await.map(|_| ()),
        MenuAction::ViewEntries => view_entries(manager).await,
        MenuAction::DeleteOne => delete_one(manager).await,
        MenuAction::DeleteAll => delete_all(manager).await,
        MenuAction::Update => update(manager, config).await,
        MenuAction::Exit => Ok(()),
    }
}

/// Adds a next step to the errors a user can act on.
fn explain(err: GlossaryError) -> anyhow::Error {
    match err {
        GlossaryError::QuotaExceeded { .. } => anyhow!(
            "{err}\n  Free accounts hold one glossary; use 'Update glossary' or delete the old one first"
        ),
        GlossaryError::Auth { .. } => {
            anyhow!("{err}\n  Check the API key and whether it matches the endpoint")
        }
        other => other.into(),
    }
}

async fn create<A: GlossaryApi>(
    manager: &GlossaryManager<'_, A>,
    config: &ResolvedConfig,
) -> Result<()> {
    let spinner = Spinner::new(&format!("Creating glossary '{}'...", config.glossary.name));
    let created = manager
        .create(&config.glossary, &config.terms)
        .await
        .map_err(explain)?;
    spinner.stop();

    report_created(&created, config)
}

fn report_created(record: &GlossaryRecord, config: &ResolvedConfig) -> Result<()> {
    println!("{} Glossary created", Style::success("✓"));
    print_record(record);
    println!(
        "  {}  {}",
        Style::label("plugin key"),
        Style::code(crate::deepl::plugin_secret(&config.api_key, &record.glossary_id))
    );

    write_info(Path::new(INFO_FILE), record, &config.api_key)?;
    crate::status!(
        "{} Glossary info saved to {}",
        Style::success("✓"),
        Style::value(INFO_FILE)
    );
    Ok(())
}

fn print_record(record: &GlossaryRecord) {
    println!("  {}        {}", Style::label("name"), Style::value(&record.name));
    println!("  {}          {}", Style::label("id"), Style::code(&record.glossary_id));
    println!(
        "  {}   {} → {}",
        Style::label("languages"),
        record.source_lang,
        record.target_lang
    );
    println!("  {}     {}", Style::label("entries"), record.entry_count);
    println!("  {}     {}", Style::label("created"), Style::secondary(&record.creation_time));
    if !record.ready {
        println!("  {}", Style::warning("not ready yet"));
    }
}

async fn list<A: GlossaryApi>(manager: &GlossaryManager<'_, A>) -> Result<Vec<GlossaryRecord>> {
    let spinner = Spinner::new("Fetching glossaries...");
    let records = manager.list().await.map_err(explain)?;
    spinner.stop();

    if records.is_empty() {
        println!("No glossaries found");
    } else {
        println!("{}", Style::header(format!("Glossaries ({})", records.len())));
        for (i, record) in records.iter().enumerate() {
            println!("{}.", i + 1);
            print_record(record);
        }
    }
    Ok(records)
}

/// Lets the user pick one of `records`; `None` when skipped with Esc.
fn choose(records: &[GlossaryRecord], message: &str) -> Result<Option<String>> {
    let choices: Vec<RecordChoice<'_>> = records.iter().map(RecordChoice).collect();
    match Select::new(message, choices).prompt_skippable() {
        Ok(choice) => Ok(choice.map(|c| c.0.glossary_id.clone())),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn view_entries<A: GlossaryApi>(manager: &GlossaryManager<'_, A>) -> Result<()> {
    let records = list(manager).await?;
    if records.is_empty() {
        return Ok(());
    }
    let Some(id) = choose(&records, "Glossary to view")? else {
        return Ok(());
    };

    let spinner = Spinner::new("Fetching entries...");
    let entries = manager.entries(&id).await.map_err(explain)?;
    spinner.stop();

    print_entries(&entries);
    Ok(())
}

fn print_entries(entries: &TermSet) {
    println!("{}", Style::header(format!("Entries ({})", entries.len())));
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {:>3}. {} → {}",
            i + 1,
            Style::term(&entry.source),
            Style::value(&entry.target)
        );
    }
}

async fn delete_one<A: GlossaryApi>(manager: &GlossaryManager<'_, A>) -> Result<()> {
    let records = list(manager).await?;
    if records.is_empty() {
        return Ok(());
    }
    let Some(id) = choose(&records, "Glossary to delete")? else {
        return Ok(());
    };

    match manager
        .delete_one(&id, &mut PromptConfirm)
        .await
        .map_err(explain)?
    {
        DeleteDecision::Declined => {}
        DeleteDecision::Completed(DeleteOutcome::Deleted) => {
            println!("{} Glossary deleted", Style::success("✓"));
        }
        DeleteDecision::Completed(DeleteOutcome::AlreadyGone) => {
            println!("{} Glossary was already deleted", Style::warning("!"));
        }
    }
    Ok(())
}

async fn delete_all<A: GlossaryApi>(manager: &GlossaryManager<'_, A>) -> Result<()> {
    match manager
        .delete_all(&mut PromptConfirm)
        .await
        .map_err(explain)?
    {
        BulkDeleteOutcome::NothingToDelete => println!("No glossaries to delete"),
        BulkDeleteOutcome::Declined { .. } => {}
        BulkDeleteOutcome::Done(report) => {
            for (record, err) in &report.failed {
                print_error(&format!("Failed to delete {}: {err}", record.describe()));
            }
            println!(
                "{} Deleted {}/{} glossaries",
                if report.failed.is_empty() {
                    Style::success("✓")
                } else {
                    Style::warning("!")
                },
                report.succeeded(),
                report.total()
            );
        }
    }
    Ok(())
}

async fn update<A: GlossaryApi>(
    manager: &GlossaryManager<'_, A>,
    config: &ResolvedConfig,
) -> Result<()> {
    println!(
        "{}",
        Style::hint("Glossaries cannot be edited in place: updating deletes the old one and creates a new one")
    );
    preview_terms(&config.terms);

    let outcome = manager
        .ensure_single_up_to_date(&config.glossary, &config.terms, &mut PromptConfirm)
        .await
        .map_err(explain)?;

    match outcome {
        UpdateOutcome::Cancelled { .. } => {
            println!("Update cancelled");
            Ok(())
        }
        UpdateOutcome::Updated(report) => {
            if report.had_multiple() {
                crate::warn!(
                    "{} Replaced {} glossaries; the account now holds one",
                    Style::warning("!"),
                    report.replaced.len()
                );
            } else if !report.replaced.is_empty() {
                println!("{} Old glossary deleted", Style::success("✓"));
            }
            report_created(&report.created, config)
        }
    }
}

fn preview_terms(terms: &TermSet) {
    println!("{}", Style::header("New terms"));
    for entry in terms.iter().take(5) {
        println!("  {} → {}", Style::term(&entry.source), Style::value(&entry.target));
    }
    if terms.len() > 5 {
        println!("  {}", Style::secondary(format!("... and {} more", terms.len() - 5)));
    }
}
