//! CV lifecycle commands: create, list, delete

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_editor::EditSession;
use folio_model::RandomIdGenerator;
use folio_store::{DocumentStore, Registry};
use std::path::Path;
use std::sync::Arc;

use super::open_backend;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Display name for the new CV
    pub name: String,
}

pub fn create(args: CreateArgs, data_dir: &Path) -> Result<()> {
    let backend = open_backend(data_dir);
    let ids = RandomIdGenerator;

    let registry = Registry::new(Arc::clone(&backend));
    let meta = registry.create(&args.name, &ids)?;
    EditSession::create(DocumentStore::new(backend), &meta.id, &ids)?;

    println!(
        "{} Created {} ({})",
        "✓".green(),
        args.name.bright_white(),
        meta.id.dimmed()
    );
    Ok(())
}

pub fn list(data_dir: &Path) -> Result<()> {
    let registry = Registry::new(open_backend(data_dir));
    let entries = registry.list()?;

    if entries.is_empty() {
        println!("No CVs yet. Create one with {}", "folio create <name>".bright_white());
        return Ok(());
    }

    for entry in entries {
        println!(
            "{}  {}  {}",
            entry.id.dimmed(),
            entry.name.bright_white(),
            entry.last_modified
        );
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the CV to delete
    pub id: String,
}

pub fn delete(args: DeleteArgs, data_dir: &Path) -> Result<()> {
    let backend = open_backend(data_dir);
    let registry = Registry::new(Arc::clone(&backend));
    let store = DocumentStore::new(backend);

    match registry.remove(&args.id)? {
        Some(meta) => {
            store.delete(&args.id)?;
            println!("{} Deleted {}", "✓".green(), meta.name.bright_white());
        }
        None => println!("{} No CV registered under {}", "⚠".yellow(), args.id),
    }
    Ok(())
}
