mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add_section, create, delete, list, remove_section, set_content, set_style, show,
    AddSectionArgs, CreateArgs, DeleteArgs, RemoveSectionArgs, SetContentArgs, SetStyleArgs,
    ShowArgs,
};
use std::path::PathBuf;

/// Folio CLI - compose CVs out of nested, stylable sections
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the CV store
    #[arg(long, global = true, default_value = ".folio")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new CV seeded with a default root section
    Create(CreateArgs),

    /// List registered CVs
    List,

    /// Print a CV's section tree
    Show(ShowArgs),

    /// Append a new section under a parent section
    AddSection(AddSectionArgs),

    /// Replace a section's text or image content
    SetContent(SetContentArgs),

    /// Restyle a section
    SetStyle(SetStyleArgs),

    /// Remove a section and its whole subtree
    RemoveSection(RemoveSectionArgs),

    /// Delete a CV and its registry entry
    Delete(DeleteArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Create(args) => create(args, &cli.data_dir),
        Command::List => list(&cli.data_dir),
        Command::Show(args) => show(args, &cli.data_dir),
        Command::AddSection(args) => add_section(args, &cli.data_dir),
        Command::SetContent(args) => set_content(args, &cli.data_dir),
        Command::SetStyle(args) => set_style(args, &cli.data_dir),
        Command::RemoveSection(args) => remove_section(args, &cli.data_dir),
        Command::Delete(args) => delete(args, &cli.data_dir),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
