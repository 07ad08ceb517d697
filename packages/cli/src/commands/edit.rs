//! Section editing commands: add, set-content, set-style, remove

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use folio_common::KeyValueBackend;
use folio_editor::{EditSession, Mutation, Orientation};
use folio_model::{RandomIdGenerator, Section, SectionKind, SectionPatch, SectionStyle};
use folio_store::{DocumentStore, Registry};
use std::path::Path;
use std::sync::Arc;

use super::open_backend;

fn parse_kind(kind: &str) -> Result<SectionKind> {
    match kind {
        "container" => Ok(SectionKind::Container),
        "text" => Ok(SectionKind::Text),
        "image" => Ok(SectionKind::Image),
        other => bail!("Invalid kind: {other}. Use: container, text, or image"),
    }
}

fn open_registry(
    data_dir: &Path,
) -> (
    Arc<folio_common::FileBackend>,
    Registry<Arc<folio_common::FileBackend>>,
) {
    let backend = open_backend(data_dir);
    let registry = Registry::new(Arc::clone(&backend));
    (backend, registry)
}

fn finish<B: KeyValueBackend>(
    registry: &Registry<B>,
    session: &EditSession<B>,
    message: String,
) -> Result<()> {
    registry.touch(session.document_id())?;
    println!("{} {message}", "✓".green());
    Ok(())
}

#[derive(Debug, Args)]
pub struct AddSectionArgs {
    /// Identifier of the CV
    pub id: String,

    /// Identifier of the parent section
    #[arg(short, long)]
    pub parent: String,

    /// Section kind (container, text, image)
    #[arg(short, long, default_value = "container")]
    pub kind: String,

    /// Initial content (text body or image reference)
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Lay the new child out beside its siblings instead of below them
    #[arg(long)]
    pub horizontal: bool,
}

pub fn add_section(args: AddSectionArgs, data_dir: &Path) -> Result<()> {
    let (backend, registry) = open_registry(data_dir);
    let ids = RandomIdGenerator;
    let mut session = EditSession::open(DocumentStore::new(backend), &args.id)?;

    if session.find(&args.parent).is_none() {
        bail!("No section {} in CV {}", args.parent, args.id);
    }

    let section = Section::new(&ids)
        .with_kind(parse_kind(&args.kind)?)
        .with_content(args.content);
    let section_id = section.id.clone();
    let orientation = if args.horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    session.apply(Mutation::InsertChild {
        parent_id: args.parent.clone(),
        section,
        orientation,
    })?;

    finish(
        &registry,
        &session,
        format!("Added {} under {}", section_id, args.parent.dimmed()),
    )
}

#[derive(Debug, Args)]
pub struct SetContentArgs {
    /// Identifier of the CV
    pub id: String,

    /// Identifier of the section to change
    pub section: String,

    /// New content
    pub content: String,
}

pub fn set_content(args: SetContentArgs, data_dir: &Path) -> Result<()> {
    let (backend, registry) = open_registry(data_dir);
    let mut session = EditSession::open(DocumentStore::new(backend), &args.id)?;

    if session.find(&args.section).is_none() {
        bail!("No section {} in CV {}", args.section, args.id);
    }

    session.apply(Mutation::UpdateSection {
        section_id: args.section.clone(),
        patch: SectionPatch::content(args.content),
    })?;

    finish(&registry, &session, format!("Updated {}", args.section))
}

#[derive(Debug, Args)]
pub struct SetStyleArgs {
    /// Identifier of the CV
    pub id: String,

    /// Identifier of the section to restyle
    pub section: String,

    /// Background color, or "transparent"
    #[arg(long)]
    pub background: Option<String>,

    #[arg(long)]
    pub padding: Option<String>,

    #[arg(long)]
    pub margin: Option<String>,

    /// Border style keyword (none, solid, dashed, ...)
    #[arg(long)]
    pub border_style: Option<String>,

    #[arg(long)]
    pub border_width: Option<String>,

    #[arg(long)]
    pub border_color: Option<String>,
}

pub fn set_style(args: SetStyleArgs, data_dir: &Path) -> Result<()> {
    let (backend, registry) = open_registry(data_dir);
    let mut session = EditSession::open(DocumentStore::new(backend), &args.id)?;

    // A style patch replaces the whole record, so start from the section's
    // current style and lay the given flags over it.
    let Some(section) = session.find(&args.section) else {
        bail!("No section {} in CV {}", args.section, args.id);
    };
    let mut style: SectionStyle = section.style.clone();
    if let Some(background) = args.background {
        style.background_color = background;
    }
    if let Some(padding) = args.padding {
        style.padding = padding;
    }
    if let Some(margin) = args.margin {
        style.margin = margin;
    }
    if let Some(border_style) = args.border_style {
        style.border_style = border_style;
    }
    if let Some(border_width) = args.border_width {
        style.border_width = border_width;
    }
    if let Some(border_color) = args.border_color {
        style.border_color = border_color;
    }

    session.apply(Mutation::UpdateSection {
        section_id: args.section.clone(),
        patch: SectionPatch::style(style),
    })?;

    finish(&registry, &session, format!("Restyled {}", args.section))
}

#[derive(Debug, Args)]
pub struct RemoveSectionArgs {
    /// Identifier of the CV
    pub id: String,

    /// Identifier of the section to remove, subtree included
    pub section: String,
}

pub fn remove_section(args: RemoveSectionArgs, data_dir: &Path) -> Result<()> {
    let (backend, registry) = open_registry(data_dir);
    let mut session = EditSession::open(DocumentStore::new(backend), &args.id)?;

    if session.find(&args.section).is_none() {
        bail!("No section {} in CV {}", args.section, args.id);
    }

    session.apply(Mutation::RemoveSection {
        section_id: args.section.clone(),
    })?;

    finish(&registry, &session, format!("Removed {}", args.section))
}
