//! Render a CV's section tree to the terminal

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_common::{walk_section, Visitor};
use folio_editor::EditSession;
use folio_model::{Section, SectionKind};
use folio_store::DocumentStore;
use std::path::Path;

use super::open_backend;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Identifier of the CV to show
    pub id: String,

    /// Include style attributes per section
    #[arg(short, long)]
    pub styles: bool,
}

struct TreePrinter {
    depth: usize,
    styles: bool,
}

impl Visitor for TreePrinter {
    fn visit_section(&mut self, section: &Section) {
        let indent = "  ".repeat(self.depth);
        let kind = match section.kind {
            SectionKind::Container => "container".blue(),
            SectionKind::Text => "text".green(),
            SectionKind::Image => "image".magenta(),
        };
        let content = preview(&section.content);

        println!("{indent}{kind} {} {content}", section.id.dimmed());
        if self.styles {
            let style = &section.style;
            println!(
                "{indent}  {}",
                format!(
                    "bg={} padding={} margin={} border={} {} {}",
                    style.background_color,
                    style.padding,
                    style.margin,
                    style.border_style,
                    style.border_width,
                    style.border_color
                )
                .dimmed()
            );
        }

        self.depth += 1;
        walk_section(self, section);
        self.depth -= 1;
    }
}

fn preview(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let flat = content.replace('\n', " ");
    if flat.chars().count() > 40 {
        let truncated: String = flat.chars().take(40).collect();
        format!("“{truncated}…”")
    } else {
        format!("“{flat}”")
    }
}

pub fn show(args: ShowArgs, data_dir: &Path) -> Result<()> {
    let session = EditSession::open(DocumentStore::new(open_backend(data_dir)), &args.id)?;

    let mut printer = TreePrinter {
        depth: 0,
        styles: args.styles,
    };
    printer.visit_document(session.document());
    Ok(())
}
