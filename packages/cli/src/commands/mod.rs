pub mod cv;
pub mod edit;
pub mod show;

pub use cv::{create, delete, list, CreateArgs, DeleteArgs};
pub use edit::{
    add_section, remove_section, set_content, set_style, AddSectionArgs, RemoveSectionArgs,
    SetContentArgs, SetStyleArgs,
};
pub use show::{show, ShowArgs};

use folio_common::FileBackend;
use std::path::Path;
use std::sync::Arc;

/// One shared backend per invocation; registry and documents live in the
/// same directory.
pub(crate) fn open_backend(data_dir: &Path) -> Arc<FileBackend> {
    Arc::new(FileBackend::new(data_dir))
}
