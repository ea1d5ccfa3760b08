//! The note collection: index, content records, naming rules and routes.

mod collection;
mod error;
mod list;
mod path;
mod validate;

pub(crate) use collection::{Navigator, NoteCollection};
#[cfg(test)]
pub(crate) use error::NoteNameError;
pub(crate) use error::{NotesError, NotesResult};
pub(crate) use path::{note_name_from_path, note_path};
