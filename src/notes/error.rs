use thiserror::Error;

/// Why a candidate note name was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum NoteNameError {
    #[error("Name can not be empty")]
    Empty,

    #[error("This name is not allowed")]
    Reserved,

    #[error("This name is already taken")]
    Taken,

    #[error("You can't use # or / characters, or name a note . or ..")]
    IllegalCharacter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum NotesError {
    #[error(transparent)]
    InvalidName(#[from] NoteNameError),

    #[error("Note {0:?} does not exist")]
    UnknownNote(String),

    #[error("Note {0:?} has no saved content to carry over")]
    MissingContent(String),

    #[error("Notes are no longer available")]
    Unavailable,
}

pub(crate) type NotesResult<T> = Result<T, NotesError>;
