use serde::{Deserialize, Serialize};

/// One row of the persisted note index.
///
/// `name` doubles as the route segment and the storage key of the note's
/// content; `id` is an opaque uniqueness tag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteListEntry {
    pub name: String,
    pub id: String,
}

/// Content record stored under the note's current name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteContent {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl NoteContent {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
        }
    }
}

/// Editor input mode, persisted under the typing mode key.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum TypingMode {
    #[default]
    Edit,
    Read,
}

impl TypingMode {
    pub fn toggled(self) -> Self {
        match self {
            TypingMode::Edit => TypingMode::Read,
            TypingMode::Read => TypingMode::Edit,
        }
    }
}
