use crate::models::NoteListEntry;
use crate::storage::{load_json, save_json, KeyValueStore, NOTE_LIST_KEY};

/// Reads the persisted note index.
///
/// Never fails: a missing or malformed index reads as "no notes".
pub(crate) fn read_note_list(store: &impl KeyValueStore) -> Vec<NoteListEntry> {
    load_json::<Vec<NoteListEntry>>(store, NOTE_LIST_KEY).unwrap_or_default()
}

pub(crate) fn write_note_list(store: &impl KeyValueStore, notes: &[NoteListEntry]) {
    save_json(store, NOTE_LIST_KEY, &notes);
}
