use super::error::{NoteNameError, NotesError, NotesResult};
use super::list::{read_note_list, write_note_list};
use super::path::{note_path, ROOT_PATH};
use super::validate::check_name;
use crate::models::{NoteContent, NoteListEntry};
use crate::storage::{load_json, save_json, KeyValueStore, RESERVED_KEYS};
use crate::util::new_note_id;
use leptos::logging::{log, warn};

/// Where the app goes after a successful mutation.
pub(crate) trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate_to(&self, path: &str) {
        self(path)
    }
}

/// Owner of the note index.
///
/// Every note is two records: an entry in the index (persisted under
/// `NOTE_LIST_KEY`) and a content record persisted under the note's name. All
/// mutations go through here and move both records together. Validation runs
/// before the first write, so a refused mutation touches nothing.
pub(crate) struct NoteCollection<S> {
    store: S,
    notes: Vec<NoteListEntry>,
}

impl<S: KeyValueStore> NoteCollection<S> {
    pub fn load(store: S) -> Self {
        let notes = read_note_list(&store);
        Self { store, notes }
    }

    /// Re-reads the index, picking up writes made outside this collection.
    pub fn reload(&mut self) {
        self.notes = read_note_list(&self.store);
    }

    /// Newest first.
    pub fn notes(&self) -> &[NoteListEntry] {
        &self.notes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.notes.iter().any(|n| n.name == name)
    }

    pub fn validate_name(&self, candidate: &str) -> Result<(), NoteNameError> {
        check_name(candidate, &self.notes, None)
    }

    pub fn add_note(&mut self, name: &str, nav: &impl Navigator) -> NotesResult<NoteListEntry> {
        self.validate_name(name)?;

        let entry = NoteListEntry {
            name: name.to_string(),
            id: new_note_id(),
        };
        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(entry.clone());
        next.extend(self.notes.iter().cloned());

        write_note_list(&self.store, &next);
        save_json(&self.store, name, &NoteContent::empty(name));
        self.notes = next;

        log!("added note {name:?} ({})", entry.id);
        nav.navigate_to(&note_path(name));
        Ok(entry)
    }

    /// Drops the note and its content, then moves to the newest remaining
    /// note (or the root when none is left).
    ///
    /// Removing an unknown name still clears any content stored under it.
    pub fn remove_note(&mut self, name: &str, nav: &impl Navigator) {
        let before = self.notes.len();
        self.notes.retain(|n| n.name != name);
        if self.notes.len() == before {
            warn!("removing note {name:?} that is not in the index");
        }

        write_note_list(&self.store, &self.notes);
        if !RESERVED_KEYS.contains(&name) {
            self.store.remove(name);
        }

        log!("removed note {name:?}");
        let target = self
            .notes
            .first()
            .map(|n| note_path(&n.name))
            .unwrap_or_else(|| ROOT_PATH.to_string());
        nav.navigate_to(&target);
    }

    /// Moves a note to a new name, keeping its id and content.
    pub fn rename_note(
        &mut self,
        old_name: &str,
        new_name: &str,
        nav: &impl Navigator,
    ) -> NotesResult<()> {
        check_name(new_name, &self.notes, Some(old_name))?;

        let Some(pos) = self.notes.iter().position(|n| n.name == old_name) else {
            return Err(NotesError::UnknownNote(old_name.to_string()));
        };
        let Some(content) = self.load_note(old_name) else {
            warn!("not renaming {old_name:?}: no content record to carry over");
            return Err(NotesError::MissingContent(old_name.to_string()));
        };

        if old_name != new_name {
            let mut next = self.notes.clone();
            next[pos].name = new_name.to_string();

            save_json(
                &self.store,
                new_name,
                &NoteContent {
                    name: new_name.to_string(),
                    value: content.value,
                },
            );
            write_note_list(&self.store, &next);
            self.store.remove(old_name);
            self.notes = next;

            log!("renamed note {old_name:?} to {new_name:?}");
        }

        nav.navigate_to(&note_path(new_name));
        Ok(())
    }

    /// Content of an indexed note.
    ///
    /// A missing or malformed record reads as `None`, as does any name that is
    /// not in the index.
    pub fn load_note(&self, name: &str) -> Option<NoteContent> {
        if !self.contains(name) {
            return None;
        }
        load_json::<NoteContent>(&self.store, name)
    }

    /// Editor write path. Only indexed notes can be written, so this never
    /// creates a content record without an index entry.
    pub fn save_note_value(&self, name: &str, value: &str) -> NotesResult<()> {
        if !self.contains(name) {
            return Err(NotesError::UnknownNote(name.to_string()));
        }
        save_json(
            &self.store,
            name,
            &NoteContent {
                name: name.to_string(),
                value: value.to_string(),
            },
        );
        Ok(())
    }
}
