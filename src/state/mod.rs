use crate::config::EnvConfig;
use crate::models::{NoteContent, NoteListEntry, TypingMode};
use crate::notes::{Navigator, NoteCollection, NotesError, NotesResult};
use crate::storage::{BrowserStorage, KeyValueStore, TYPING_MODE_KEY};
use leptos::logging::warn;
use leptos::prelude::*;
use std::cell::RefCell;
use std::str::FromStr;

/// Reactive handle on the note collection, shared through context.
///
/// `notes` and `current_note` mirror the collection for rendering; every
/// mutation goes through the methods here so the mirror never drifts from
/// storage. Mutators invoke `on_success` only when the change was applied.
#[derive(Clone, Copy)]
pub(crate) struct NotesContext {
    collection: StoredValue<NoteCollection<BrowserStorage>>,

    /// Newest first.
    pub notes: RwSignal<Vec<NoteListEntry>>,

    /// Note addressed by the current route, when it exists.
    pub current_note: RwSignal<Option<NoteContent>>,

    pub typing_mode: RwSignal<TypingMode>,
}

impl NotesContext {
    pub fn new() -> Self {
        let collection = NoteCollection::load(BrowserStorage);
        let notes = collection.notes().to_vec();

        Self {
            collection: StoredValue::new(collection),
            notes: RwSignal::new(notes),
            current_note: RwSignal::new(None),
            typing_mode: RwSignal::new(load_typing_mode(&BrowserStorage)),
        }
    }

    fn sync_notes(&self) {
        let notes = self.collection.with_value(|c| c.notes().to_vec());
        self.notes.set(notes);
    }

    fn mutate<U>(
        &self,
        nav: &impl Navigator,
        f: impl FnOnce(&mut NoteCollection<BrowserStorage>, &DeferredNavigation) -> U,
    ) -> Option<U> {
        let deferred = DeferredNavigation::default();
        let mut out = None;
        self.collection.update_value(|c| out = Some(f(c, &deferred)));
        self.sync_notes();

        // Route effects read the collection, so navigate only after it is released.
        if let Some(path) = deferred.take() {
            nav.navigate_to(&path);
        }
        out
    }

    /// Re-reads the persisted index.
    pub fn reload(&self) {
        self.collection.update_value(|c| c.reload());
        self.sync_notes();
    }

    pub fn add_note(
        &self,
        name: &str,
        nav: &impl Navigator,
        on_success: impl FnOnce(),
    ) -> NotesResult<()> {
        complete(self.mutate(nav, |c, d| c.add_note(name, d)), on_success)
    }

    pub fn remove_note(&self, name: &str, nav: &impl Navigator, on_success: impl FnOnce()) {
        if self.mutate(nav, |c, d| c.remove_note(name, d)).is_some() {
            on_success();
        } else {
            warn!("notes context disposed; {name:?} was not removed");
        }
    }

    pub fn edit_note_name(
        &self,
        old_name: &str,
        new_name: &str,
        nav: &impl Navigator,
        on_success: impl FnOnce(),
    ) -> NotesResult<()> {
        complete(
            self.mutate(nav, |c, d| c.rename_note(old_name, new_name, d)),
            on_success,
        )
    }

    /// Points `current_note` at `name`; unknown or unreadable notes select nothing.
    pub fn select_note(&self, name: Option<&str>) {
        let note = name.and_then(|n| self.collection.with_value(|c| c.load_note(n)));
        self.current_note.set(note);
    }

    /// Persists new text for the current note.
    pub fn save_current_value(&self, value: String) -> NotesResult<()> {
        let Some(mut note) = self.current_note.get_untracked() else {
            return Ok(());
        };
        self.collection
            .with_value(|c| c.save_note_value(&note.name, &value))?;
        note.value = value;
        self.current_note.set(Some(note));
        Ok(())
    }

    pub fn toggle_typing_mode(&self) {
        let next = self.typing_mode.get_untracked().toggled();
        save_typing_mode(&BrowserStorage, next);
        self.typing_mode.set(next);
    }
}

impl Default for NotesContext {
    fn default() -> Self {
        Self::new()
    }
}

fn complete<U>(result: Option<NotesResult<U>>, on_success: impl FnOnce()) -> NotesResult<()> {
    match result {
        Some(Ok(_)) => {
            on_success();
            Ok(())
        }
        Some(Err(e)) => Err(e),
        None => {
            warn!("notes context disposed; change not applied");
            Err(NotesError::Unavailable)
        }
    }
}

/// Holds the last requested path until the caller replays it.
#[derive(Default)]
pub(crate) struct DeferredNavigation(RefCell<Option<String>>);

impl DeferredNavigation {
    fn take(&self) -> Option<String> {
        self.0.borrow_mut().take()
    }
}

impl Navigator for DeferredNavigation {
    fn navigate_to(&self, path: &str) {
        *self.0.borrow_mut() = Some(path.to_string());
    }
}

pub(crate) fn load_typing_mode(store: &impl KeyValueStore) -> TypingMode {
    store
        .get(TYPING_MODE_KEY)
        .and_then(|v| TypingMode::from_str(&v).ok())
        .unwrap_or_default()
}

pub(crate) fn save_typing_mode(store: &impl KeyValueStore, mode: TypingMode) {
    store.set(TYPING_MODE_KEY, mode.as_ref());
}

#[derive(Clone)]
pub(crate) struct AppContext {
    pub config: EnvConfig,

    /// Sidebar visibility on narrow screens.
    pub sidebar_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            config: EnvConfig::new(),
            sidebar_open: RwSignal::new(false),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_typing_mode_defaults_to_edit() {
        let store = MemoryStore::new();
        assert_eq!(load_typing_mode(&store), TypingMode::Edit);

        store.set(TYPING_MODE_KEY, "garbage");
        assert_eq!(load_typing_mode(&store), TypingMode::Edit);
    }

    #[test]
    fn test_typing_mode_persists() {
        let store = MemoryStore::new();
        save_typing_mode(&store, TypingMode::Read);
        assert_eq!(store.get(TYPING_MODE_KEY).as_deref(), Some("read"));
        assert_eq!(load_typing_mode(&store), TypingMode::Read);
    }

    #[test]
    fn test_deferred_navigation_keeps_last_path() {
        let d = DeferredNavigation::default();
        assert!(d.take().is_none());
        d.navigate_to("/note/a");
        d.navigate_to("/note/b");
        assert_eq!(d.take().as_deref(), Some("/note/b"));
        assert!(d.take().is_none());
    }

    #[test]
    fn test_complete_runs_callback_only_on_success() {
        use crate::notes::NoteNameError;

        let mut called = false;
        assert!(complete(Some(Ok::<_, NotesError>(1)), || called = true).is_ok());
        assert!(called);

        let mut called = false;
        let err = complete(
            Some(Err::<(), _>(NotesError::InvalidName(NoteNameError::Taken))),
            || called = true,
        );
        assert!(err.is_err());
        assert!(!called);
    }

    #[test]
    fn test_complete_disposed_context_reports_failure() {
        let mut called = false;
        let result = complete(None::<NotesResult<()>>, || called = true);
        assert_eq!(result, Err(NotesError::Unavailable));
        assert!(!called);
    }
}
