mod app;
mod components;
mod config;
mod models;
mod notes;
mod pages;
mod state;
mod storage;
mod util;

pub use app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::models::TypingMode;
    use crate::notes::{NoteCollection, NotesError};
    use crate::state::{load_typing_mode, NotesContext};
    use crate::storage::{BrowserStorage, KeyValueStore, NOTE_LIST_KEY, TYPING_MODE_KEY};
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_local_storage() {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.clear();
        }
    }

    #[wasm_bindgen_test]
    fn test_browser_storage_roundtrip() {
        clear_local_storage();
        let store = BrowserStorage;

        assert!(store.get("k").is_none());
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[wasm_bindgen_test]
    fn test_collection_over_local_storage() {
        clear_local_storage();
        let seen = RefCell::new(Vec::new());
        let nav = |path: &str| seen.borrow_mut().push(path.to_string());

        let mut notes = NoteCollection::load(BrowserStorage);
        notes.add_note("first", &nav).expect("add first");
        notes.add_note("second", &nav).expect("add second");
        notes.save_note_value("first", "hello").expect("save");
        notes.rename_note("first", "renamed", &nav).expect("rename");

        let reloaded = NoteCollection::load(BrowserStorage);
        let names: Vec<&str> = reloaded.notes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["second", "renamed"]);
        assert_eq!(
            reloaded.load_note("renamed").map(|n| n.value).as_deref(),
            Some("hello")
        );
        assert!(BrowserStorage.get("first").is_none());
        assert_eq!(seen.borrow().last().map(String::as_str), Some("/note/renamed"));

        notes.remove_note("second", &nav);
        notes.remove_note("renamed", &nav);
        assert_eq!(BrowserStorage.get(NOTE_LIST_KEY).as_deref(), Some("[]"));
        assert_eq!(seen.borrow().last().map(String::as_str), Some("/"));
    }

    #[wasm_bindgen_test]
    fn test_notes_context_callbacks() {
        clear_local_storage();
        let ctx = NotesContext::new();
        let nav = |_: &str| {};

        let mut added = false;
        ctx.add_note("a", &nav, || added = true).expect("add");
        assert!(added);
        assert_eq!(ctx.notes.get_untracked().len(), 1);

        let mut called = false;
        let err = ctx
            .add_note("A", &nav, || called = true)
            .expect_err("duplicate should fail");
        assert!(matches!(err, NotesError::InvalidName(_)));
        assert!(!called);

        ctx.select_note(Some("a"));
        ctx.save_current_value("body".to_string()).expect("save");
        assert_eq!(
            ctx.current_note.get_untracked().map(|n| n.value).as_deref(),
            Some("body")
        );

        ctx.toggle_typing_mode();
        assert_eq!(BrowserStorage.get(TYPING_MODE_KEY).as_deref(), Some("read"));
        assert_eq!(load_typing_mode(&BrowserStorage), TypingMode::Read);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
