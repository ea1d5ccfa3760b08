use crate::pages::HomePage;
use crate::state::{AppContext, NotesContext};
use crate::storage::NOTE_LIST_KEY;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks (`use_location`, `use_navigate`) require a <Router> context.
    view! {
        <Router>
            <NotesProvider>
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("note/:note_name") view=HomePage />
                    <Route path=path!("") view=HomePage />
                </Routes>
            </NotesProvider>
        </Router>
    }
}

/// Loads the note collection from localStorage and shares it with `children`.
#[component]
pub fn NotesProvider(children: Children) -> impl IntoView {
    let notes = NotesContext::new();
    provide_context(notes);

    // Another tab rewrote the index, or cleared storage entirely (`key` is null).
    let handle = window_event_listener(ev::storage, move |e| {
        let touches_index = e.key().map_or(true, |k| k == NOTE_LIST_KEY);
        if touches_index {
            notes.reload();
        }
    });
    on_cleanup(move || handle.remove());

    children()
}
