use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Input};
use crate::models::{NoteListEntry, TypingMode};
use crate::notes::{note_name_from_path, note_path};
use crate::state::{AppContext, NotesContext};
use icons::{Check, Menu, Plus, X};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen::JsCast;

/// Note list on the left, editor for the routed note on the right.
///
/// Serves both `/` and `/note/:note_name`; the selected note is derived from
/// the path on every navigation and whenever the index changes.
#[component]
pub fn HomePage() -> impl IntoView {
    let notes = expect_context::<NotesContext>();
    let location = use_location();

    Effect::new(move |_| {
        notes.notes.track();
        let name = note_name_from_path(&location.pathname.get());
        notes.select_note(name.as_deref());
    });

    view! {
        <div class="flex min-h-screen bg-background text-foreground">
            <SideBar />
            <main class="min-w-0 flex-1 px-4 py-6 md:px-8">
                <NoteEditor />
            </main>
        </div>
    }
}

#[component]
pub fn SideBar() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let notes = expect_context::<NotesContext>();
    let location = use_location();

    let open = app.sidebar_open;
    let add_mode: RwSignal<bool> = RwSignal::new(false);
    let active_name = Memo::new(move |_| note_name_from_path(&location.pathname.get()));

    let toggle_sidebar = move |_| {
        let next = !open.get_untracked();
        if next {
            notes.reload();
        }
        open.set(next);
    };

    let toggle_add = move |_| {
        notes.reload();
        add_mode.update(|v| *v = !*v);
    };

    let title = app.config.app_title.clone();

    // Renames keep the id, so the name must be part of the key.
    let note_key = |n: &NoteListEntry| (n.id.clone(), n.name.clone());

    view! {
        <button
            class="sidebar-toggle fixed left-3 top-3 z-20 rounded-md p-2 hover:bg-accent md:hidden"
            aria-label="Toggle notes list"
            on:click=toggle_sidebar
        >
            <Menu class="size-5" />
        </button>

        <aside class=move || {
            let base = "sidebar-wrapper fixed inset-y-0 left-0 z-10 w-64 shrink-0 border-r bg-card px-4 pt-14 pb-6 transition-transform duration-200 md:static md:translate-x-0 md:pt-6";
            if open.get() {
                format!("{base} translate-x-0")
            } else {
                format!("{base} -translate-x-full")
            }
        }>
            <div class="sidebar-container flex flex-col gap-4">
                <h1 class="text-lg font-semibold">{title}</h1>

                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=toggle_add>
                    <Plus />
                    "Add note"
                </Button>

                <Show when=move || add_mode.get() fallback=|| ().into_view()>
                    <AddNote on_done=Callback::new(move |_| add_mode.set(false)) />
                </Show>

                <nav class="links-container flex flex-col gap-1">
                    <For
                        each=move || notes.notes.get()
                        key=note_key
                        children=move |note: NoteListEntry| {
                            let href = note_path(&note.name);
                            let name = note.name.clone();
                            let class = move || {
                                let active = active_name.with(|a| a.as_deref() == Some(name.as_str()));
                                if active {
                                    "active-item truncate rounded-md bg-accent px-2 py-1 text-sm font-medium"
                                } else {
                                    "truncate rounded-md px-2 py-1 text-sm text-muted-foreground hover:bg-accent/50"
                                }
                            };
                            view! {
                                <a href=href class=class on:click=move |_| open.set(false)>
                                    {note.name}
                                </a>
                            }
                        }
                    />
                </nav>

                <Show when=move || notes.notes.with(|n| n.is_empty()) fallback=|| ().into_view()>
                    <div class="text-xs text-muted-foreground">"No notes yet."</div>
                </Show>
            </div>
        </aside>
    }
}

/// Name prompt for a new note. `on_done` fires once the note exists, or on cancel.
#[component]
pub fn AddNote(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let notes = expect_context::<NotesContext>();
    let navigate = StoredValue::new(use_navigate());

    let name: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let submit = move || {
        let go = move |path: &str| navigate.with_value(|nav| nav(path, Default::default()));
        let candidate = name.get_untracked();
        if let Err(e) = notes.add_note(&candidate, &go, || on_done.run(())) {
            error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="flex flex-col gap-2">
            <Input
                bind_value=name
                placeholder="Note name"
                autofocus=true
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    } else if ev.key() == "Escape" {
                        on_done.run(());
                    }
                }
            />
            <ErrorNotice error=error />
            <div class="flex gap-2">
                <Button size=ButtonSize::Sm on:click=move |_| submit()>"Add"</Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on:click=move |_| on_done.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ErrorNotice(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <Alert>
                    <AlertDescription>{e}</AlertDescription>
                </Alert>
            }
        })
    }
}

#[component]
pub fn NoteEditor() -> impl IntoView {
    let notes = expect_context::<NotesContext>();
    let navigate = StoredValue::new(use_navigate());

    let current_name = Memo::new(move |_| {
        notes
            .current_note
            .with(|n| n.as_ref().map(|n| n.name.clone()))
    });
    let current_value = move || {
        notes
            .current_note
            .with(|n| n.as_ref().map(|n| n.value.clone()))
            .unwrap_or_default()
    };

    let rename_value: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    // Reset the title field when a different note is selected.
    Effect::new(move |_| {
        rename_value.set(current_name.get().unwrap_or_default());
        error.set(None);
    });

    let go = move |path: &str| navigate.with_value(|nav| nav(path, Default::default()));

    let commit_rename = move || {
        let Some(old_name) = current_name.get_untracked() else {
            return;
        };
        let new_name = rename_value.get_untracked();
        if let Err(e) = notes.edit_note_name(&old_name, &new_name, &go, || error.set(None)) {
            error.set(Some(e.to_string()));
        }
    };

    let delete_current = move |_| {
        if let Some(name) = current_name.get_untracked() {
            notes.remove_note(&name, &go, || error.set(None));
        }
    };

    let on_text_input = move |ev: web_sys::Event| {
        if let Some(t) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            if let Err(e) = notes.save_current_value(t.value()) {
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show
            when=move || current_name.get().is_some()
            fallback=|| view! {
                <div class="px-4 py-8 text-sm text-muted-foreground">
                    "Select a note or add a new one."
                </div>
            }
        >
            <div class="mx-auto flex max-w-3xl flex-col gap-4">
                <div class="flex items-center gap-2">
                    <Input
                        bind_value=rename_value
                        class="h-10 min-w-0 flex-1 text-lg font-semibold"
                        placeholder="Note name"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_rename();
                            }
                        }
                    />
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Rename note"
                        on:click=move |_| commit_rename()
                    >
                        <Check />
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=move |_| notes.toggle_typing_mode()
                    >
                        {move || match notes.typing_mode.get() {
                            TypingMode::Edit => "Read",
                            TypingMode::Read => "Edit",
                        }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        size=ButtonSize::Icon
                        attr:title="Delete note"
                        on:click=delete_current
                    >
                        <X />
                    </Button>
                </div>

                <ErrorNotice error=error />

                <Show
                    when=move || notes.typing_mode.get() == TypingMode::Edit
                    fallback=move || view! {
                        <div class="min-h-[60vh] rounded-md border bg-card p-4 text-sm">
                            {move || {
                                current_value()
                                    .lines()
                                    .map(|line| view! {
                                        <p class="min-h-5 whitespace-pre-wrap">{line.to_string()}</p>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                >
                    <textarea
                        class="min-h-[60vh] w-full resize-y rounded-md border border-input bg-transparent p-4 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50"
                        placeholder="Start typing…"
                        prop:value=current_value
                        on:input=on_text_input
                    ></textarea>
                </Show>
            </div>
        </Show>
    }
}
