//! Modal dialog for creating and editing a student record.

use leptos::prelude::*;

use crate::net::api;
use crate::state::editor::{EditorMode, EditorState};
use crate::state::session::SessionState;
use crate::util::notify;

/// Add/edit modal bound to [`EditorState`].
///
/// Submitting posts the validated form as a create or update request.
/// Success closes the dialog and runs `on_saved` so the table refetches;
/// failure keeps the dialog open with the entered values and surfaces
/// the generic authorization message.
#[component]
pub fn StudentEditor(on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    // Local validation failure, shown inline above the buttons.
    let form_error = RwSignal::new(None::<String>);

    let on_cancel = Callback::new(move |()| {
        form_error.set(None);
        editor.update(|e| e.close());
    });

    let submit = Callback::new(move |()| {
        let state = editor.get_untracked();
        let draft = match state.form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(token) = session.get_untracked().token().map(ToOwned::to_owned) else {
            return;
        };
        form_error.set(None);

        leptos::task::spawn_local(async move {
            let outcome = match state.mode {
                EditorMode::Create => api::add_student(&token, &draft)
                    .await
                    .map(|()| "Student added successfully!"),
                EditorMode::Edit => {
                    let Some(id) = state.editing_id else {
                        return;
                    };
                    api::update_student(&token, id, &draft)
                        .await
                        .map(|()| "Student updated successfully!")
                }
            };

            match outcome {
                Ok(message) => {
                    editor.update(|e| e.close());
                    notify::alert(message);
                    on_saved.run(());
                }
                Err(e) => {
                    // Dialog stays open with the entered values.
                    leptos::logging::warn!("student save failed: {e}");
                    notify::alert("Authorization error: Need admin access.");
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(());
    };

    let title = move || match editor.get().mode {
        EditorMode::Create => "Add New Student",
        EditorMode::Edit => "Edit Student",
    };

    let submit_label = move || match editor.get().mode {
        EditorMode::Create => "Add Student",
        EditorMode::Edit => "Save Changes",
    };

    let id_disabled = move || editor.get().mode == EditorMode::Edit;

    view! {
        <Show when=move || editor.get().open>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>{title}</h2>

                    <form class="dialog__form" on:submit=on_submit>
                        <label class="dialog__label">
                            "ID"
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder="ID"
                                prop:value=move || editor.get().form.id
                                prop:disabled=id_disabled
                                on:input=move |ev| {
                                    editor.update(|e| e.form.id = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "NAME"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="NAME"
                                required=true
                                prop:value=move || editor.get().form.name
                                on:input=move |ev| {
                                    editor.update(|e| e.form.name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "ROLL NO"
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder="ROLL NO"
                                required=true
                                prop:value=move || editor.get().form.roll_no
                                on:input=move |ev| {
                                    editor.update(|e| e.form.roll_no = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "AGE"
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder="AGE"
                                required=true
                                prop:value=move || editor.get().form.age
                                on:input=move |ev| {
                                    editor.update(|e| e.form.age = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "GRADE"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="GRADE"
                                required=true
                                prop:value=move || editor.get().form.grade
                                on:input=move |ev| {
                                    editor.update(|e| e.form.grade = event_target_value(&ev));
                                }
                            />
                        </label>

                        {move || {
                            form_error
                                .get()
                                .map(|msg| view! { <div class="dialog__error">{msg}</div> })
                        }}

                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit">
                                {submit_label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
