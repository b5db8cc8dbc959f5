//! Student table with search, sort, selection, paging, and row actions.
//!
//! DESIGN
//! ======
//! All list state lives in `RosterState`; this component only wires
//! events to its methods and owns the single `refresh` command that
//! issues the fetch. Mutating actions (sort, page, search, delete,
//! editor save) call `refresh` explicitly, so every network round trip
//! has a visible call site. A failed read is logged and the previous
//! page stays on screen.

use leptos::prelude::*;

use crate::components::student_editor::StudentEditor;
use crate::net::api;
use crate::state::editor::EditorState;
use crate::state::roster::{RosterState, SortField};
use crate::state::session::SessionState;
use crate::util::{csv, notify};

/// Student table view: search/action row, sortable table with radio
/// selection, pagination, and the add/edit modal.
#[component]
pub fn StudentTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let roster = expect_context::<RwSignal<RosterState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    // Draft filter inputs; they reach the query only on search submit.
    let name_input = RwSignal::new(String::new());
    let grade_input = RwSignal::new(String::new());

    // The one fetch command. Reads are untracked: refreshes happen when
    // an action asks for one, never as a reactive side effect.
    let refresh = Callback::new(move |()| {
        let Some(token) = session.get_untracked().token().map(ToOwned::to_owned) else {
            return;
        };
        let query = roster.get_untracked().query.clone();
        roster.update(|r| r.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_students(&token, &query).await {
                Ok(page) => roster.update(|r| r.apply_page(page)),
                Err(e) => {
                    // Stale-but-available: keep showing the last page.
                    leptos::logging::warn!("student list fetch failed: {e}");
                    roster.update(|r| r.loading = false);
                }
            }
        });
    });

    // Initial page load; everything after this is an explicit refresh.
    Effect::new(move || refresh.run(()));

    let on_sort = Callback::new(move |field: SortField| {
        roster.update(|r| r.sort_by(field));
        refresh.run(());
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        roster.update(|r| r.search(name_input.get_untracked(), grade_input.get_untracked()));
        refresh.run(());
    };

    let go_to_page = move |n: u32| {
        let changed = roster.try_update(|r| r.set_page(n)).unwrap_or(false);
        if changed {
            refresh.run(());
        }
    };

    let on_prev = move |_| {
        let page = roster.get_untracked().query.page;
        go_to_page(page.saturating_sub(1));
    };

    let on_next = move |_| {
        let page = roster.get_untracked().query.page;
        go_to_page(page + 1);
    };

    let on_add = move |_| editor.update(|e| e.open_for_create());

    let on_edit = move |_| {
        let state = roster.get_untracked();
        if let Some(record) = state.selected_record() {
            editor.update(|e| e.open_for_edit(record));
        } else {
            notify::alert("Please select a student first!");
        }
    };

    let on_delete = move |_| {
        let Some(id) = roster.get_untracked().selected_id else {
            notify::alert("Please select a student first!");
            return;
        };
        let Some(token) = session.get_untracked().token().map(ToOwned::to_owned) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_student(&token, id).await {
                Ok(()) => {
                    notify::alert("Student deleted successfully!");
                    refresh.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("student delete failed: {e}");
                    notify::alert("Authorization error: Need admin access.");
                }
            }
        });
    };

    let on_csv = move |_| {
        let records = roster.get_untracked().records;
        if records.is_empty() {
            notify::alert("No data to download!");
            return;
        }
        let content = csv::page_to_csv(&records);
        let filename = csv::export_filename(&csv::current_date());
        csv::download(&filename, &content);
    };

    view! {
        <div class="student-table" class:student-table--loading=move || roster.get().loading>
            <div class="student-table__controls">
                <form class="student-table__search" on:submit=on_search>
                    <input
                        class="student-table__filter"
                        type="text"
                        placeholder="Search by name"
                        prop:value=move || name_input.get()
                        on:input=move |ev| name_input.set(event_target_value(&ev))
                    />
                    <input
                        class="student-table__filter"
                        type="text"
                        placeholder="Filter by grade"
                        prop:value=move || grade_input.get()
                        on:input=move |ev| grade_input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Search"
                    </button>
                </form>

                <div class="student-table__actions">
                    <button class="btn btn--success" on:click=on_add>
                        "+ Add Student"
                    </button>
                    <button class="btn btn--primary" on:click=on_edit>
                        "Edit Selected"
                    </button>
                    <button class="btn btn--danger" on:click=on_delete>
                        "Delete Selected"
                    </button>
                    <button class="btn btn--info" on:click=on_csv>
                        "Download CSV"
                    </button>
                </div>
            </div>

            <table class="student-table__table">
                <thead>
                    <tr>
                        <th class="student-table__radio-col"></th>
                        {SortField::ALL
                            .into_iter()
                            .map(|field| {
                                let indicator = move || {
                                    let query = roster.get().query;
                                    if query.sort_by == field { query.sort_order.arrow() } else { "" }
                                };
                                view! {
                                    <th
                                        class="student-table__sort"
                                        on:click=move |_| on_sort.run(field)
                                    >
                                        {field.label()}
                                        " "
                                        {indicator}
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = roster.get();
                        if state.records.is_empty() {
                            view! {
                                <tr>
                                    <td class="student-table__empty" colspan="6">
                                        "No student data available"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            state
                                .records
                                .into_iter()
                                .map(|record| {
                                    let id = record.id;
                                    let selected = move || {
                                        roster.get().selected_id == Some(id)
                                    };
                                    view! {
                                        <tr
                                            class="student-table__row"
                                            class:student-table__row--selected=selected
                                            on:click=move |_| roster.update(|r| r.select(id))
                                        >
                                            <td class="student-table__radio-col">
                                                <input
                                                    type="radio"
                                                    name="selected-student"
                                                    prop:checked=selected
                                                    on:change=move |_| roster.update(|r| r.select(id))
                                                />
                                            </td>
                                            <td>{record.id}</td>
                                            <td class="student-table__name">{record.name}</td>
                                            <td>{record.roll_no}</td>
                                            <td>{record.age}</td>
                                            <td class="student-table__grade">{record.grade}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>

            <div class="student-table__paging">
                <p class="student-table__page-info">
                    {move || {
                        let state = roster.get();
                        format!(
                            "Page {} of {} ({} records)",
                            state.query.page,
                            state.total_pages(),
                            state.total_records,
                        )
                    }}
                </p>
                <div class="student-table__pager">
                    <button
                        class="btn btn--outline"
                        prop:disabled=move || roster.get().query.page <= 1
                        on:click=on_prev
                    >
                        "Previous"
                    </button>
                    <span class="student-table__page-chip">
                        {move || roster.get().query.page}
                    </span>
                    <button
                        class="btn btn--outline"
                        prop:disabled=move || {
                            let state = roster.get();
                            state.query.page >= state.total_pages()
                        }
                        on:click=on_next
                    >
                        "Next"
                    </button>
                </div>
            </div>

            <StudentEditor on_saved=refresh/>
        </div>
    }
}
