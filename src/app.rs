use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::user::{User, UserField};
use crate::infra::http::member_source::HttpMemberSource;
use crate::ui::state::table_state::{update, TableEvent, TableState};
use crate::ui::styles::{
    checkbox_cell_style, delete_button_style, pagination_style, root_container_style, row_style,
    table_cell_style, table_container_style, table_header_cell_style, table_style, toolbar_style,
};
use crate::usecase::services::load_service::LoadService;

fn dispatch(mut table: Signal<TableState>, event: TableEvent) {
    let next = update(table.peek().clone(), event);
    table.set(next);
}

#[derive(Clone, Debug, PartialEq)]
struct RowView {
    user: User,
    selected: bool,
    editing: bool,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::default);
    let table = use_signal(|| TableState::new(&config));
    let endpoint = config.endpoint.clone();
    let loader = use_hook(move || Rc::new(LoadService::new(HttpMemberSource::new(endpoint))));

    use_future(move || {
        let loader = loader.clone();
        async move {
            let Some(result) = loader.load_once().await else {
                return;
            };
            let event = match result {
                Ok(users) => TableEvent::UsersLoaded(users),
                Err(err) => TableEvent::LoadFailed(err),
            };
            dispatch(table, event);
        }
    });

    let (rows, search, all_selected, page, last_page, can_previous, can_next) = {
        let state = table.read();
        let rows = state
            .visible_users()
            .into_iter()
            .map(|user| RowView {
                user: state.displayed(user),
                selected: state.is_selected(user.id),
                editing: state.is_editing(user.id),
            })
            .collect::<Vec<_>>();
        (
            rows,
            state.search.clone(),
            state.is_all_selected(),
            state.current_page,
            state.nav_total_pages(),
            state.can_go_previous(),
            state.can_go_next(),
        )
    };

    rsx! {
        div { style: "{root_container_style()}",
            div { style: "{toolbar_style()}",
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{search}",
                    oninput: move |event| dispatch(table, TableEvent::SearchChanged(event.value())),
                }
                button {
                    onclick: move |_| dispatch(table, TableEvent::SearchSubmitted),
                    "Search"
                }
            }

            div { style: "{table_container_style()}",
                table { style: "{table_style()}",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onclick: move |_| dispatch(table, TableEvent::AllToggled),
                                }
                            }
                            th { style: "{table_header_cell_style()}", "ID" }
                            for field in UserField::EDITABLE {
                                th { style: "{table_header_cell_style()}", "{field.label()}" }
                            }
                            th { style: "{table_header_cell_style()}", "Actions" }
                        }
                    }
                    tbody {
                        for row in rows {
                            UserRow {
                                key: "{row.user.id}",
                                user: row.user.clone(),
                                selected: row.selected,
                                editing: row.editing,
                                table,
                            }
                        }
                    }
                }
            }

            div { style: "{pagination_style()}",
                button {
                    onclick: move |_| dispatch(table, TableEvent::PageChanged(1)),
                    "First"
                }
                button {
                    disabled: !can_previous,
                    onclick: move |_| dispatch(table, TableEvent::PageChanged(page.saturating_sub(1))),
                    "Previous"
                }
                span { "{page}" }
                button {
                    disabled: !can_next,
                    onclick: move |_| dispatch(table, TableEvent::PageChanged(page + 1)),
                    "Next"
                }
                button {
                    onclick: move |_| dispatch(table, TableEvent::PageChanged(last_page)),
                    "Last"
                }
            }

            div {
                button {
                    style: "{delete_button_style()}",
                    onclick: move |_| dispatch(table, TableEvent::SelectedDeleted),
                    "Delete Selected"
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, selected: bool, editing: bool, table: Signal<TableState>) -> Element {
    let id = user.id;

    rsx! {
        tr { style: "{row_style(selected)}",
            td { style: "{checkbox_cell_style()}",
                input {
                    r#type: "checkbox",
                    checked: selected,
                    onclick: move |_| dispatch(table, TableEvent::RowToggled(id)),
                }
            }
            td { style: "{table_cell_style()}", "{id}" }
            for field in UserField::EDITABLE {
                td { style: "{table_cell_style()}",
                    if editing {
                        input {
                            r#type: "text",
                            value: "{field.value(&user)}",
                            oninput: move |event| {
                                dispatch(
                                    table,
                                    TableEvent::FieldChanged {
                                        id,
                                        field,
                                        value: event.value(),
                                    },
                                )
                            },
                        }
                    } else {
                        "{field.value(&user)}"
                    }
                }
            }
            td { style: "{table_cell_style()}",
                if editing {
                    button {
                        onclick: move |_| dispatch(table, TableEvent::EditSaved(id)),
                        "Save"
                    }
                    button {
                        onclick: move |_| dispatch(table, TableEvent::EditCancelled(id)),
                        "Cancel"
                    }
                } else {
                    button {
                        onclick: move |_| dispatch(table, TableEvent::EditStarted(id)),
                        "Edit"
                    }
                }
                button {
                    style: "{delete_button_style()}",
                    onclick: move |_| dispatch(table, TableEvent::RowDeleted(id)),
                    "Delete"
                }
            }
        }
    }
}
