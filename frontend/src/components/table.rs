//! Generic record table
//!
//! Headers come from the table id, rows from the model. Loading, failure and
//! empty states replace the body.

use crate::context::use_dash;
use gymdash::render::columns;
use gymdash::{LoadStatus, TableId};
use leptos::prelude::*;

/// A button at the end of every keyed row
#[derive(Clone, Copy)]
pub struct RowAction {
    pub label: &'static str,
    pub on_click: Callback<u64>,
}

#[derive(Clone, PartialEq)]
struct TableData {
    rows: Vec<Vec<String>>,
    keys: Vec<Option<u64>>,
    status: LoadStatus,
}

#[component]
pub fn DataTable(
    table: TableId,
    title: &'static str,
    #[prop(optional)] action: Option<RowAction>,
) -> impl IntoView {
    let ctx = use_dash();
    let data = Memo::new(move |_| {
        ctx.model.with(|m| TableData {
            rows: m.rows(table).to_vec(),
            keys: m.keys(table).to_vec(),
            status: m.table_status(table),
        })
    });

    let headers = columns(table);
    let width = (headers.len() + usize::from(action.is_some())).to_string();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <h3 class="card-title px-6 pt-6 pb-2">{title}</h3>
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                                {action.map(|_| view! { <th></th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {move || render_body(data.get(), width.clone(), action)}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn message_row(width: String, class: &'static str, content: AnyView) -> AnyView {
    view! {
        <tr>
            <td colspan=width class=class>{content}</td>
        </tr>
    }
    .into_any()
}

fn render_body(data: TableData, width: String, action: Option<RowAction>) -> AnyView {
    const MUTED: &str = "text-center py-8 text-base-content/50";

    match data.status {
        LoadStatus::Loading => message_row(
            width,
            MUTED,
            view! { <span class="loading loading-spinner loading-md"></span> " Loading..." }.into_any(),
        ),
        LoadStatus::Failed(message) => {
            message_row(width, "text-center py-8 text-error", message.into_any())
        }
        _ if data.rows.is_empty() => message_row(width, MUTED, "No data".into_any()),
        _ => data
            .rows
            .into_iter()
            .zip(data.keys)
            .map(|(cells, key)| {
                let button = action.zip(key).map(|(action, id)| {
                    view! {
                        <td>
                            <button
                                class="btn btn-sm btn-primary"
                                on:click=move |_| action.on_click.run(id)
                            >
                                {action.label}
                            </button>
                        </td>
                    }
                });
                view! {
                    <tr>
                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                        {button}
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    }
}
