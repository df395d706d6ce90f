use async_trait::async_trait;
use gloo_console::info;
use gloo_utils::window;
use trip_tracker_lib::{
    delete::{ConfirmPrompt, DeleteWorkflow, QueryRefetch},
    error::ClientError,
    notify::Notification,
    table::render_table,
    trips_on_users::TripsOnUsers,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::{hooks::use_navigator, Routable};

use crate::{
    api::{self, GraphQlClient},
    components::toast::CallbackNotifier,
    format::cell_html,
    Route,
};

/// The browser's blocking `confirm()` dialog.
pub struct WindowConfirm;

impl ConfirmPrompt for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }
}

/// Reruns the list query and hands the result back to the cell.
struct ListRefetch {
    on_loaded: Callback<Result<Vec<TripsOnUsers>, ClientError>>,
}

#[async_trait(?Send)]
impl QueryRefetch for ListRefetch {
    async fn refetch(&self) -> Result<(), ClientError> {
        let records = api::get_trips_on_userses().await?;
        self.on_loaded.emit(Ok(records));
        Ok(())
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct ListProps {
    pub trips_on_userses: Vec<TripsOnUsers>,
    pub notify: Callback<Notification>,
    pub on_loaded: Callback<Result<Vec<TripsOnUsers>, ClientError>>,
}

#[function_component]
pub fn TripsOnUsersesList(props: &ListProps) -> Html {
    let navigator = use_navigator();

    let on_delete_click = {
        let notify = props.notify.clone();
        let on_loaded = props.on_loaded.clone();
        Callback::from(move |id: i64| {
            let notifier = CallbackNotifier(notify.clone());
            let refetch = ListRefetch {
                on_loaded: on_loaded.clone(),
            };
            spawn_local(async move {
                let mut workflow = DeleteWorkflow::<TripsOnUsers, _, _, _>::new(GraphQlClient, refetch, notifier);
                let outcome = workflow.run(id, &WindowConfirm).await;
                info!(format!("Delete tripsOnUsers {id}: {outcome:?}"));
            });
        })
    };

    let link_to = move |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(navigator) = &navigator {
                e.prevent_default();
                navigator.push(&route);
            }
        })
    };

    let table = match render_table(&props.trips_on_userses) {
        Ok(table) => table,
        Err(err) => return html! { <div class="rw-cell-error">{ err.to_string() }</div> },
    };

    html! {
        <div class="rw-segment rw-table-wrapper-responsive">
            <table class="rw-table">
                <thead>
                    <tr>
                        { for table.headers.iter().map(|header| html! { <th>{ *header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.into_iter().map(|row| {
                        let id = row.actions.id;
                        let show = Route::TripsOnUsers { id };
                        let edit = Route::EditTripsOnUsers { id };
                        let show_href = show.to_path();
                        let edit_href = edit.to_path();
                        html! {
                            <tr key={row.key}>
                                { for row.cells.iter().map(|cell| html! { <td>{ cell_html(cell) }</td> }) }
                                <td>
                                    <nav class="rw-table-actions">
                                        <a
                                            href={show_href}
                                            title={row.actions.show_title}
                                            class="rw-button rw-button-small"
                                            onclick={link_to(show)}
                                        >
                                            {"Show"}
                                        </a>
                                        <a
                                            href={edit_href}
                                            title={row.actions.edit_title}
                                            class="rw-button rw-button-small rw-button-blue"
                                            onclick={link_to(edit)}
                                        >
                                            {"Edit"}
                                        </a>
                                        <button
                                            type="button"
                                            title={row.actions.delete_title}
                                            class="rw-button rw-button-small rw-button-red"
                                            onclick={on_delete_click.reform(move |_: MouseEvent| id)}
                                        >
                                            {"Delete"}
                                        </button>
                                    </nav>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
