use gloo_console::error;
use trip_tracker_lib::{
    error::ClientError,
    format::format_field,
    table::ListRecord,
    trips_on_users::TripsOnUsers,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, format::cell_html, Route};

#[derive(PartialEq, Properties, Clone)]
pub struct DetailProps {
    pub id: i64,
    #[prop_or_default]
    pub editing: bool,
}

/// Single record view behind the show and edit routes.
#[function_component]
pub fn TripsOnUsersDetail(props: &DetailProps) -> Html {
    let record = use_state(|| None::<Result<Option<TripsOnUsers>, ClientError>>);

    {
        let record = record.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            record.set(None);
            spawn_local(async move {
                let result = api::get_trips_on_users(id).await;
                if let Err(err) = &result {
                    error!(format!("Failed to load tripsOnUsers {id}: {err}"));
                }
                record.set(Some(result));
            });
            || ()
        });
    }

    let id = props.id;
    let heading = if props.editing {
        format!("Edit {} {id}", TripsOnUsers::DISPLAY_NAME)
    } else {
        format!("{} {id} Detail", TripsOnUsers::DISPLAY_NAME)
    };

    let body = match &*record {
        None => html! { <div>{"Loading..."}</div> },
        Some(Err(err)) => html! { <div class="rw-cell-error">{ err.to_string() }</div> },
        Some(Ok(None)) => html! { <div>{ format!("{} not found", TripsOnUsers::DISPLAY_NAME) }</div> },
        Some(Ok(Some(record))) => html! {
            <table class="rw-table">
                <tbody>
                    { for TripsOnUsers::COLUMNS.iter().zip(record.fields()).map(|(column, value)| html! {
                        <tr>
                            <th>{ *column }</th>
                            <td>{ cell_html(&format_field(&value)) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="rw-segment">
            <header class="rw-segment-header">
                <h2 class="rw-heading rw-heading-secondary">{ heading }</h2>
            </header>
            { body }
            <nav class="rw-button-group">
                if !props.editing {
                    <Link<Route> to={Route::EditTripsOnUsers { id }} classes={classes!("rw-button", "rw-button-blue")}>
                        {"Edit"}
                    </Link<Route>>
                }
                <Link<Route> to={Route::TripsOnUserses} classes={classes!("rw-button")}>
                    {"Back"}
                </Link<Route>>
            </nav>
        </div>
    }
}
