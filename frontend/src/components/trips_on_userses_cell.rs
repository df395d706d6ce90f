use gloo_console::{error, info};
use trip_tracker_lib::{error::ClientError, notify::Notification, trips_on_users::TripsOnUsers};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api, components::trips_on_userses_list::TripsOnUsersesList};

pub enum CellMsg {
    Loaded(Result<Vec<TripsOnUsers>, ClientError>),
}

enum CellState {
    Loading,
    Failure(ClientError),
    Success(Vec<TripsOnUsers>),
}

/// Runs the list query and renders whatever state it is in.
pub struct TripsOnUsersesCell {
    state: CellState,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub notify: Callback<Notification>,
}

impl Component for TripsOnUsersesCell {
    type Message = CellMsg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let cb = ctx.link().callback(CellMsg::Loaded);
        spawn_local(async move {
            cb.emit(api::get_trips_on_userses().await);
        });

        Self {
            state: CellState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CellMsg::Loaded(Ok(records)) => {
                info!(format!("Loaded {} tripsOnUserses", records.len()));
                self.state = CellState::Success(records);
            }
            CellMsg::Loaded(Err(err)) => {
                error!(format!("Failed to load tripsOnUserses: {err}"));
                self.state = CellState::Failure(err);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            CellState::Loading => html! { <div>{"Loading..."}</div> },
            CellState::Failure(err) => html! {
                <div class="rw-cell-error">{ err.to_string() }</div>
            },
            CellState::Success(records) if records.is_empty() => html! {
                <div class="rw-text-center">{"No tripsOnUserses yet."}</div>
            },
            CellState::Success(records) => html! {
                <TripsOnUsersesList
                    trips_on_userses={records.clone()}
                    notify={ctx.props().notify.clone()}
                    on_loaded={ctx.link().callback(CellMsg::Loaded)}
                />
            },
        }
    }
}
