use components::{
    toast::{Toast, ToastContainer, TOAST_DURATION_MS},
    trips_on_users_detail::TripsOnUsersDetail,
    trips_on_userses_cell::TripsOnUsersesCell,
};
use gloo_console::info;
use gloo_timers::callback::Timeout;
use trip_tracker_lib::notify::Notification;
use yew::prelude::*;
use yew_router::{prelude::Redirect, BrowserRouter, Routable, Switch};

mod api;
mod components;
mod format;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Default,
    #[at("/trips-on-userses")]
    TripsOnUserses,
    #[at("/trips-on-userses/{id}")]
    TripsOnUsers { id: i64 },
    #[at("/trips-on-userses/{id}/edit")]
    EditTripsOnUsers { id: i64 },
    #[not_found]
    #[at("/404")]
    Invalid,
}

enum MainMsg {
    Notify(Notification),
    Dismiss(u32),
}

struct Model {
    toasts: Vec<Toast>,
    next_toast_id: u32,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Notify(notification) => {
                info!(format!("Notification: {:?}", notification));
                let id = self.next_toast_id;
                self.next_toast_id = self.next_toast_id.wrapping_add(1);
                self.toasts.push(Toast { id, notification });

                let link = ctx.link().clone();
                Timeout::new(TOAST_DURATION_MS, move || link.send_message(MainMsg::Dismiss(id))).forget();
            }
            MainMsg::Dismiss(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link().clone();

        let notify = link.callback(MainMsg::Notify);
        let dismiss = link.callback(MainMsg::Dismiss);

        html! {
            <BrowserRouter>
                <ToastContainer toasts={self.toasts.clone()} dismiss={dismiss} />
                <main class="rw-main">
                    <Switch<Route> render={move |r| match r {
                        Route::Default => html! { <Redirect<Route> to={Route::TripsOnUserses} /> },
                        Route::TripsOnUserses => html! { <TripsOnUsersesCell notify={notify.clone()} /> },
                        Route::TripsOnUsers { id } => html! { <TripsOnUsersDetail id={id} /> },
                        Route::EditTripsOnUsers { id } => html! { <TripsOnUsersDetail id={id} editing={true} /> },
                        Route::Invalid => html! { <h1>{"Page not found"}</h1> },
                    }} />
                </main>
            </BrowserRouter>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
