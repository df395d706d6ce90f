use trip_tracker_lib::notify::{Notification, NotificationKind, Notifier};
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Forwards notifications to the toast container owned by the app root.
#[derive(Clone)]
pub struct CallbackNotifier(pub Callback<Notification>);

impl Notifier for CallbackNotifier {
    fn notify(&self, notification: Notification) {
        self.0.emit(notification);
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct ToastProps {
    pub toasts: Vec<Toast>,
    pub dismiss: Callback<u32>,
}

#[function_component]
pub fn ToastContainer(props: &ToastProps) -> Html {
    html! {
        <div class="rw-toasts">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = props.dismiss.reform(move |_: MouseEvent| id);
                let class = match toast.notification.kind {
                    NotificationKind::Success => "rw-toast rw-toast-success",
                    NotificationKind::Error => "rw-toast rw-toast-error",
                };
                html! {
                    <div key={id} class={class} role="status" onclick={onclick}>
                        { toast.notification.message.clone() }
                    </div>
                }
            }) }
        </div>
    }
}
