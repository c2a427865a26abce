use gala_core::{NotificationKind, Toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <ol class="toast-viewport">
            { for props.toasts.iter().map(|toast| {
                let kind = match toast.notification.kind {
                    NotificationKind::Info => "toast",
                    NotificationKind::Destructive => "toast destructive",
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };

                html! {
                    <li key={toast.id} class={kind}>
                        <div>
                            <div class="toast-title">{ toast.notification.title.clone() }</div>
                            <div class="toast-message">{ toast.notification.message.clone() }</div>
                        </div>
                        <button type="button" class="toast-close" {onclick}>{ "×" }</button>
                    </li>
                }
            }) }
        </ol>
    }
}
