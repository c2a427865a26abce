use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoDialogProps {
    pub open: bool,
    pub name: String,
    pub email: String,
    pub on_name: Callback<String>,
    pub on_email: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_dismiss: Callback<()>,
}

/// Buyer details form shown after a ticket is picked
#[function_component(InfoDialog)]
pub fn info_dialog(props: &InfoDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_name_input = {
        let on_name = props.on_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name.emit(input.value());
        })
    };

    let on_email_input = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // Keep clicks inside the dialog from reaching the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop.clone()}>
            <div class="dialog" role="dialog" onclick={stop}>
                <button type="button" class="dialog-close" onclick={on_backdrop}>{ "×" }</button>
                <div class="dialog-header">
                    <h2>{ "Enter Your Information" }</h2>
                    <p>{ "Please provide your name and email to proceed with the ticket purchase." }</p>
                </div>
                <form {onsubmit}>
                    <div class="dialog-fields">
                        <label for="name">{ "Name" }</label>
                        <input
                            id="name"
                            value={props.name.clone()}
                            oninput={on_name_input}
                            placeholder="Enter your full name"
                        />
                        <label for="email">{ "Email" }</label>
                        <input
                            id="email"
                            type="email"
                            value={props.email.clone()}
                            oninput={on_email_input}
                            placeholder="Enter your email address"
                        />
                    </div>
                    <div class="dialog-footer">
                        <button type="submit">{ "Proceed to Payment" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
