use chrono::Utc;
use gala_catalog::TicketTier;
use gala_core::{CheckoutAction, PaymentWidget, WidgetEvent};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::{
    CountdownTimer, Footer, Header, Highlights, InfoDialog, TicketGallery, ToastViewport,
};
use crate::state::{PageAction, PageState, WidgetCommand};
use crate::widget::FlutterwaveWidget;

fn checkout(action: CheckoutAction) -> PageAction {
    PageAction::Checkout(action, Utc::now())
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PageState::default);
    let dispatcher = state.dispatcher();

    let widget = {
        let dispatcher = dispatcher.clone();
        use_memo((), move |_| {
            let on_event = Callback::from(move |event: WidgetEvent| {
                dispatcher.dispatch(checkout(CheckoutAction::Widget(event)));
            });
            FlutterwaveWidget::new(on_event)
        })
    };

    // Host-served settings replace the built-in ones when available
    {
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_site_settings().await {
                    Ok(settings) => dispatcher.dispatch(PageAction::SettingsLoaded(settings)),
                    Err(err) => warn!("Using built-in site settings: {}", err),
                }
            });
        });
    }

    // Run widget commands queued by the last transitions
    {
        let state = state.clone();
        let widget: Rc<FlutterwaveWidget> = widget.clone();
        let dispatcher = dispatcher.clone();
        use_effect_with(state.outbox_seq, move |_| {
            for command in state.take_widget_commands() {
                match command {
                    WidgetCommand::Launch(config) => {
                        if let Err(err) = widget.launch(&config) {
                            dispatcher.dispatch(checkout(CheckoutAction::WidgetUnavailable(
                                err.to_string(),
                            )));
                        }
                    }
                    WidgetCommand::Close => widget.close(),
                }
            }
        });
    }

    // Auto-dismiss the newest toast
    {
        let dispatcher = dispatcher.clone();
        let latest = state.toaster.latest().map(|toast| toast.id);
        let millis = state.toaster.duration().num_milliseconds().max(0) as u32;
        use_effect_with(latest, move |latest| {
            let timeout = latest.map(|_| {
                Timeout::new(millis, move || {
                    dispatcher.dispatch(PageAction::ExpireToasts(Utc::now()));
                })
            });
            move || drop(timeout)
        });
    }

    let on_select = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |tier: TicketTier| {
            dispatcher.dispatch(checkout(CheckoutAction::SelectTicket(tier)))
        })
    };
    let on_name = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |name: String| {
            dispatcher.dispatch(checkout(CheckoutAction::EditName(name)))
        })
    };
    let on_email = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |email: String| {
            dispatcher.dispatch(checkout(CheckoutAction::EditEmail(email)))
        })
    };
    let on_submit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(checkout(CheckoutAction::Submit)))
    };
    let on_dismiss = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(checkout(CheckoutAction::DismissOverlay)))
    };
    let on_toast_dismiss = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: u64| dispatcher.dispatch(PageAction::DismissToast(id)))
    };

    let intent = state.checkout.intent();
    let event = &state.event;

    html! {
        <div class="page">
            <Header />

            <main>
                <section class="hero">
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <h1>{ event.title.clone() }</h1>
                        <p class="tagline">{ event.tagline.clone() }</p>
                        <CountdownTimer target={event.starts_at} />
                        <div class="venue">
                            <span class="icon">{ "📍" }</span>
                            <span>{ event.venue.clone() }</span>
                        </div>
                    </div>
                </section>

                <section class="intro">
                    <h2>{ "An Evening of Elegance and Recognition" }</h2>
                    <p>
                        { "Join us for a night of celebration as we honor the brightest stars in our industry. " }
                        { "Enjoy a gourmet dinner, live entertainment, and witness the crowning of this year's excellence award winners." }
                    </p>
                    <TicketGallery
                        offerings={state.checkout.catalog().offerings()}
                        selected={intent.selected}
                        {on_select}
                    />
                </section>

                <Highlights />
            </main>

            <Footer />

            <InfoDialog
                open={intent.is_overlay_open()}
                name={intent.buyer_name.expose().clone()}
                email={intent.buyer_email.expose().clone()}
                {on_name}
                {on_email}
                {on_submit}
                {on_dismiss}
            />

            <ToastViewport
                toasts={state.toaster.visible().to_vec()}
                on_dismiss={on_toast_dismiss}
            />
        </div>
    }
}
