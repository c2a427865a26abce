//! Binding to the Flutterwave inline checkout loaded by `index.html`.

use gala_core::{CoreError, CoreResult, PaymentConfig, PaymentWidget, WidgetEvent, WidgetResponse};
use js_sys::{Function, Reflect};
use std::cell::RefCell;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = FlutterwaveCheckout, catch)]
    fn flutterwave_checkout(options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Callbacks stay alive until the next launch; the widget may call `onclose`
/// after it already reported completion.
struct Session {
    modal: JsValue,
    _callback: Closure<dyn FnMut(JsValue)>,
    _onclose: Closure<dyn FnMut()>,
}

pub struct FlutterwaveWidget {
    on_event: Callback<WidgetEvent>,
    session: RefCell<Option<Session>>,
}

impl FlutterwaveWidget {
    pub fn new(on_event: Callback<WidgetEvent>) -> Self {
        Self {
            on_event,
            session: RefCell::new(None),
        }
    }
}

impl PaymentWidget for FlutterwaveWidget {
    fn launch(&self, config: &PaymentConfig) -> CoreResult<()> {
        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|e| CoreError::WidgetError(e.to_string()))?;

        let on_event = self.on_event.clone();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
            let response = serde_wasm_bindgen::from_value::<WidgetResponse>(data)
                .unwrap_or_else(|e| {
                    warn!("Unreadable widget response: {}", e);
                    WidgetResponse {
                        status: "unreadable".to_string(),
                        transaction_id: None,
                        tx_ref: None,
                    }
                });
            on_event.emit(WidgetEvent::Completed(response));
        });

        let on_event = self.on_event.clone();
        let onclose = Closure::<dyn FnMut()>::new(move || on_event.emit(WidgetEvent::Closed));

        set(&options, "callback", callback.as_ref())?;
        set(&options, "onclose", onclose.as_ref())?;

        let modal = flutterwave_checkout(&options)
            .map_err(|e| CoreError::WidgetError(describe(&e)))?;

        *self.session.borrow_mut() = Some(Session {
            modal,
            _callback: callback,
            _onclose: onclose,
        });
        Ok(())
    }

    fn close(&self) {
        let closed = match self.session.borrow().as_ref() {
            Some(session) => Reflect::get(&session.modal, &JsValue::from_str("close"))
                .ok()
                .and_then(|close| close.dyn_into::<Function>().ok())
                .map(|close| close.call0(&session.modal).is_ok())
                .unwrap_or(false),
            None => false,
        };

        if !closed {
            remove_checkout_frames();
        }
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> CoreResult<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| CoreError::WidgetError(describe(&e)))
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown JavaScript error".to_string())
}

/// Older widget builds return nothing to close; drop their iframe instead.
fn remove_checkout_frames() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let frames = document.get_elements_by_name("checkout");
    for i in (0..frames.length()).rev() {
        if let Some(element) = frames.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            element.remove();
        }
    }
}
