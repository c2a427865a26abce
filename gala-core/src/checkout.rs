use chrono::{DateTime, Utc};
use gala_catalog::{Catalog, TicketTier};
use tracing::{error, info, warn};

use crate::notification::Notification;
use crate::payment::{generate_tx_ref, PaymentConfig, PaymentOutcome, WidgetEvent};
use crate::purchase::PurchaseIntent;
use crate::site::PaymentSettings;
use crate::CoreError;

pub const SERVICE_UNAVAILABLE: &str = "The payment service is unavailable";

/// Everything the visitor can do, plus what the widget reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutAction {
    SelectTicket(TicketTier),
    EditName(String),
    EditEmail(String),
    DismissOverlay,
    Submit,
    Pay,
    Widget(WidgetEvent),
    /// The widget could not even be opened
    WidgetUnavailable(String),
}

/// Side effects requested by a transition, executed by the view layer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    LaunchWidget(PaymentConfig),
    CloseWidget,
}

/// Ticket purchase flow: selection, buyer details, payment hand-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    intent: PurchaseIntent,
    catalog: Catalog,
    settings: PaymentSettings,
}

impl Checkout {
    pub fn new(catalog: Catalog, settings: PaymentSettings) -> Self {
        Self {
            intent: PurchaseIntent::new(),
            catalog,
            settings,
        }
    }

    pub fn intent(&self) -> &PurchaseIntent {
        &self.intent
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &PaymentSettings {
        &self.settings
    }

    /// Swap widget settings, e.g. once the host has served its own
    pub fn set_settings(&mut self, settings: PaymentSettings) {
        self.settings = settings;
    }

    /// Apply one action. Runs to completion; the returned effects are the
    /// only way this touches the outside world.
    pub fn handle(&mut self, action: CheckoutAction, now: DateTime<Utc>) -> Vec<Effect> {
        match action {
            CheckoutAction::SelectTicket(tier) => {
                self.intent.select_ticket(tier);
                Vec::new()
            }
            CheckoutAction::EditName(name) => {
                self.intent.edit_name(name);
                Vec::new()
            }
            CheckoutAction::EditEmail(email) => {
                self.intent.edit_email(email);
                Vec::new()
            }
            CheckoutAction::DismissOverlay => {
                self.intent.dismiss_overlay();
                Vec::new()
            }
            CheckoutAction::Submit => match self.intent.submit() {
                Ok(()) => self.pay(now),
                Err(err) => vec![validation_failed(err)],
            },
            CheckoutAction::Pay => self.pay(now),
            CheckoutAction::Widget(WidgetEvent::Completed(response)) => {
                self.intent.payment_in_progress = false;
                let notification = match response.outcome() {
                    PaymentOutcome::Success { transaction_id } => {
                        info!(%transaction_id, tx_ref = ?response.tx_ref, "Payment completed");
                        Notification::info(
                            "Payment Successful",
                            format!("Your transaction ID is {}", transaction_id),
                        )
                    }
                    PaymentOutcome::Failure { status } => {
                        warn!(%status, tx_ref = ?response.tx_ref, "Payment not successful");
                        Notification::destructive("Payment Failed", "Please try again later")
                    }
                };
                vec![Effect::CloseWidget, Effect::Notify(notification)]
            }
            CheckoutAction::Widget(WidgetEvent::Closed) => {
                self.intent.payment_in_progress = false;
                Vec::new()
            }
            CheckoutAction::WidgetUnavailable(reason) => {
                error!("Payment widget unavailable: {}", reason);
                self.intent.payment_in_progress = false;
                vec![Effect::Notify(Notification::destructive(
                    "Payment Failed",
                    SERVICE_UNAVAILABLE,
                ))]
            }
        }
    }

    fn pay(&mut self, now: DateTime<Utc>) -> Vec<Effect> {
        let tier = match self.intent.ready_for_payment() {
            Ok(tier) => tier,
            Err(err) => return vec![validation_failed(err)],
        };

        self.intent.payment_in_progress = true;
        let config = PaymentConfig::build(
            &self.settings,
            &self.catalog,
            Some(tier),
            &self.intent.buyer_name,
            &self.intent.buyer_email,
            generate_tx_ref(now),
        );

        info!(
            tx_ref = %config.tx_ref,
            amount = config.amount,
            currency = %config.currency,
            ticket = %tier,
            "Launching payment widget"
        );
        vec![Effect::LaunchWidget(config)]
    }
}

fn validation_failed(err: CoreError) -> Effect {
    warn!("Checkout rejected: {}", err);
    let message = match err {
        CoreError::ValidationError(msg) => msg,
        other => other.to_string(),
    };
    Effect::Notify(Notification::destructive("Error", message))
}
