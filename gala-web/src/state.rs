use chrono::{DateTime, Utc};
use gala_catalog::Catalog;
use gala_core::{
    Checkout, CheckoutAction, Effect, EventDetails, PaymentConfig, SiteSettings, Toaster,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Checkout transition, stamped with the time it was dispatched
    Checkout(CheckoutAction, DateTime<Utc>),
    SettingsLoaded(SiteSettings),
    DismissToast(u64),
    ExpireToasts(DateTime<Utc>),
}

/// Work for the payment widget, picked up after render
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCommand {
    Launch(PaymentConfig),
    Close,
}

/// Page state owned by the top-level view
#[derive(Clone)]
pub struct PageState {
    pub checkout: Checkout,
    pub event: EventDetails,
    pub toaster: Toaster,
    outbox: Rc<RefCell<VecDeque<WidgetCommand>>>,
    /// Bumped whenever a widget command is queued
    pub outbox_seq: u64,
}

impl PartialEq for PageState {
    fn eq(&self, other: &Self) -> bool {
        self.checkout == other.checkout
            && self.event == other.event
            && self.toaster == other.toaster
            && self.outbox_seq == other.outbox_seq
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(SiteSettings::default())
    }
}

impl PageState {
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            checkout: Checkout::new(Catalog::standard(), settings.payment),
            event: settings.event,
            toaster: Toaster::default(),
            outbox: Rc::new(RefCell::new(VecDeque::new())),
            outbox_seq: 0,
        }
    }

    /// Drain queued widget commands, oldest first
    pub fn take_widget_commands(&self) -> Vec<WidgetCommand> {
        self.outbox.borrow_mut().drain(..).collect()
    }

    fn apply(&mut self, effects: Vec<Effect>, now: DateTime<Utc>) {
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    self.toaster.notify(notification, now);
                }
                Effect::LaunchWidget(config) => self.queue(WidgetCommand::Launch(config)),
                Effect::CloseWidget => self.queue(WidgetCommand::Close),
            }
        }
    }

    fn queue(&mut self, command: WidgetCommand) {
        self.outbox.borrow_mut().push_back(command);
        self.outbox_seq += 1;
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PageAction::Checkout(action, now) => {
                let effects = next.checkout.handle(action, now);
                next.apply(effects, now);
            }
            PageAction::SettingsLoaded(settings) => {
                next.checkout.set_settings(settings.payment);
                next.event = settings.event;
            }
            PageAction::DismissToast(id) => {
                if !next.toaster.dismiss(id) {
                    return self;
                }
            }
            PageAction::ExpireToasts(now) => {
                if next.toaster.expire(now) == 0 {
                    return self;
                }
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use gala_catalog::TicketTier;
    use gala_core::{NotificationKind, WidgetEvent, WidgetResponse};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 20, 0, 0).unwrap()
    }

    fn dispatch(state: Rc<PageState>, action: CheckoutAction) -> Rc<PageState> {
        state.reduce(PageAction::Checkout(action, now()))
    }

    fn filled(tier: TicketTier) -> Rc<PageState> {
        let state = Rc::new(PageState::default());
        let state = dispatch(state, CheckoutAction::SelectTicket(tier));
        let state = dispatch(state, CheckoutAction::EditName("Ada Obi".into()));
        dispatch(state, CheckoutAction::EditEmail("ada@example.com".into()))
    }

    #[test]
    fn test_submit_queues_launch() {
        let state = dispatch(filled(TicketTier::Vvip), CheckoutAction::Submit);

        assert_eq!(state.outbox_seq, 1);
        assert!(!state.checkout.intent().is_overlay_open());

        let commands = state.take_widget_commands();
        match commands.as_slice() {
            [WidgetCommand::Launch(config)] => assert_eq!(config.amount, 15000),
            other => panic!("unexpected commands: {:?}", other),
        }
        assert!(state.take_widget_commands().is_empty());
    }

    #[test]
    fn test_validation_error_becomes_toast() {
        let state = Rc::new(PageState::default());
        let state = dispatch(state, CheckoutAction::SelectTicket(TicketTier::Vip));
        let state = dispatch(state, CheckoutAction::Submit);

        assert_eq!(state.outbox_seq, 0);
        let toast = state.toaster.latest().unwrap();
        assert_eq!(toast.notification.kind, NotificationKind::Destructive);
        assert_eq!(toast.notification.message, "Please enter both name and email");
    }

    #[test]
    fn test_completion_closes_widget_and_notifies() {
        let state = dispatch(filled(TicketTier::Regular), CheckoutAction::Submit);
        state.take_widget_commands();

        let state = dispatch(
            state,
            CheckoutAction::Widget(WidgetEvent::Completed(WidgetResponse {
                status: "successful".into(),
                transaction_id: None,
                tx_ref: None,
            })),
        );

        assert_eq!(state.take_widget_commands(), vec![WidgetCommand::Close]);
        assert_eq!(state.toaster.latest().unwrap().notification.title, "Payment Successful");
        assert!(!state.checkout.intent().payment_in_progress);
    }

    #[test]
    fn test_toast_expiry_and_dismiss() {
        let state = Rc::new(PageState::default());
        let state = dispatch(state, CheckoutAction::Pay);
        let id = state.toaster.latest().unwrap().id;

        let unchanged = state.clone().reduce(PageAction::ExpireToasts(now()));
        assert!(Rc::ptr_eq(&unchanged, &state));

        let expired = state
            .clone()
            .reduce(PageAction::ExpireToasts(now() + Duration::seconds(6)));
        assert!(expired.toaster.visible().is_empty());

        let dismissed = state.reduce(PageAction::DismissToast(id));
        assert!(dismissed.toaster.visible().is_empty());
    }

    #[test]
    fn test_loaded_settings_replace_defaults() {
        let mut settings = SiteSettings::default();
        settings.event.venue = "Eko Hotel, Lagos".into();
        settings.payment.public_key = "FLWPUBK-live".into();

        let state = Rc::new(PageState::default()).reduce(PageAction::SettingsLoaded(settings));

        assert_eq!(state.event.venue, "Eko Hotel, Lagos");
        assert_eq!(state.checkout.settings().public_key, "FLWPUBK-live");
    }
}
