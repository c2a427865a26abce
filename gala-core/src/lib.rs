pub mod countdown;
pub mod site;
pub mod payment;
pub mod notification;
pub mod purchase;
pub mod checkout;

pub use checkout::{Checkout, CheckoutAction, Effect};
pub use countdown::{Countdown, TimeRemaining};
pub use notification::{Notification, NotificationKind, Toast, Toaster};
pub use payment::{PaymentConfig, PaymentOutcome, PaymentWidget, WidgetEvent, WidgetResponse};
pub use purchase::{Overlay, PurchaseIntent};
pub use site::{EventDetails, PaymentSettings, SiteSettings};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Payment widget error: {0}")]
    WidgetError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
