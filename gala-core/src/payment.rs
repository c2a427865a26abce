use chrono::{DateTime, Utc};
use gala_catalog::{Catalog, TicketTier};
use gala_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::site::PaymentSettings;
use crate::CoreResult;

/// Status string the widget reports for a settled charge
pub const STATUS_SUCCESSFUL: &str = "successful";

/// Configuration handed to the hosted payment widget.
/// Field names follow the widget's inline checkout options.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentConfig {
    pub public_key: String,
    pub tx_ref: String,
    pub amount: i32,
    pub currency: String,
    pub payment_options: String,
    pub customer: Customer,
    pub customizations: Customizations,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Customer {
    pub email: Masked<String>,
    pub phone_number: String,
    pub name: Masked<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Customizations {
    pub title: String,
    pub description: String,
    pub logo: String,
}

impl PaymentConfig {
    /// Amount is the selected ticket's price, or 0 when the selection matches nothing.
    pub fn build(
        settings: &PaymentSettings,
        catalog: &Catalog,
        selection: Option<TicketTier>,
        name: &Masked<String>,
        email: &Masked<String>,
        tx_ref: String,
    ) -> Self {
        Self {
            public_key: settings.public_key.clone(),
            tx_ref,
            amount: catalog.price_of(selection),
            currency: settings.currency.clone(),
            payment_options: settings.payment_options.clone(),
            customer: Customer {
                email: email.clone(),
                phone_number: settings.phone_number.clone(),
                name: name.clone(),
            },
            customizations: Customizations {
                title: settings.branding.title.clone(),
                description: settings.branding.description.clone(),
                logo: settings.branding.logo.clone(),
            },
        }
    }
}

/// Fresh reference for one payment attempt
pub fn generate_tx_ref(now: DateTime<Utc>) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    format!("gala-{}-{}", now.timestamp_millis(), &nonce[..8])
}

/// The widget reports transaction ids as numbers, older builds as strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TransactionId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Numeric(id) => write!(f, "{}", id),
            TransactionId::Text(id) => f.write_str(id),
        }
    }
}

/// Payload of the widget's completion callback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetResponse {
    pub status: String,
    #[serde(default)]
    pub transaction_id: Option<TransactionId>,
    #[serde(default)]
    pub tx_ref: Option<String>,
}

impl WidgetResponse {
    pub fn outcome(&self) -> PaymentOutcome {
        match (&self.status[..], &self.transaction_id) {
            (STATUS_SUCCESSFUL, Some(id)) => PaymentOutcome::Success {
                transaction_id: id.to_string(),
            },
            (STATUS_SUCCESSFUL, None) => PaymentOutcome::Success {
                transaction_id: String::new(),
            },
            (status, _) => PaymentOutcome::Failure {
                status: status.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success { transaction_id: String },
    Failure { status: String },
}

/// What the widget can tell us. Exactly one of these ends an attempt,
/// although the widget may still emit `Closed` after `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Completed(WidgetResponse),
    Closed,
}

/// Boundary to the hosted payment widget.
///
/// Implementations report back through whatever channel they were built
/// with; results arrive later as [`WidgetEvent`]s.
pub trait PaymentWidget {
    /// Open the widget's own UI for this configuration
    fn launch(&self, config: &PaymentConfig) -> CoreResult<()>;

    /// Tear down the widget's UI after a completion
    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn settings() -> PaymentSettings {
        PaymentSettings::default()
    }

    #[test]
    fn test_build_uses_selected_price() {
        let config = PaymentConfig::build(
            &settings(),
            &Catalog::standard(),
            Some(TicketTier::Vvip),
            &Masked::from("Ada Obi"),
            &Masked::from("ada@example.com"),
            "ref-1".into(),
        );

        assert_eq!(config.amount, 15000);
        assert_eq!(config.currency, "NGN");
        assert_eq!(config.tx_ref, "ref-1");
        assert_eq!(config.customer.phone_number, "070********");
        assert_eq!(config.customizations.description, "Payment for event tickets");
    }

    #[test]
    fn test_build_without_selection_is_zero() {
        let config = PaymentConfig::build(
            &settings(),
            &Catalog::standard(),
            None,
            &Masked::from("Ada Obi"),
            &Masked::from("ada@example.com"),
            "ref-2".into(),
        );
        assert_eq!(config.amount, 0);
    }

    #[test]
    fn test_config_serializes_real_contact() {
        let config = PaymentConfig::build(
            &settings(),
            &Catalog::standard(),
            Some(TicketTier::Regular),
            &Masked::from("Ada Obi"),
            &Masked::from("ada@example.com"),
            "ref-3".into(),
        );

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["customer"]["email"], "ada@example.com");
        assert_eq!(json["customer"]["name"], "Ada Obi");
        assert_eq!(json["amount"], 5000);
        assert_eq!(json["payment_options"], "card,mobilemoney,ussd");

        let logged = format!("{:?}", config);
        assert!(!logged.contains("ada@example.com"));
    }

    #[test]
    fn test_tx_refs_differ_within_same_millisecond() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let first = generate_tx_ref(now);
        let second = generate_tx_ref(now);

        assert!(first.starts_with(&format!("gala-{}-", now.timestamp_millis())));
        assert_ne!(first, second);
    }

    #[test]
    fn test_response_outcomes() {
        let ok: WidgetResponse = serde_json::from_str(
            r#"{"status":"successful","transaction_id":4915384,"tx_ref":"gala-1"}"#,
        )
        .unwrap();
        assert_eq!(
            ok.outcome(),
            PaymentOutcome::Success { transaction_id: "4915384".into() }
        );

        let text_id: WidgetResponse =
            serde_json::from_str(r#"{"status":"successful","transaction_id":"FLW-77"}"#).unwrap();
        assert_eq!(
            text_id.outcome(),
            PaymentOutcome::Success { transaction_id: "FLW-77".into() }
        );

        let failed: WidgetResponse = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(
            failed.outcome(),
            PaymentOutcome::Failure { status: "failed".into() }
        );
    }
}
