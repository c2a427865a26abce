use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::Countdown;
use crate::{CoreError, CoreResult};

/// Everything the page needs besides the ticket catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub event: EventDetails,
    pub payment: PaymentSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub tagline: String,
    pub venue: String,
    /// Countdown target
    pub starts_at: DateTime<Utc>,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            title: "Excellence Awards Dinner 2024".to_string(),
            tagline: "Celebrating Outstanding Achievements".to_string(),
            venue: "Grand Ballroom, Lagos".to_string(),
            // Midnight on the 14th, Lagos time (UTC+1)
            starts_at: Utc
                .with_ymd_and_hms(2024, 2, 13, 23, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl EventDetails {
    pub fn countdown(&self) -> Countdown {
        Countdown::new(self.starts_at)
    }
}

/// Fixed inputs handed to the payment widget on every attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSettings {
    pub public_key: String,
    pub currency: String,
    /// Comma separated list understood by the widget, e.g. `card,ussd`
    pub payment_options: String,
    /// Placeholder phone number sent with the buyer contact
    pub phone_number: String,
    pub branding: Branding,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            public_key: "FLWPUBK_TEST-0f4a6722cc16d123de7d2141cd6567c6-X".to_string(),
            currency: "NGN".to_string(),
            payment_options: "card,mobilemoney,ussd".to_string(),
            phone_number: "070********".to_string(),
            branding: Branding::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Branding {
    pub title: String,
    pub description: String,
    pub logo: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: "Excellence Awards Dinner 2024".to_string(),
            description: "Payment for event tickets".to_string(),
            logo: "https://st2.depositphotos.com/4403291/7418/v/450/depositphotos_74189661-stock-illustration-online-shop-log.jpg".to_string(),
        }
    }
}

impl SiteSettings {
    pub fn validate(&self) -> CoreResult<()> {
        let payment = &self.payment;
        if payment.public_key.trim().is_empty() {
            return Err(CoreError::ValidationError("payment.public_key is empty".into()));
        }
        if payment.currency.trim().is_empty() {
            return Err(CoreError::ValidationError("payment.currency is empty".into()));
        }
        if payment.payment_options.split(',').all(|option| option.trim().is_empty()) {
            return Err(CoreError::ValidationError("payment.payment_options is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SiteSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.payment.currency, "NGN");
        assert_eq!(
            settings.event.starts_at.to_rfc3339(),
            "2024-02-13T23:00:00+00:00"
        );
    }

    #[test]
    fn test_rejects_missing_widget_inputs() {
        let mut settings = SiteSettings::default();
        settings.payment.public_key = "  ".into();
        assert!(matches!(settings.validate(), Err(CoreError::ValidationError(_))));

        let mut settings = SiteSettings::default();
        settings.payment.payment_options = " , ".into();
        assert!(matches!(settings.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_target() {
        let settings = SiteSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: SiteSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
