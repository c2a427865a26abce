use gala_catalog::TicketTier;
use gala_shared::Masked;

use crate::{CoreError, CoreResult};

pub const MISSING_CONTACT: &str = "Please enter both name and email";
pub const MISSING_SELECTION: &str = "Please select a ticket and provide your information";

/// Visibility of the buyer information dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    Open,
    #[default]
    Closed,
}

/// Transient purchase state for one page session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseIntent {
    pub selected: Option<TicketTier>,
    pub buyer_name: Masked<String>,
    pub buyer_email: Masked<String>,
    pub overlay: Overlay,
    pub payment_in_progress: bool,
}

impl PurchaseIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection and open the information dialog
    pub fn select_ticket(&mut self, tier: TicketTier) {
        self.selected = Some(tier);
        self.overlay = Overlay::Open;
    }

    pub fn edit_name(&mut self, name: impl Into<String>) {
        self.buyer_name = Masked(name.into());
    }

    pub fn edit_email(&mut self, email: impl Into<String>) {
        self.buyer_email = Masked(email.into());
    }

    /// Close the dialog without paying. Typed values and selection stay.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = Overlay::Closed;
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    pub fn has_contact(&self) -> bool {
        !self.buyer_name.is_empty() && !self.buyer_email.is_empty()
    }

    /// Validate the dialog. On success the dialog closes; on failure it stays open.
    pub fn submit(&mut self) -> CoreResult<()> {
        if !self.has_contact() {
            return Err(CoreError::ValidationError(MISSING_CONTACT.to_string()));
        }
        self.overlay = Overlay::Closed;
        Ok(())
    }

    /// The ticket to charge for, if everything needed for payment is present
    pub fn ready_for_payment(&self) -> CoreResult<TicketTier> {
        match self.selected {
            Some(tier) if self.has_contact() => Ok(tier),
            _ => Err(CoreError::ValidationError(MISSING_SELECTION.to_string())),
        }
    }
}
