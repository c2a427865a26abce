use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket tiers on sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TicketTier {
    Regular,
    Couples,
    Vvip,
    Vip,
}

impl TicketTier {
    pub const ALL: [TicketTier; 4] = [
        TicketTier::Regular,
        TicketTier::Couples,
        TicketTier::Vvip,
        TicketTier::Vip,
    ];

    /// Wire id, as used in URLs and the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            TicketTier::Regular => "regular",
            TicketTier::Couples => "couples",
            TicketTier::Vvip => "vvip",
            TicketTier::Vip => "vip",
        }
    }
}

impl fmt::Display for TicketTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TicketTier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketTier::ALL
            .into_iter()
            .find(|tier| tier.id() == s)
            .ok_or_else(|| CatalogError::UnknownTier(s.to_string()))
    }
}

/// One purchasable ticket offering
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketOffering {
    pub id: TicketTier,
    pub display_name: &'static str,
    /// Whole currency units, exactly what the payment widget is charged
    pub price: i32,
    pub image_ref: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown ticket tier: {0}")]
    UnknownTier(String),
}

const OFFERINGS: [TicketOffering; 4] = [
    TicketOffering {
        id: TicketTier::Regular,
        display_name: "Individual Ticket",
        price: 5000,
        image_ref: "/assets/dinner.jpg",
    },
    TicketOffering {
        id: TicketTier::Couples,
        display_name: "Couple's Package",
        price: 9000,
        image_ref: "/assets/gala.jpg",
    },
    TicketOffering {
        id: TicketTier::Vvip,
        display_name: "VIP Table (8 seats)",
        price: 15000,
        image_ref: "/assets/vip.jpg",
    },
    TicketOffering {
        id: TicketTier::Vip,
        display_name: "VIP Ticket",
        price: 10000,
        image_ref: "/assets/night.jpg",
    },
];

/// The fixed ticket list. Entries never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    offerings: &'static [TicketOffering],
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            offerings: &OFFERINGS,
        }
    }

    /// Offerings in display order
    pub fn offerings(&self) -> &'static [TicketOffering] {
        self.offerings
    }

    pub fn find(&self, tier: TicketTier) -> Option<&'static TicketOffering> {
        self.offerings.iter().find(|offering| offering.id == tier)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&'static TicketOffering, CatalogError> {
        let tier: TicketTier = id.parse()?;
        self.find(tier)
            .ok_or_else(|| CatalogError::UnknownTier(id.to_string()))
    }

    /// Price of the given selection, 0 when nothing matches
    pub fn price_of(&self, selection: Option<TicketTier>) -> i32 {
        selection
            .and_then(|tier| self.find(tier))
            .map(|offering| offering.price)
            .unwrap_or(0)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
