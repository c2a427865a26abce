pub mod product;
pub mod pricing;

pub use product::{Catalog, CatalogError, TicketOffering, TicketTier};
pub use pricing::format_price;
