pub mod countdown;
pub mod info_dialog;
pub mod layout;
pub mod ticket_gallery;
pub mod toaster;

pub use countdown::CountdownTimer;
pub use info_dialog::InfoDialog;
pub use layout::{Footer, Header, Highlights};
pub use ticket_gallery::TicketGallery;
pub use toaster::ToastViewport;
