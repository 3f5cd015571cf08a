pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod form_select;
pub mod input;
pub mod modal;
pub mod page_header;
pub mod skeleton;
pub mod status_message;
pub mod textarea;

// Composed from button and modal
pub mod confirm_dialog;
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use modal::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;
pub use status_message::*;
pub use textarea::*;
