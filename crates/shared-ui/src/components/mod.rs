// Standalone building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod detail_list;
pub mod filter_grid;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod spinner;

// Composites (depend on button)
pub mod dialog;
pub mod pagination;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use dialog::*;
pub use filter_grid::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use spinner::*;
