pub mod modal;
pub mod table;

pub use modal::Modal;
pub use table::Table;
