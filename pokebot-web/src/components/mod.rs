pub mod channel_picker;
pub mod daisy_ui;
pub mod header;
pub mod save_banner;
pub mod sidebar;
pub mod type_badge;
pub mod wizard_nav;

pub use channel_picker::ChannelPicker;
pub use header::Header;
pub use save_banner::SaveBanner;
pub use sidebar::Sidebar;
pub use type_badge::TypeBadge;
pub use wizard_nav::WizardNav;
