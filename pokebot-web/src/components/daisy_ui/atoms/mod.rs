pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod loading;
pub mod progress;
pub mod range;
pub mod select;
pub mod textarea;
pub mod toggle;

pub use alert::Alert;
pub use avatar::Avatar;
pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use loading::Loading;
pub use progress::Progress;
pub use range::Range;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
pub use toggle::Toggle;
