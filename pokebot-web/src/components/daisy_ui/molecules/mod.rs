pub mod card;
pub mod file_input;
pub mod stat;
pub mod step_indicator;
pub mod tab;

pub use card::Card;
pub use file_input::{FileInput, PickedFile};
pub use stat::{Stat, StatItem};
pub use step_indicator::StepIndicator;
pub use tab::{Tab, TabItem};
