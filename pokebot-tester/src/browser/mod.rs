pub mod dashboard;
pub mod scenarios;
pub mod session;

pub use dashboard::DashboardDriver;
pub use session::{BrowserConfig, BrowserKind, new_session};
