//! Reusable UI components

mod alert_card;
mod alert_table;
mod error_banner;
mod loading;
mod navbar;
mod shell;
mod status_badge;

pub use alert_card::*;
pub use alert_table::*;
pub use error_banner::*;
pub use loading::*;
pub use navbar::*;
pub use shell::*;
pub use status_badge::*;
