//! Application pages

mod dashboard;
mod home;
mod login;
mod not_found;
mod profile;
mod safety_tips;
mod signup;
mod sos;

pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use not_found::*;
pub use profile::*;
pub use safety_tips::*;
pub use signup::*;
pub use sos::*;
