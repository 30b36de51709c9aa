//! Session/identity provider

mod context;
mod state;
pub mod storage;

pub use context::{use_session, SessionProvider};
pub use state::SessionState;
