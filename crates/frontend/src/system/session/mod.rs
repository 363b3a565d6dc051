//! Session holding the current user role.
//!
//! The role is the only value the front-end persists. It is read once from
//! local storage when the app starts, written on login and removed on logout.
//! Components receive the [`Session`] through context instead of reaching
//! for storage directly.

mod context;
pub mod storage;

pub use context::{use_session, Session};
