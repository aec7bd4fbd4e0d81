//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `user`) and combined in `store`,
//! whose `reduce` function is the only way either slice changes. `auth`
//! holds the actions that drive the session slice.

pub mod auth;
pub mod session;
pub mod store;
pub mod user;
