//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` holds the plain session record and its transitions. `session`
//! wraps it with the backend, persistent storage, and change listeners.

pub mod auth;
pub mod session;
