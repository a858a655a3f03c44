//! Network layer: wire types, the REST backend, and the auth actions.

pub mod api;
pub mod auth;
pub mod types;
