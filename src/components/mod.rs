//! Reusable UI components.

pub mod loading;
pub mod route_guard;
