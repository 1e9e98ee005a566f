//! Network layer: REST façade, payload types, and retry policy.

pub mod api;
pub mod retry;
pub mod types;
