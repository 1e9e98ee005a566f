//! Authentication: token claims, persistence, session store, view gate.

pub mod claims;
pub mod guard;
pub mod session;
pub mod token;
