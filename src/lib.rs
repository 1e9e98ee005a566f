//! # eshopzone
//!
//! Leptos + WASM storefront front-end for the EShoppingZone backend.
//! Client-side rendered: the app runs entirely in the browser and talks to
//! a remote REST backend with a client-held JWT bearer token.
//!
//! The interesting parts live in `auth` (token claims, session lifecycle,
//! view gate) and `net` (REST façade, retry policy); `pages` and
//! `components` are presentation.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;
