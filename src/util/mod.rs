//! Small browser-environment helpers.

pub mod dialog;
