//! Bind node-graph contexts to desktops.
//!
//! Assigning a context to a desktop records which pane drives it. When that
//! pane later moves into a context bound to another desktop, the host is told
//! to activate that desktop and point its bound pane at the new path.

pub mod app;
pub mod core;
pub mod effect;
pub mod error;
pub mod paths;
pub mod platform;
pub mod store;
