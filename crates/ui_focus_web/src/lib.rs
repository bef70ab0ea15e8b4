//! Browser (`wasm32`) implementation of the [`ui_focus::FocusHost`] seam.
//!
//! [`DomFocusHost`] answers focus queries against the live document through `web-sys`;
//! [`defer`] schedules work after the current render commit, and [`key_input`] normalizes
//! keyboard events for the focus trap.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dom;
mod keys;

pub use dom::{defer, DomFocusHost, FOCUSABLE_SELECTOR};
pub use keys::key_input;
