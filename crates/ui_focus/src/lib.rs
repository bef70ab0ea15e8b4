//! Headless focus management for modal surfaces.
//!
//! This crate is the host-independent boundary for dialog focus behavior. It owns the ordered
//! focus scope, the focus trap (initial focus, Tab containment, Escape reporting, focus
//! restoration), and the Closed/Open dialog session controller. Browser DOM access lives behind
//! the [`FocusHost`] trait; the `web-sys` adapter is provided by `ui_focus_web`, and
//! [`MemoryFocusHost`] backs native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialog;
pub mod error;
pub mod host;
pub mod label;
pub mod memory;
pub mod scope;
pub mod trap;

pub use dialog::{DialogController, DialogOptions, DismissReason, KeyDownOutcome};
pub use error::FocusError;
pub use host::{FocusCandidate, FocusHost, FocusTarget};
pub use label::LabelId;
pub use memory::{ElementSpec, MemoryFocusHost, MemoryNode};
pub use scope::FocusScope;
pub use trap::{FocusTrap, InitialFocus, Key, KeyInput, RestoredFocus, TrapKey, TrapOptions};
