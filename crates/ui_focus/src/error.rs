//! Focus controller errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors for invalid dialog session transitions.
///
/// None of these are surfaced to component callers; the component layer logs them and keeps
/// rendering.
pub enum FocusError {
    /// `open` was requested while a session is already open.
    #[error("dialog session is already open")]
    AlreadyOpen,
    /// `close` was requested while no session is open.
    #[error("dialog session is not open")]
    NotOpen,
    /// The dialog container is not attached to the document.
    #[error("focus container is not attached to the document")]
    ContainerDetached,
}
