//! Dialog session controller: the Closed/Open state machine around a [`FocusTrap`].

use serde::{Deserialize, Serialize};

use crate::{
    error::FocusError,
    host::{FocusHost, FocusTarget},
    trap::{restore_focus, FocusTrap, InitialFocus, KeyInput, RestoredFocus, TrapKey, TrapOptions},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Per-instance dialog behavior.
pub struct DialogOptions {
    /// Whether clicking the overlay requests dismissal.
    pub close_on_overlay_click: bool,
    /// Element focused when the dialog opens.
    pub initial_focus: Option<FocusTarget>,
    /// Element focused when the dialog closes.
    pub final_focus: Option<FocusTarget>,
    /// Whether closing returns focus to the element focused before opening.
    pub return_focus: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            close_on_overlay_click: true,
            initial_focus: None,
            final_focus: None,
            return_focus: true,
        }
    }
}

impl DialogOptions {
    /// Sets overlay-click dismissal.
    pub fn close_on_overlay_click(mut self, enabled: bool) -> Self {
        self.close_on_overlay_click = enabled;
        self
    }

    /// Sets the element focused on open.
    pub fn initial_focus(mut self, target: impl Into<FocusTarget>) -> Self {
        self.initial_focus = Some(target.into());
        self
    }

    /// Sets the element focused on close.
    pub fn final_focus(mut self, target: impl Into<FocusTarget>) -> Self {
        self.final_focus = Some(target.into());
        self
    }

    /// Sets whether focus returns to the previously focused element on close.
    pub fn return_focus(mut self, enabled: bool) -> Self {
        self.return_focus = enabled;
        self
    }

    /// Focus-transfer subset handed to the trap.
    pub fn trap_options(&self) -> TrapOptions {
        TrapOptions {
            initial_focus: self.initial_focus.clone(),
            final_focus: self.final_focus.clone(),
            return_focus: self.return_focus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Why a dialog asked its owner to close it.
pub enum DismissReason {
    /// The overlay behind the panel was clicked.
    OverlayClick,
    /// Escape was pressed while focus was inside the panel.
    EscapeKey,
    /// The header close button was activated.
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of routing a keydown through an open dialog.
pub struct KeyDownOutcome {
    /// Dismissal the owner should act on.
    pub dismiss: Option<DismissReason>,
    /// Whether the host default action must be suppressed.
    pub prevent_default: bool,
}

impl KeyDownOutcome {
    const IGNORED: Self = Self {
        dismiss: None,
        prevent_default: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
enum DialogPhase<N> {
    Closed,
    Mounting { return_to: Option<N> },
    Open(FocusTrap<N>),
}

#[derive(Debug, Clone, PartialEq)]
/// Focus and dismissal state for one dialog instance.
///
/// The open flag itself stays with the caller; the controller follows it through
/// [`DialogController::open`] and [`DialogController::close`]. Each instance owns its own trap,
/// so nested dialogs never share state.
pub struct DialogController<N> {
    options: DialogOptions,
    phase: DialogPhase<N>,
}

impl<N: Clone + PartialEq> DialogController<N> {
    /// Creates a closed controller.
    pub fn new(options: DialogOptions) -> Self {
        Self {
            options,
            phase: DialogPhase::Closed,
        }
    }

    /// Current options.
    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    /// Replaces the options; takes effect on the next transition or event.
    pub fn set_options(&mut self, options: DialogOptions) {
        self.options = options;
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, DialogPhase::Open(_))
    }

    /// Container of the open session.
    pub fn container(&self) -> Option<&N> {
        match &self.phase {
            DialogPhase::Open(trap) => Some(trap.container()),
            DialogPhase::Closed | DialogPhase::Mounting { .. } => None,
        }
    }

    /// Whether [`DialogController::begin_open`] ran and the panel is not trapped yet.
    pub fn is_mounting(&self) -> bool {
        matches!(self.phase, DialogPhase::Mounting { .. })
    }

    /// Records the element that holds focus as the open flag turns true, before the panel is
    /// committed.
    ///
    /// Calling it again while mounting resamples the return target.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::AlreadyOpen`] while a session is open.
    pub fn begin_open<H>(&mut self, host: &H) -> Result<(), FocusError>
    where
        H: FocusHost<Node = N>,
    {
        if self.is_open() {
            return Err(FocusError::AlreadyOpen);
        }
        self.phase = DialogPhase::Mounting {
            return_to: host.active_element(),
        };
        Ok(())
    }

    /// Closed → Open: traps focus inside the committed `container`.
    ///
    /// Must be called after the panel is attached to the document. Focus returns on close to
    /// the element recorded by [`DialogController::begin_open`], or to the element focused now
    /// when `begin_open` was skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::AlreadyOpen`] for a second open and
    /// [`FocusError::ContainerDetached`] when the panel is not attached.
    pub fn open<H>(&mut self, host: &H, container: N) -> Result<InitialFocus, FocusError>
    where
        H: FocusHost<Node = N>,
    {
        let return_to = match &self.phase {
            DialogPhase::Open(_) => return Err(FocusError::AlreadyOpen),
            DialogPhase::Mounting { return_to } => return_to.clone(),
            DialogPhase::Closed => host.active_element(),
        };
        let (trap, initial) = FocusTrap::activate_returning_to(
            host,
            container,
            return_to,
            &self.options.trap_options(),
        )?;
        self.phase = DialogPhase::Open(trap);
        Ok(initial)
    }

    /// Open → Closed: releases the trap and restores focus.
    ///
    /// A session still mounting is closed too: focus goes back per the same policy so it never
    /// stays inside a panel that unmounted before activation.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::NotOpen`] when no session is open.
    pub fn close<H>(&mut self, host: &H) -> Result<RestoredFocus, FocusError>
    where
        H: FocusHost<Node = N>,
    {
        match std::mem::replace(&mut self.phase, DialogPhase::Closed) {
            DialogPhase::Open(trap) => Ok(trap.deactivate(host, &self.options.trap_options())),
            DialogPhase::Mounting { return_to } => {
                Ok(restore_focus(host, return_to, &self.options.trap_options()))
            }
            DialogPhase::Closed => Err(FocusError::NotOpen),
        }
    }

    /// Overlay click: requests dismissal only when overlay dismissal is enabled.
    pub fn overlay_click(&self) -> Option<DismissReason> {
        (self.is_open() && self.options.close_on_overlay_click)
            .then_some(DismissReason::OverlayClick)
    }

    /// Close-button activation.
    pub fn close_button(&self) -> Option<DismissReason> {
        self.is_open().then_some(DismissReason::CloseButton)
    }

    /// Keydown that originated inside the panel.
    ///
    /// Escape always requests dismissal; Tab is kept inside the panel.
    pub fn key_down<H>(&self, host: &H, input: KeyInput) -> KeyDownOutcome
    where
        H: FocusHost<Node = N>,
    {
        let DialogPhase::Open(trap) = &self.phase else {
            return KeyDownOutcome::IGNORED;
        };
        match trap.handle_key(host, input) {
            TrapKey::Escape => KeyDownOutcome {
                dismiss: Some(DismissReason::EscapeKey),
                prevent_default: true,
            },
            outcome => KeyDownOutcome {
                dismiss: None,
                prevent_default: outcome.prevents_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::{ElementSpec, MemoryFocusHost, MemoryNode};

    struct Page {
        host: MemoryFocusHost,
        trigger: MemoryNode,
    }

    impl Page {
        fn new() -> Self {
            let host = MemoryFocusHost::new();
            let trigger = host.append(host.body(), ElementSpec::button().with_id("open"));
            Self { host, trigger }
        }

        fn click(&self, node: MemoryNode) {
            self.host.focus(&node);
        }

        /// Mounts an empty panel under the body.
        fn mount_panel(&self) -> MemoryNode {
            let host = &self.host;
            host.append(host.body(), ElementSpec::tab_index(-1))
        }

        /// Mounts the standard dialog: header close button, text, footer actions.
        fn mount_complete(&self) -> MemoryNode {
            let host = &self.host;
            let panel = self.mount_panel();
            let header = host.append(panel, ElementSpec::plain());
            host.append(header, ElementSpec::plain());
            host.append(header, ElementSpec::button().with_id("dialog-close"));
            host.append(panel, ElementSpec::plain());
            let actions = host.append(panel, ElementSpec::plain());
            host.append(actions, ElementSpec::button().with_id("cancel"));
            host.append(actions, ElementSpec::button().with_id("apply"));
            panel
        }

        fn node(&self, id: &str) -> MemoryNode {
            let target = FocusTarget::id(id);
            self.host.resolve(&target).expect("element exists")
        }
    }

    #[test]
    fn initial_focus_target_receives_focus_on_open() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default().initial_focus("apply"));
        page.click(page.trigger);
        let panel = page.mount_complete();

        let initial = dialog.open(&page.host, panel).expect("open");

        assert_eq!(initial, InitialFocus::Requested);
        assert_eq!(page.host.focused(), Some(page.node("apply")));
    }

    #[test]
    fn container_receives_focus_without_focusable_descendants() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        let panel = page.mount_panel();
        let header = page.host.append(panel, ElementSpec::plain());
        page.host.append(header, ElementSpec::plain());
        page.host.append(panel, ElementSpec::plain());

        let initial = dialog.open(&page.host, panel).expect("open");

        assert_eq!(initial, InitialFocus::Container);
        assert_eq!(page.host.focused(), Some(panel));
    }

    #[test]
    fn unresolvable_initial_focus_falls_back_to_first_tabbable() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default().initial_focus("missing"));
        let panel = page.mount_complete();

        let initial = dialog.open(&page.host, panel).expect("open");

        assert_eq!(initial, InitialFocus::FirstTabbable);
        assert_eq!(page.host.focused(), Some(page.node("dialog-close")));
    }

    #[test]
    fn overlay_click_respects_close_on_overlay_click() {
        let page = Page::new();
        let mut default_dialog = DialogController::new(DialogOptions::default());
        let mut sticky_dialog =
            DialogController::new(DialogOptions::default().close_on_overlay_click(false));

        assert_eq!(default_dialog.overlay_click(), None);

        let panel = page.mount_complete();
        default_dialog.open(&page.host, panel).expect("open");
        assert_eq!(
            default_dialog.overlay_click(),
            Some(DismissReason::OverlayClick)
        );
        default_dialog.close(&page.host).expect("close default");

        let panel = page.mount_complete();
        sticky_dialog.open(&page.host, panel).expect("open sticky");
        assert_eq!(sticky_dialog.overlay_click(), None);
    }

    #[test]
    fn escape_inside_dialog_requests_close_once() {
        let page = Page::new();
        let mut dialog =
            DialogController::new(DialogOptions::default().close_on_overlay_click(false));
        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");
        page.click(page.node("cancel"));

        let mut dismissals = Vec::new();
        let outcome = dialog.key_down(&page.host, KeyInput::escape());
        dismissals.extend(outcome.dismiss);
        let outcome = dialog.key_down(&page.host, KeyInput::from_key_name("Enter", false));
        dismissals.extend(outcome.dismiss);

        assert_eq!(dismissals, vec![DismissReason::EscapeKey]);
    }

    #[test]
    fn close_button_requests_close_only_while_open() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        assert_eq!(dialog.close_button(), None);

        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");

        assert_eq!(dialog.close_button(), Some(DismissReason::CloseButton));
    }

    #[test]
    fn closing_restores_final_focus_target() {
        let page = Page::new();
        let elsewhere = page
            .host
            .append(page.host.body(), ElementSpec::button().with_id("elsewhere"));
        let mut dialog = DialogController::new(DialogOptions::default().final_focus("elsewhere"));
        page.click(page.trigger);
        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");

        page.host.detach(panel);
        let restored = dialog.close(&page.host).expect("close");

        assert_eq!(restored, RestoredFocus::FinalTarget);
        assert_eq!(page.host.focused(), Some(elsewhere));
    }

    #[test]
    fn closing_returns_focus_to_trigger_by_default() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        page.click(page.trigger);
        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");
        assert_ne!(page.host.focused(), Some(page.trigger));

        page.host.detach(panel);
        let restored = dialog.close(&page.host).expect("close");

        assert_eq!(restored, RestoredFocus::PreviouslyFocused);
        assert_eq!(page.host.focused(), Some(page.trigger));
        assert!(!dialog.is_open());
    }

    #[test]
    fn focus_moved_into_panel_while_mounting_keeps_trigger_as_return_target() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        page.click(page.trigger);
        dialog.begin_open(&page.host).expect("begin open");
        let panel = page.mount_complete();
        page.click(page.node("cancel"));

        dialog.open(&page.host, panel).expect("open");
        page.host.detach(panel);
        let restored = dialog.close(&page.host).expect("close");

        assert_eq!(restored, RestoredFocus::PreviouslyFocused);
        assert_eq!(page.host.focused(), Some(page.trigger));
    }

    #[test]
    fn closing_before_activation_returns_focus_to_trigger() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        page.click(page.trigger);
        dialog.begin_open(&page.host).expect("begin open");
        assert!(dialog.is_mounting());
        assert!(!dialog.is_open());
        let panel = page.mount_complete();
        page.click(page.node("apply"));

        page.host.detach(panel);
        let restored = dialog.close(&page.host).expect("close");

        assert_eq!(restored, RestoredFocus::PreviouslyFocused);
        assert_eq!(page.host.focused(), Some(page.trigger));
        assert!(!dialog.is_mounting());
    }

    #[test]
    fn begin_open_is_rejected_while_open() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");

        assert_eq!(dialog.begin_open(&page.host), Err(FocusError::AlreadyOpen));
        assert!(dialog.is_open());
    }

    #[test]
    fn closing_inner_dialog_returns_focus_inside_outer_dialog() {
        let page = Page::new();
        let mut outer = DialogController::new(DialogOptions::default());
        let mut inner = DialogController::new(DialogOptions::default());

        page.click(page.trigger);
        let outer_panel = page.mount_panel();
        let delete = page
            .host
            .append(outer_panel, ElementSpec::button().with_id("delete"));
        outer.open(&page.host, outer_panel).expect("open outer");

        page.click(delete);
        let inner_panel = page.mount_complete();
        inner.open(&page.host, inner_panel).expect("open inner");

        page.host.detach(inner_panel);
        let restored = inner.close(&page.host).expect("close inner");

        assert_eq!(restored, RestoredFocus::PreviouslyFocused);
        assert_eq!(page.host.focused(), Some(delete));
        assert_ne!(page.host.focused(), Some(page.trigger));
        assert!(outer.is_open());

        page.host.detach(outer_panel);
        outer.close(&page.host).expect("close outer");
        assert_eq!(page.host.focused(), Some(page.trigger));
    }

    #[test]
    fn reopening_recomputes_scope() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());

        let first_panel = page.mount_complete();
        dialog.open(&page.host, first_panel).expect("first open");
        page.host.detach(first_panel);
        dialog.close(&page.host).expect("first close");

        let second_panel = page.mount_panel();
        let only = page.host.append(second_panel, ElementSpec::button());
        let initial = dialog.open(&page.host, second_panel).expect("second open");

        assert_eq!(initial, InitialFocus::FirstTabbable);
        assert_eq!(page.host.focused(), Some(only));
        assert_eq!(dialog.container(), Some(&second_panel));
    }

    #[test]
    fn invalid_transitions_are_errors() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        assert_eq!(dialog.close(&page.host), Err(FocusError::NotOpen));

        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");

        assert_eq!(dialog.open(&page.host, panel), Err(FocusError::AlreadyOpen));
    }

    #[test]
    fn tab_keydown_is_contained_while_open() {
        let page = Page::new();
        let mut dialog = DialogController::new(DialogOptions::default());
        let panel = page.mount_complete();
        dialog.open(&page.host, panel).expect("open");
        page.click(page.node("apply"));

        let outcome = dialog.key_down(&page.host, KeyInput::tab());

        assert_eq!(
            outcome,
            KeyDownOutcome {
                dismiss: None,
                prevent_default: true,
            }
        );
        assert_eq!(page.host.focused(), Some(page.node("dialog-close")));
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = DialogOptions::default()
            .initial_focus("apply")
            .return_focus(false);

        let raw = serde_json::to_string(&options).expect("serialize");
        let parsed: DialogOptions = serde_json::from_str(&raw).expect("deserialize");

        assert_eq!(parsed, options);
    }
}
