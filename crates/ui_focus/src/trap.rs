//! Focus trap: initial focus, Tab containment, Escape reporting, and focus restoration.

use serde::{Deserialize, Serialize};

use crate::{
    error::FocusError,
    host::{FocusHost, FocusTarget},
    scope::FocusScope,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Focus transfer policy for one trap activation.
pub struct TrapOptions {
    /// Element focused on activation instead of the first tabbable element.
    pub initial_focus: Option<FocusTarget>,
    /// Element focused on deactivation instead of the previously focused element.
    pub final_focus: Option<FocusTarget>,
    /// Whether deactivation returns focus to the element focused before activation.
    pub return_focus: bool,
}

impl Default for TrapOptions {
    fn default() -> Self {
        Self {
            initial_focus: None,
            final_focus: None,
            return_focus: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Where focus landed when a trap activated.
pub enum InitialFocus {
    /// The caller's `initial_focus` target.
    Requested,
    /// First tabbable element of the scope.
    FirstTabbable,
    /// The container itself (no tabbable descendants).
    Container,
    /// Nothing could take focus.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Where focus went when a trap deactivated.
pub enum RestoredFocus {
    /// The caller's `final_focus` target.
    FinalTarget,
    /// The element that held focus before activation.
    PreviouslyFocused,
    /// Focus was left to the host.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the trap reacts to.
pub enum Key {
    /// Tab key.
    Tab,
    /// Escape key.
    Escape,
    /// Any other key.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Normalized key press.
pub struct KeyInput {
    /// Key identity.
    pub key: Key,
    /// Whether Shift was held.
    pub shift: bool,
}

impl KeyInput {
    /// Normalizes a `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str, shift: bool) -> Self {
        let key = match name {
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        };
        Self { key, shift }
    }

    /// Tab press.
    pub fn tab() -> Self {
        Self {
            key: Key::Tab,
            shift: false,
        }
    }

    /// Shift+Tab press.
    pub fn shift_tab() -> Self {
        Self {
            key: Key::Tab,
            shift: true,
        }
    }

    /// Escape press.
    pub fn escape() -> Self {
        Self {
            key: Key::Escape,
            shift: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of routing a key press through the trap.
pub enum TrapKey {
    /// The trap did not act; the host default applies.
    Ignored,
    /// Focus was moved to the opposite edge of the scope; the host default must be prevented.
    Wrapped,
    /// The scope is empty and focus was kept on the container; the host default must be
    /// prevented.
    Contained,
    /// Escape was pressed inside the trap.
    Escape,
}

impl TrapKey {
    /// Whether the host's default key action must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Wrapped | Self::Contained)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// An active focus trap around one container.
pub struct FocusTrap<N> {
    container: N,
    return_to: Option<N>,
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    /// Activates a trap on `container` and moves focus into it.
    ///
    /// The element focused before activation is remembered for [`FocusTrap::deactivate`]
    /// unless it already sits inside the container.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::ContainerDetached`] when the container is not attached yet.
    pub fn activate<H>(
        host: &H,
        container: N,
        options: &TrapOptions,
    ) -> Result<(Self, InitialFocus), FocusError>
    where
        H: FocusHost<Node = N>,
    {
        let previously_focused = host.active_element();
        Self::activate_returning_to(host, container, previously_focused, options)
    }

    /// Activates a trap whose return target was sampled before the container was committed.
    ///
    /// Focus moved into the container while it mounted (an `autofocus` field, a child focusing
    /// itself on load) does not replace `return_to`. A `return_to` inside the container is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::ContainerDetached`] when the container is not attached yet.
    pub fn activate_returning_to<H>(
        host: &H,
        container: N,
        return_to: Option<N>,
        options: &TrapOptions,
    ) -> Result<(Self, InitialFocus), FocusError>
    where
        H: FocusHost<Node = N>,
    {
        if !host.is_connected(&container) {
            return Err(FocusError::ContainerDetached);
        }

        let return_to = return_to.filter(|node| !host.contains(&container, node));
        let trap = Self {
            container,
            return_to,
        };
        let initial = trap.focus_initial(host, options);
        Ok((trap, initial))
    }

    fn focus_initial<H>(&self, host: &H, options: &TrapOptions) -> InitialFocus
    where
        H: FocusHost<Node = N>,
    {
        let requested = options
            .initial_focus
            .as_ref()
            .and_then(|target| host.resolve(target))
            .filter(|node| host.contains(&self.container, node));
        if let Some(node) = requested {
            if host.focus(&node) {
                return InitialFocus::Requested;
            }
        }

        let scope = FocusScope::collect(host, &self.container);
        if scope.tabbable().iter().any(|node| host.focus(node)) {
            return InitialFocus::FirstTabbable;
        }

        if host.focus(&self.container) {
            InitialFocus::Container
        } else {
            InitialFocus::Unavailable
        }
    }

    /// Container the trap is bound to.
    pub fn container(&self) -> &N {
        &self.container
    }

    /// Element that will receive focus back on deactivation, when return focus applies.
    pub fn return_target(&self) -> Option<&N> {
        self.return_to.as_ref()
    }

    /// Routes a key press that originated inside the container.
    ///
    /// The scope is recomputed on every Tab so content that changed while the dialog was open is
    /// honored.
    pub fn handle_key<H>(&self, host: &H, input: KeyInput) -> TrapKey
    where
        H: FocusHost<Node = N>,
    {
        match input.key {
            Key::Escape => TrapKey::Escape,
            Key::Other => TrapKey::Ignored,
            Key::Tab => self.handle_tab(host, input.shift),
        }
    }

    fn handle_tab<H>(&self, host: &H, backwards: bool) -> TrapKey
    where
        H: FocusHost<Node = N>,
    {
        let scope = FocusScope::collect(host, &self.container);
        let (Some(first), Some(last)) = (scope.first(), scope.last()) else {
            host.focus(&self.container);
            return TrapKey::Contained;
        };

        // Focus on the container or an untabbable node re-enters the scope from the edge the
        // key points at.
        let active = host
            .active_element()
            .filter(|node| scope.tabbable().contains(node));
        let target = match active {
            Some(node) if backwards && node == *first => last,
            Some(node) if !backwards && node == *last => first,
            Some(_) => return TrapKey::Ignored,
            None if backwards => last,
            None => first,
        };

        host.focus(target);
        TrapKey::Wrapped
    }

    /// Releases the trap and restores focus.
    ///
    /// `final_focus` wins when it resolves to an attached element; otherwise the previously
    /// focused element is used when `return_focus` is set. Detached targets are skipped so
    /// focus never lands on an element that is no longer rendered.
    pub fn deactivate<H>(self, host: &H, options: &TrapOptions) -> RestoredFocus
    where
        H: FocusHost<Node = N>,
    {
        restore_focus(host, self.return_to, options)
    }
}

/// Applies the close-time focus policy: `final_focus`, then `return_to` when `return_focus` is
/// set, skipping targets that are no longer attached.
pub(crate) fn restore_focus<H, N>(
    host: &H,
    return_to: Option<N>,
    options: &TrapOptions,
) -> RestoredFocus
where
    H: FocusHost<Node = N>,
    N: Clone + PartialEq,
{
    let final_target = options
        .final_focus
        .as_ref()
        .and_then(|target| host.resolve(target));
    if let Some(node) = final_target {
        if host.focus(&node) {
            return RestoredFocus::FinalTarget;
        }
    }

    if options.return_focus {
        if let Some(node) = return_to.filter(|node| host.is_connected(node)) {
            if host.focus(&node) {
                return RestoredFocus::PreviouslyFocused;
            }
        }
    }

    RestoredFocus::Skipped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::{ElementSpec, MemoryFocusHost, MemoryNode};

    struct Fixture {
        host: MemoryFocusHost,
        trigger: MemoryNode,
        panel: MemoryNode,
        close: MemoryNode,
        cancel: MemoryNode,
        apply: MemoryNode,
    }

    fn fixture() -> Fixture {
        let host = MemoryFocusHost::new();
        let trigger = host.append(host.body(), ElementSpec::button().with_id("trigger"));
        let panel = host.append(host.body(), ElementSpec::tab_index(-1));
        let close = host.append(panel, ElementSpec::button().with_id("close"));
        host.append(panel, ElementSpec::plain());
        let cancel = host.append(panel, ElementSpec::button().with_id("cancel"));
        let apply = host.append(panel, ElementSpec::button().with_id("apply"));
        Fixture {
            host,
            trigger,
            panel,
            close,
            cancel,
            apply,
        }
    }

    #[test]
    fn activation_focuses_first_tabbable_and_remembers_trigger() {
        let f = fixture();
        f.host.focus(&f.trigger);

        let (trap, initial) =
            FocusTrap::activate(&f.host, f.panel, &TrapOptions::default()).expect("activate");

        assert_eq!(initial, InitialFocus::FirstTabbable);
        assert_eq!(f.host.focused(), Some(f.close));
        assert_eq!(trap.return_target(), Some(&f.trigger));
    }

    #[test]
    fn requested_target_outside_container_falls_back_to_scope() {
        let f = fixture();
        let options = TrapOptions {
            initial_focus: Some(FocusTarget::id("trigger")),
            ..TrapOptions::default()
        };

        let (_, initial) = FocusTrap::activate(&f.host, f.panel, &options).expect("activate");

        assert_eq!(initial, InitialFocus::FirstTabbable);
        assert_eq!(f.host.focused(), Some(f.close));
    }

    #[test]
    fn detached_container_is_rejected() {
        let f = fixture();
        f.host.detach(f.panel);

        let result = FocusTrap::activate(&f.host, f.panel, &TrapOptions::default());

        assert_eq!(result, Err(FocusError::ContainerDetached));
    }

    #[test]
    fn tab_wraps_between_edges_and_ignores_middle() {
        let f = fixture();
        let (trap, _) =
            FocusTrap::activate(&f.host, f.panel, &TrapOptions::default()).expect("activate");

        f.host.focus(&f.apply);
        assert_eq!(trap.handle_key(&f.host, KeyInput::tab()), TrapKey::Wrapped);
        assert_eq!(f.host.focused(), Some(f.close));

        assert_eq!(
            trap.handle_key(&f.host, KeyInput::shift_tab()),
            TrapKey::Wrapped
        );
        assert_eq!(f.host.focused(), Some(f.apply));

        f.host.focus(&f.cancel);
        assert_eq!(trap.handle_key(&f.host, KeyInput::tab()), TrapKey::Ignored);
        assert_eq!(f.host.focused(), Some(f.cancel));
    }

    #[test]
    fn tab_from_container_enters_the_scope() {
        let f = fixture();
        let (trap, _) =
            FocusTrap::activate(&f.host, f.panel, &TrapOptions::default()).expect("activate");
        f.host.focus(&f.panel);

        assert_eq!(
            trap.handle_key(&f.host, KeyInput::shift_tab()),
            TrapKey::Wrapped
        );
        assert_eq!(f.host.focused(), Some(f.apply));
    }

    #[test]
    fn tab_in_empty_scope_stays_on_container() {
        let host = MemoryFocusHost::new();
        let panel = host.append(host.body(), ElementSpec::tab_index(-1));
        host.append(panel, ElementSpec::plain());
        let (trap, initial) =
            FocusTrap::activate(&host, panel, &TrapOptions::default()).expect("activate");
        assert_eq!(initial, InitialFocus::Container);

        let outcome = trap.handle_key(&host, KeyInput::tab());

        assert_eq!(outcome, TrapKey::Contained);
        assert!(outcome.prevents_default());
        assert_eq!(host.focused(), Some(panel));
    }

    #[test]
    fn escape_and_other_keys_are_reported_without_moving_focus() {
        let f = fixture();
        let (trap, _) =
            FocusTrap::activate(&f.host, f.panel, &TrapOptions::default()).expect("activate");
        let calls = f.host.focus_calls();

        assert_eq!(
            trap.handle_key(&f.host, KeyInput::escape()),
            TrapKey::Escape
        );
        assert_eq!(
            trap.handle_key(&f.host, KeyInput::from_key_name("a", false)),
            TrapKey::Ignored
        );
        assert_eq!(f.host.focus_calls(), calls);
    }

    #[test]
    fn return_target_sampled_before_mount_survives_autofocus() {
        let f = fixture();
        f.host.focus(&f.trigger);
        let before_mount = f.host.active_element();
        f.host.focus(&f.cancel);

        let (trap, initial) = FocusTrap::activate_returning_to(
            &f.host,
            f.panel,
            before_mount,
            &TrapOptions::default(),
        )
        .expect("activate");

        assert_eq!(initial, InitialFocus::FirstTabbable);
        assert_eq!(trap.return_target(), Some(&f.trigger));
        f.host.detach(f.panel);
        assert_eq!(
            trap.deactivate(&f.host, &TrapOptions::default()),
            RestoredFocus::PreviouslyFocused
        );
        assert_eq!(f.host.focused(), Some(f.trigger));
    }

    #[test]
    fn return_target_inside_container_is_discarded() {
        let f = fixture();

        let (trap, _) = FocusTrap::activate_returning_to(
            &f.host,
            f.panel,
            Some(f.apply),
            &TrapOptions::default(),
        )
        .expect("activate");

        assert_eq!(trap.return_target(), None);
    }

    #[test]
    fn deactivate_skips_detached_return_target() {
        let f = fixture();
        f.host.focus(&f.trigger);
        let (trap, _) =
            FocusTrap::activate(&f.host, f.panel, &TrapOptions::default()).expect("activate");
        f.host.detach(f.trigger);

        let restored = trap.deactivate(&f.host, &TrapOptions::default());

        assert_eq!(restored, RestoredFocus::Skipped);
    }

    #[test]
    fn disabled_return_focus_leaves_focus_to_host() {
        let f = fixture();
        f.host.focus(&f.trigger);
        let options = TrapOptions {
            return_focus: false,
            ..TrapOptions::default()
        };
        let (trap, _) = FocusTrap::activate(&f.host, f.panel, &options).expect("activate");
        f.host.detach(f.panel);

        assert_eq!(trap.deactivate(&f.host, &options), RestoredFocus::Skipped);
        assert_eq!(f.host.focused(), None);
    }

    #[test]
    fn key_names_normalize() {
        assert_eq!(KeyInput::from_key_name("Esc", false), KeyInput::escape());
        assert_eq!(KeyInput::from_key_name("Tab", true), KeyInput::shift_tab());
        assert_eq!(KeyInput::from_key_name("Enter", false).key, Key::Other);
    }
}
