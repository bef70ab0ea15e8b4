//! Shared control, layout, data-display, and overlay primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod overlays;

pub use controls::{Button, FormControl, IconTextButton, InputText, Label, Textarea};
pub use data_display::{Alert, Heading};
pub use layout::{Cluster, Stack};
pub use overlays::{
    Dialog, DialogActions, DialogCloseButton, DialogContent, DialogFooter, DialogHandle,
    DialogHeader, DialogTitle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Outlined button in the primary text color.
    Default,
    /// Filled primary action.
    Primary,
    /// Filled destructive action.
    Destructive,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert severity.
pub enum AlertVariant {
    /// Informational notice on the info color.
    Info,
    /// Error notice on the destructive color.
    Error,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl AlertVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Error => IconName::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Steps of the theme spacing scale.
pub enum Space {
    /// 4px.
    Half,
    /// 8px.
    One,
    /// 12px.
    OneAndHalf,
    /// 16px.
    Two,
    /// 24px.
    Three,
    /// 32px.
    Four,
}

impl Default for Space {
    fn default() -> Self {
        Self::One
    }
}

impl Space {
    /// Every step in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Half,
        Self::One,
        Self::OneAndHalf,
        Self::Two,
        Self::Three,
        Self::Four,
    ];

    /// Key of this step in the `space` token scale.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Half => "0_5",
            Self::One => "1",
            Self::OneAndHalf => "1_5",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution for [`Cluster`].
pub enum LayoutJustify {
    /// Pack at the start.
    Start,
    /// Space between items.
    Between,
    /// Pack at the end.
    End,
}

impl Default for LayoutJustify {
    fn default() -> Self {
        Self::Start
    }
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Heading element level.
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    H2,
    /// `<h3>`.
    H3,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element rendered by [`InputText`].
pub enum InputTextElement {
    /// `<input type="text">`.
    Input,
    /// `<textarea>`.
    Textarea,
}

impl Default for InputTextElement {
    fn default() -> Self {
        Self::Input
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element rendered by [`IconTextButton`].
pub enum IconTextButtonElement {
    /// `<button type="button">`.
    Button,
    /// `<a href>` navigation link.
    Link {
        /// Link destination.
        href: String,
    },
}

impl Default for IconTextButtonElement {
    fn default() -> Self {
        Self::Button
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dialog panel width.
pub enum DialogSize {
    /// 540px.
    Regular,
    /// 660px.
    Large,
}

impl Default for DialogSize {
    fn default() -> Self {
        Self::Regular
    }
}

impl DialogSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// ARIA role of the dialog panel.
pub enum DialogRole {
    /// `role="dialog"`.
    Dialog,
    /// `role="alertdialog"` for interruptions that need a response.
    AlertDialog,
}

impl Default for DialogRole {
    fn default() -> Self {
        Self::Dialog
    }
}

impl DialogRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::AlertDialog => "alertdialog",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::theme::{ThemeTokens, TokenScale};

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("page-main")),
            "ui-stack page-main"
        );
    }

    #[test]
    fn defaults_match_component_contract() {
        assert_eq!(ButtonVariant::default().token(), "default");
        assert_eq!(AlertVariant::default().token(), "info");
        assert_eq!(Space::default().token(), "1");
        assert_eq!(HeadingLevel::default(), HeadingLevel::H2);
        assert_eq!(InputTextElement::default(), InputTextElement::Input);
        assert_eq!(
            IconTextButtonElement::default(),
            IconTextButtonElement::Button
        );
        assert_eq!(DialogSize::default().token(), "regular");
        assert_eq!(DialogRole::default().token(), "dialog");
        assert_eq!(DialogRole::AlertDialog.token(), "alertdialog");
    }

    #[test]
    fn alert_variants_pick_their_glyph() {
        assert_eq!(AlertVariant::Info.icon(), IconName::Info);
        assert_eq!(AlertVariant::Error.icon(), IconName::Warning);
    }

    #[test]
    fn space_steps_exist_in_the_theme() {
        let tokens = ThemeTokens::bundled().expect("bundled theme");

        for space in Space::ALL {
            assert!(
                tokens.resolve(TokenScale::Space, space.token()).is_ok(),
                "missing space token {}",
                space.token()
            );
        }
    }
}
