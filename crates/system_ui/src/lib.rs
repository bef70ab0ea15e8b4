//! Themed Leptos component library.
//!
//! The crate owns the presentational primitives (buttons, form controls, layout, alerts,
//! headings, icons), the theme token pipeline that renders them, and the modal [`Dialog`]
//! whose focus management is delegated to the headless `ui_focus` crate. Every component emits
//! the stable `data-ui-*` DOM contract that [`GlobalStyles`] targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod styles;
pub mod theme;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Alert, AlertVariant, Button, ButtonVariant, Cluster, Dialog, DialogActions, DialogCloseButton,
    DialogContent, DialogFooter, DialogHandle, DialogHeader, DialogRole, DialogSize, DialogTitle,
    FormControl, Heading, HeadingLevel, IconTextButton, IconTextButtonElement, InputText,
    InputTextElement, Label, LayoutJustify, Space, Stack, Textarea,
};
pub use styles::{stylesheet, GlobalStyles};
pub use ui_focus::FocusTarget;

/// Convenience imports for applications composing the component set.
pub mod prelude {
    pub use crate::{
        Alert, AlertVariant, Button, ButtonVariant, Cluster, Dialog, DialogActions,
        DialogCloseButton, DialogContent, DialogFooter, DialogHandle, DialogHeader, DialogRole,
        DialogSize, DialogTitle, FormControl, GlobalStyles, Heading, HeadingLevel, Icon, IconName,
        IconSize, IconTextButton, IconTextButtonElement, InputText, InputTextElement, Label,
        LayoutJustify, Space, Stack, Textarea,
    };
}
