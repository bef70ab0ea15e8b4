//! Dialog showcase: one trigger per configuration.

use leptos::*;
use system_ui::prelude::*;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Fusce rutrum augue \
sapien, nec tincidunt risus ullamcorper vehicula. Mauris justo dolor, euismod sed lorem in, \
pretium vulputate enim. Praesent blandit eu sem sed vehicula.";

const INITIAL_FOCUS_ID: &str = "custom-initial-focus-target";
const FINAL_FOCUS_ID: &str = "custom-final-focus-target";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Dialog configurations shown on the gallery page.
pub enum GalleryStory {
    /// Header, content, and footer actions.
    Complete,
    /// Large panel width.
    Large,
    /// Overlay clicks ignored.
    StayOpenOnOverlayClick,
    /// Focus starts on a chosen paragraph.
    CustomInitialFocus,
    /// Focus lands on a paragraph after closing.
    CustomFinalFocus,
    /// Confirmation opened from inside another dialog.
    Nested,
    /// Content taller than the viewport.
    OverflowingContent,
    /// Nothing tabbable inside the panel.
    WithoutFocusableElements,
    /// Alert dialog with a single acknowledgement.
    AlertDialog,
    /// Alert dialog guarding a destructive action.
    AlertDialogDestructive,
}

impl GalleryStory {
    /// Gallery order.
    pub const ALL: [Self; 10] = [
        Self::Complete,
        Self::Large,
        Self::StayOpenOnOverlayClick,
        Self::CustomInitialFocus,
        Self::CustomFinalFocus,
        Self::Nested,
        Self::OverflowingContent,
        Self::WithoutFocusableElements,
        Self::AlertDialog,
        Self::AlertDialogDestructive,
    ];

    /// Stable slug used for element ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Large => "large",
            Self::StayOpenOnOverlayClick => "stay-open-on-overlay-click",
            Self::CustomInitialFocus => "custom-initial-focus",
            Self::CustomFinalFocus => "custom-final-focus",
            Self::Nested => "nested",
            Self::OverflowingContent => "overflowing-content",
            Self::WithoutFocusableElements => "without-focusable-elements",
            Self::AlertDialog => "alert-dialog",
            Self::AlertDialogDestructive => "alert-dialog-destructive",
        }
    }

    /// Human-readable section heading.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Large => "Large",
            Self::StayOpenOnOverlayClick => "Stay open on overlay click",
            Self::CustomInitialFocus => "Custom initial focus",
            Self::CustomFinalFocus => "Custom final focus",
            Self::Nested => "Nested",
            Self::OverflowingContent => "Overflowing content",
            Self::WithoutFocusableElements => "Without focusable elements",
            Self::AlertDialog => "Alert dialog",
            Self::AlertDialogDestructive => "Alert dialog: destructive",
        }
    }

    fn trigger_id(self) -> String {
        format!("open-{}", self.slug())
    }
}

#[component]
pub fn DialogGallery() -> impl IntoView {
    view! {
        <div class="dialog-gallery" style="max-width: 660px; margin: 0 auto;">
            <Stack space=Space::Three>
                <Heading level=HeadingLevel::H1>"Dialogs"</Heading>
                {GalleryStory::ALL
                    .into_iter()
                    .map(|story| view! { <StorySection story /> })
                    .collect_view()}
            </Stack>
        </div>
    }
}

#[component]
fn StorySection(story: GalleryStory) -> impl IntoView {
    let open = create_rw_signal(false);
    let dismiss = Callback::new(move |_| open.set(false));

    let dialog = match story {
        GalleryStory::Complete => view! { <StandardDialog open dismiss /> }.into_view(),
        GalleryStory::Large => {
            view! { <StandardDialog open dismiss size=DialogSize::Large /> }.into_view()
        }
        GalleryStory::StayOpenOnOverlayClick => {
            view! { <StandardDialog open dismiss close_on_overlay_click=false /> }.into_view()
        }
        GalleryStory::CustomInitialFocus => {
            view! { <InitialFocusDialog open dismiss /> }.into_view()
        }
        GalleryStory::CustomFinalFocus => view! { <FinalFocusDialog open dismiss /> }.into_view(),
        GalleryStory::Nested => view! { <NestedDialogs open dismiss /> }.into_view(),
        GalleryStory::OverflowingContent => {
            view! { <OverflowingDialog open dismiss /> }.into_view()
        }
        GalleryStory::WithoutFocusableElements => view! { <BareDialog open dismiss /> }.into_view(),
        GalleryStory::AlertDialog => view! { <AcknowledgeDialog open dismiss /> }.into_view(),
        GalleryStory::AlertDialogDestructive => {
            view! { <DestructiveDialog open dismiss /> }.into_view()
        }
    };

    view! {
        <section class="gallery-story" data-story=story.slug()>
            <Stack space=Space::One>
                <Heading level=HeadingLevel::H3>{story.title()}</Heading>
                <Cluster>
                    <Button
                        id=story.trigger_id()
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| open.set(true))
                    >
                        "Open dialog"
                    </Button>
                </Cluster>
                {dialog}
            </Stack>
        </section>
    }
}

#[component]
fn ApplyActions(dismiss: Callback<()>) -> impl IntoView {
    view! {
        <DialogFooter>
            <DialogActions>
                <Button on_click=Callback::new(move |_| dismiss.call(()))>"Cancel"</Button>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=Callback::new(move |_| dismiss.call(()))
                >
                    "Apply"
                </Button>
            </DialogActions>
        </DialogFooter>
    }
}

#[component]
fn StandardDialog(
    open: RwSignal<bool>,
    dismiss: Callback<()>,
    #[prop(default = DialogSize::Regular)] size: DialogSize,
    #[prop(default = true)] close_on_overlay_click: bool,
) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss size close_on_overlay_click let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Dialog title"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <p>{LOREM}</p>
            </DialogContent>
            <ApplyActions dismiss />
        </Dialog>
    }
}

#[component]
fn InitialFocusDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss initial_focus=INITIAL_FOCUS_ID let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Dialog title"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <Stack space=Space::Two>
                    <p id=INITIAL_FOCUS_ID tabindex="0">
                        "This paragraph receives focus when the dialog opens."
                    </p>
                    <p>{LOREM}</p>
                </Stack>
            </DialogContent>
            <ApplyActions dismiss />
        </Dialog>
    }
}

#[component]
fn FinalFocusDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <p id=FINAL_FOCUS_ID tabindex="0">
            "This paragraph receives focus after the dialog closes."
        </p>
        <Dialog open on_close=dismiss final_focus=FINAL_FOCUS_ID let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Dialog title"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <p>{LOREM}</p>
            </DialogContent>
            <ApplyActions dismiss />
        </Dialog>
    }
}

#[component]
fn NestedDialogs(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    let confirming = create_rw_signal(false);
    let cancel_confirmation = Callback::new(move |_| confirming.set(false));
    let confirm = Callback::new(move |_| {
        confirming.set(false);
        dismiss.call(());
    });

    view! {
        <Dialog open on_close=dismiss role=DialogRole::AlertDialog let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Delete user?"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <p>"This will permanently delete John Doe. This action cannot be undone."</p>
            </DialogContent>
            <DialogFooter>
                <DialogActions>
                    <Button on_click=Callback::new(move |_| dismiss.call(()))>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        on_click=Callback::new(move |_| confirming.set(true))
                    >
                        "Delete user"
                    </Button>
                </DialogActions>
            </DialogFooter>
        </Dialog>
        <Dialog
            open=confirming
            on_close=cancel_confirmation
            role=DialogRole::AlertDialog
            let:dialog
        >
            <DialogHeader>
                <DialogTitle dialog>"Confirm user deletion"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <p>"This will permanently delete John Doe. This action cannot be undone."</p>
            </DialogContent>
            <DialogFooter>
                <DialogActions>
                    <Button on_click=Callback::new(move |_| cancel_confirmation.call(()))>
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        on_click=Callback::new(move |_| confirm.call(()))
                    >
                        "Delete user"
                    </Button>
                </DialogActions>
            </DialogFooter>
        </Dialog>
    }
}

#[component]
fn OverflowingDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Dialog title"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <Stack space=Space::Two>
                    {(0..30).map(|_| view! { <p>{LOREM}</p> }).collect_view()}
                </Stack>
            </DialogContent>
            <ApplyActions dismiss />
        </Dialog>
    }
}

#[component]
fn BareDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Dialog title"</DialogTitle>
            </DialogHeader>
            <DialogContent>
                <p>
                    "The dialog panel receives focus when nothing inside it is focusable. "
                    "Press Escape to close."
                </p>
            </DialogContent>
        </Dialog>
    }
}

#[component]
fn AcknowledgeDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss role=DialogRole::AlertDialog let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Alert"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <Alert>
                    <p>
                        "This is an example of an alert message important enough to deserve a modal dialog."
                    </p>
                </Alert>
            </DialogContent>
            <DialogFooter>
                <DialogActions>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| dismiss.call(()))
                    >
                        "Got it"
                    </Button>
                </DialogActions>
            </DialogFooter>
        </Dialog>
    }
}

#[component]
fn DestructiveDialog(open: RwSignal<bool>, dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open on_close=dismiss role=DialogRole::AlertDialog let:dialog>
            <DialogHeader>
                <DialogTitle dialog>"Delete user?"</DialogTitle>
                <DialogCloseButton dialog />
            </DialogHeader>
            <DialogContent>
                <Alert variant=AlertVariant::Error>
                    <p>"This will permanently delete John Doe. This action cannot be undone."</p>
                </Alert>
            </DialogContent>
            <DialogFooter>
                <DialogActions>
                    <Button on_click=Callback::new(move |_| dismiss.call(()))>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Destructive
                        on_click=Callback::new(move |_| dismiss.call(()))
                    >
                        "Delete user"
                    </Button>
                </DialogActions>
            </DialogFooter>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn story_slugs_and_ids_are_unique() {
        let slugs: HashSet<&str> = GalleryStory::ALL.iter().map(|story| story.slug()).collect();
        assert_eq!(slugs.len(), GalleryStory::ALL.len());

        let triggers: HashSet<String> = GalleryStory::ALL
            .iter()
            .map(|story| story.trigger_id())
            .collect();
        assert_eq!(triggers.len(), GalleryStory::ALL.len());
        assert_eq!(GalleryStory::Nested.trigger_id(), "open-nested");
        assert_ne!(INITIAL_FOCUS_ID, FINAL_FOCUS_ID);
    }

    #[test]
    fn slugs_are_dom_id_safe() {
        for story in GalleryStory::ALL {
            assert!(story
                .slug()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
            assert!(!story.title().is_empty());
        }
    }
}
