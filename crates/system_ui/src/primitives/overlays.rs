use ui_focus::{DialogController, DialogOptions, FocusTarget, InitialFocus, LabelId, RestoredFocus};
use ui_focus_web::{defer, key_input, DomFocusHost};

use super::*;

type PanelController = DialogController<web_sys::HtmlElement>;

#[derive(Clone, Copy)]
/// Session handle given to the dialog body through `let:dialog`.
///
/// Sub-parts take it as a prop to reach the label id and the dismissal callback.
pub struct DialogHandle {
    label: StoredValue<LabelId>,
    controller: StoredValue<PanelController>,
    on_close: Option<Callback<()>>,
}

impl DialogHandle {
    /// DOM id linking the panel's `aria-labelledby` to [`DialogTitle`].
    pub fn label_id(&self) -> String {
        self.label
            .try_with_value(ToString::to_string)
            .unwrap_or_default()
    }

    /// Requests dismissal as if the close button was pressed.
    pub fn close(&self) {
        let requested = self
            .controller
            .try_with_value(|controller| controller.close_button().is_some());
        if requested == Some(true) {
            self.dismiss();
        }
    }

    fn dismiss(&self) {
        if let Some(on_close) = self.on_close.as_ref() {
            on_close.call(());
        }
    }

    fn begin_open(&self) {
        let outcome = self
            .controller
            .try_update_value(|controller| controller.begin_open(&DomFocusHost));
        if let Some(Err(err)) = outcome {
            logging::warn!("dialog focus capture failed: {err}");
        }
    }

    fn activate(&self, panel: web_sys::HtmlElement) {
        let outcome = self
            .controller
            .try_update_value(|controller| controller.open(&DomFocusHost, panel));
        match outcome {
            Some(Ok(InitialFocus::Unavailable)) => {
                logging::debug_warn!("dialog opened but no element accepted focus");
            }
            Some(Err(err)) => logging::warn!("dialog focus activation failed: {err}"),
            Some(Ok(_)) | None => {}
        }
    }

    fn release(&self) {
        let outcome = self.controller.try_update_value(|controller| {
            (controller.is_open() || controller.is_mounting())
                .then(|| controller.close(&DomFocusHost))
        });
        match outcome.flatten() {
            Some(Ok(RestoredFocus::Skipped)) => {
                logging::debug_warn!("dialog closed without a focus target to restore");
            }
            Some(Err(err)) => logging::warn!("dialog focus release failed: {err}"),
            Some(Ok(_)) | None => {}
        }
    }

    fn overlay_click(&self) {
        let requested = self
            .controller
            .try_with_value(|controller| controller.overlay_click().is_some());
        if requested == Some(true) {
            self.dismiss();
        }
    }

    fn key_down(&self, ev: &KeyboardEvent) {
        let Some(outcome) = self
            .controller
            .try_with_value(|controller| controller.key_down(&DomFocusHost, key_input(ev)))
        else {
            return;
        };
        if outcome.prevent_default {
            ev.prevent_default();
        }
        if outcome.dismiss.is_some() {
            ev.stop_propagation();
            self.dismiss();
        }
    }
}

fn document_body() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(web_sys::Element::from)
}

#[component]
/// Modal dialog rendered through a portal while `open` is true.
///
/// Opening moves focus into the panel once it is attached (the `initial_focus` element, else
/// the first tabbable element, else the panel itself) and keeps Tab inside it. Escape and, unless
/// disabled, overlay clicks call `on_close`; the open flag itself stays with the caller. Closing
/// restores focus to `final_focus`, else to the element focused before opening.
///
/// The body receives a [`DialogHandle`]:
///
/// ```ignore
/// <Dialog open=open on_close=Callback::new(move |_| open.set(false)) let:dialog>
///     <DialogHeader>
///         <DialogTitle dialog>"Title"</DialogTitle>
///         <DialogCloseButton dialog />
///     </DialogHeader>
/// </Dialog>
/// ```
pub fn Dialog<CF, IV>(
    /// Caller-owned open flag.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Dismissal request from Escape, the overlay, or the close button.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    #[prop(default = true)] close_on_overlay_click: bool,
    /// Id of the element to focus on open.
    #[prop(optional, into)]
    initial_focus: Option<FocusTarget>,
    /// Id of the element to focus on close.
    #[prop(optional, into)]
    final_focus: Option<FocusTarget>,
    /// Return focus to the previously focused element when no `final_focus` is set.
    #[prop(default = true)]
    return_focus: bool,
    #[prop(default = DialogSize::Regular)] size: DialogSize,
    #[prop(default = DialogRole::Dialog)] role: DialogRole,
    /// Portal target; the document body when omitted.
    #[prop(optional)]
    mount: Option<web_sys::Element>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: CF,
) -> impl IntoView
where
    CF: Fn(DialogHandle) -> IV + 'static,
    IV: IntoView + 'static,
{
    let mut options = DialogOptions::default()
        .close_on_overlay_click(close_on_overlay_click)
        .return_focus(return_focus);
    if let Some(target) = initial_focus {
        options = options.initial_focus(target);
    }
    if let Some(target) = final_focus {
        options = options.final_focus(target);
    }

    let handle = DialogHandle {
        label: store_value(LabelId::next()),
        controller: store_value(PanelController::new(options)),
        on_close,
    };
    let mount = store_value(mount);
    let children = store_value(children);

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <DialogLayer
                handle
                size
                role
                layout_class
                mount=mount.get_value().or_else(document_body)
            >
                {children.with_value(|children| children(handle))}
            </DialogLayer>
        </Show>
    }
}

#[component]
fn DialogLayer(
    handle: DialogHandle,
    size: DialogSize,
    role: DialogRole,
    layout_class: Option<&'static str>,
    mount: Option<web_sys::Element>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(mount) = mount else {
        logging::warn!("dialog render target unavailable; nothing mounted");
        return ().into_view();
    };

    // Sampled before the panel exists so mount-time focus moves cannot replace it.
    handle.begin_open();

    let panel_ref = create_node_ref::<html::Section>();
    panel_ref.on_load(move |panel| {
        let panel: &web_sys::HtmlElement = &panel;
        let panel = panel.clone();
        defer(move || handle.activate(panel));
    });
    on_cleanup(move || handle.release());

    view! {
        <Portal mount=mount>
            <div class="ui-dialog-layer" data-ui-primitive="true" data-ui-kind="dialog-layer">
                <div
                    class="ui-dialog-overlay"
                    data-dialog-overlay="true"
                    data-ui-primitive="true"
                    data-ui-kind="dialog-overlay"
                    on:click=move |_| handle.overlay_click()
                ></div>
                <section
                    node_ref=panel_ref
                    class=merge_layout_class("ui-dialog", layout_class)
                    role=role.token()
                    aria-modal="true"
                    aria-labelledby=handle.label_id()
                    tabindex="-1"
                    data-ui-primitive="true"
                    data-ui-kind="dialog"
                    data-ui-size=size.token()
                    on:keydown=move |ev: KeyboardEvent| handle.key_down(&ev)
                >
                    {children()}
                </section>
            </div>
        </Portal>
    }
    .into_view()
}

#[component]
/// Title row: title on the left, close button on the right.
pub fn DialogHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-dialog-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dialog-header"
        >
            {children()}
        </header>
    }
}

#[component]
/// Heading that labels the dialog.
pub fn DialogTitle(
    dialog: DialogHandle,
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    children: Children,
) -> impl IntoView {
    view! {
        <Heading level id=dialog.label_id() ui_slot="dialog-title">
            {children()}
        </Heading>
    }
}

#[component]
/// Cross button that requests dismissal, then runs `on_click`.
pub fn DialogCloseButton(
    dialog: DialogHandle,
    #[prop(optional, into)] id: Option<String>,
    /// Accessible name; "Close" when omitted.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dialog-close-button"
            id=id
            aria-label=aria_label.unwrap_or_else(|| "Close".to_string())
            data-ui-primitive="true"
            data-ui-kind="dialog-close-button"
            on:click=move |ev| {
                dialog.close();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=IconName::Cross size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Scrollable dialog body.
pub fn DialogContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-dialog-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dialog-content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom strip, usually holding [`DialogActions`].
pub fn DialogFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-dialog-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dialog-footer"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Right-aligned wrapping row of footer actions.
pub fn DialogActions(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-dialog-actions", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dialog-actions"
        >
            {children()}
        </div>
    }
}
