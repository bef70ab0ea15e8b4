use super::*;

#[component]
/// Shared button primitive. Always renders `type="button"`.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            title=title
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Md /> })}
            {children()}
        </button>
    }
}

#[component]
/// Inline icon + text action rendered as a button or a link.
pub fn IconTextButton(
    icon: IconName,
    #[prop(optional)] element: IconTextButtonElement,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-icon-text-button", layout_class);
    let on_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    match element {
        IconTextButtonElement::Button => view! {
            <button
                type="button"
                class=class
                id=id
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="icon-text-button"
                data-ui-slot=ui_slot
                data-ui-element="button"
                on:click=on_click
            >
                <Icon icon size=IconSize::Sm />
                {children()}
            </button>
        }
        .into_view(),
        IconTextButtonElement::Link { href } => view! {
            <a
                href=href
                class=class
                id=id
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="icon-text-button"
                data-ui-slot=ui_slot
                data-ui-element="link"
                on:click=on_click
            >
                <Icon icon size=IconSize::Sm />
                {children()}
            </a>
        }
        .into_view(),
    }
}

struct FieldAttrs {
    layout_class: Option<&'static str>,
    id: Option<String>,
    name: Option<String>,
    placeholder: Option<String>,
    aria_label: Option<String>,
    ui_slot: Option<&'static str>,
    rows: Option<u32>,
    resize: Option<&'static str>,
    value: MaybeSignal<String>,
    disabled: MaybeSignal<bool>,
    on_input: Option<Callback<web_sys::Event>>,
    on_keydown: Option<Callback<KeyboardEvent>>,
}

fn text_field(element: InputTextElement, attrs: FieldAttrs) -> View {
    let FieldAttrs {
        layout_class,
        id,
        name,
        placeholder,
        aria_label,
        ui_slot,
        rows,
        resize,
        value,
        disabled,
        on_input,
        on_keydown,
    } = attrs;
    let class = merge_layout_class("ui-input-text", layout_class);
    let on_input = move |ev: web_sys::Event| {
        if let Some(on_input) = on_input.as_ref() {
            on_input.call(ev);
        }
    };
    let on_keydown = move |ev: KeyboardEvent| {
        if let Some(on_keydown) = on_keydown.as_ref() {
            on_keydown.call(ev);
        }
    };

    match element {
        InputTextElement::Input => view! {
            <input
                type="text"
                class=class
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="input-text"
                data-ui-slot=ui_slot
                data-ui-element="input"
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=on_input
                on:keydown=on_keydown
            />
        }
        .into_view(),
        InputTextElement::Textarea => view! {
            <textarea
                class=class
                id=id
                name=name
                placeholder=placeholder
                aria-label=aria_label
                rows=rows
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="input-text"
                data-ui-slot=ui_slot
                data-ui-element="textarea"
                data-ui-resize=resize
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
        }
        .into_view(),
    }
}

#[component]
/// Bordered text entry rendered as `<input type="text">` or `<textarea>`.
pub fn InputText(
    #[prop(optional)] element: InputTextElement,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    /// Visible rows when rendered as a textarea.
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    text_field(
        element,
        FieldAttrs {
            layout_class,
            id,
            name,
            placeholder,
            aria_label,
            ui_slot,
            rows,
            resize: None,
            value,
            disabled,
            on_input,
            on_keydown,
        },
    )
}

#[component]
/// Two-row vertically resizable [`InputText`].
pub fn Textarea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(default = 2)] rows: u32,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    text_field(
        InputTextElement::Textarea,
        FieldAttrs {
            layout_class,
            id,
            name,
            placeholder,
            aria_label,
            ui_slot,
            rows: Some(rows),
            resize: Some("vertical"),
            value,
            disabled,
            on_input,
            on_keydown,
        },
    )
}

#[component]
/// Small grey `<label>`.
pub fn Label(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Id of the labelled control when it is not a descendant.
    #[prop(optional, into)]
    html_for: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-label", layout_class)
            for=html_for
            data-ui-primitive="true"
            data-ui-kind="label"
            data-ui-slot=ui_slot
        >
            {children()}
        </label>
    }
}

#[component]
/// Labelled form field: the label text sits on the first line and the control below it,
/// both inside one `<label>` so clicking the text focuses the control.
pub fn FormControl(
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-form-control", layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-control"
        >
            <Label ui_slot="form-control-label">
                <div data-ui-slot="form-control-label-text">{label}</div>
                {children()}
            </Label>
        </div>
    }
}
