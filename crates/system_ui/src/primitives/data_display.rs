use super::*;

#[component]
/// Section heading, `<h2>` unless another level is requested.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    match level {
        HeadingLevel::H1 => view! {
            <h1 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h1>
        }
        .into_view(),
        HeadingLevel::H2 => view! {
            <h2 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class id=id data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot>
                {children()}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Inline notice with a round severity badge. Announced through `role="alert"`.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            <span class="ui-alert-badge" data-ui-slot="alert-badge">
                <Icon icon=variant.icon() size=IconSize::Md />
            </span>
            <div data-ui-slot="alert-body">{children()}</div>
        </div>
    }
}
