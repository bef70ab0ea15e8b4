use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;

use crate::gallery::DialogGallery;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Component library" />
        <Meta name="description" content="Themed components and an accessible modal dialog." />
        <GlobalStyles />

        <Router>
            <main class="site-root">
                <nav class="site-nav">
                    <A href="/">"Form"</A>
                    " · "
                    <A href="/dialogs">"Dialogs"</A>
                </nav>
                <Routes>
                    <Route path="" view=DatastreamPage />
                    <Route path="/dialogs" view=DialogGallery />
                </Routes>
            </main>
        </Router>
    }
}

const DESCRIPTION_LIMIT: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq)]
struct DatastreamDraft {
    title: String,
    description: String,
}

impl DatastreamDraft {
    fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Datastream title is required.");
        }
        if self.description.chars().count() > DESCRIPTION_LIMIT {
            return Err("Description must be 280 characters or fewer.");
        }
        Ok(())
    }
}

#[component]
pub fn DatastreamPage() -> impl IntoView {
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let status = create_rw_signal(None::<Result<(), &'static str>>);

    let apply = Callback::new(move |_| {
        let draft = DatastreamDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        status.set(Some(draft.validate()));
    });
    let cancel = Callback::new(move |_| {
        title.set(String::new());
        description.set(String::new());
        status.set(None);
    });

    view! {
        <div class="datastream-page" style="max-width: 500px; margin: 0 auto;">
            <Stack space=Space::Two>
                <Heading>"Edit datastream"</Heading>
                <Stack space=Space::Two>
                    <FormControl label="Datastream title">
                        <InputText
                            id="datastream-title"
                            value=title
                            on_input=Callback::new(move |ev| title.set(event_target_value(&ev)))
                        />
                    </FormControl>
                    <FormControl label="Description">
                        <Textarea
                            id="datastream-description"
                            value=description
                            on_input=Callback::new(move |ev| {
                                description.set(event_target_value(&ev))
                            })
                        />
                    </FormControl>
                </Stack>
                {move || {
                    status
                        .get()
                        .map(|outcome| match outcome {
                            Ok(()) => {
                                view! { <Alert>"Changes applied."</Alert> }.into_view()
                            }
                            Err(message) => {
                                view! { <Alert variant=AlertVariant::Error>{message}</Alert> }.into_view()
                            }
                        })
                }}
                <Cluster justify=LayoutJustify::Between>
                    <Cluster>
                        <IconTextButton icon=IconName::Link>"Copy link"</IconTextButton>
                        <IconTextButton icon=IconName::Code>"Get embed code"</IconTextButton>
                    </Cluster>
                    <Cluster>
                        <Button on_click=cancel>"Cancel"</Button>
                        <Button variant=ButtonVariant::Primary on_click=apply>
                            "Apply"
                        </Button>
                    </Cluster>
                </Cluster>
            </Stack>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_requires_a_title() {
        let draft = DatastreamDraft {
            title: "  ".to_string(),
            description: "Hourly readings".to_string(),
        };
        assert_eq!(draft.validate(), Err("Datastream title is required."));

        let draft = DatastreamDraft {
            title: "Temperature".to_string(),
            description: String::new(),
        };
        assert_eq!(draft.validate(), Ok(()));

        let draft = DatastreamDraft {
            title: "Temperature".to_string(),
            description: "x".repeat(DESCRIPTION_LIMIT + 1),
        };
        assert!(draft.validate().is_err());
    }
}
