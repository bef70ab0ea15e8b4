mod gallery;
mod web_app;

pub use gallery::{DialogGallery, GalleryStory};
pub use web_app::{DatastreamPage, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
