use dioxus::prelude::*;
use tracing::warn;

/// Lazily loaded image that hides itself if the resource fails to load.
#[component]
pub fn SafeImage(src: &'static str, alt: &'static str, class: Option<&'static str>) -> Element {
    let mut failed = use_signal(|| false);
    let style = if failed() { "display: none" } else { "" };

    rsx! {
        img {
            src: src,
            alt: alt,
            class: class.unwrap_or_default(),
            loading: "lazy",
            style: style,
            onerror: move |_| {
                warn!(%src, "image failed to load");
                failed.set(true);
            },
        }
    }
}
