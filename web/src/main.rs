use dioxus::prelude::*;

use ui::core::config::PageConfig;
use ui::LandingPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[log] failed to install logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Served from the same origin as the page: `./locales/<code>.json`.
    use_context_provider(PageConfig::default);

    rsx! {
        // Global app resources
        document::Title { "WineSoft · Wine management software" }
        document::Meta {
            name: "description",
            content: "Cellar inventory, production, sales and compliance for modern wineries.",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LandingPage {}
    }
}
