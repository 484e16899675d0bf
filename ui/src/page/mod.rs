//! Landing page components and the controller that owns their state.
//!
//! `LandingPage` loads the preferred language before anything interactive is
//! rendered; every section below it reads shared state through [`PageSignals`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::core::config::PageConfig;
use crate::core::contact::Notice;
use crate::core::header::{HeaderScroll, HeaderStyle};
use crate::core::language::Language;
use crate::core::loader::{self, load_with_origin, DefaultLocaleSource};
use crate::core::localization::{prepare_switch, resolve_initial, Localization};
use crate::core::navigation::MobileMenu;
use crate::core::platform::{self, RevealObserver, WindowListener};
use crate::core::reveal::RevealTracker;
use crate::core::storage::{self, load_language, DefaultPreferences};

mod contact;
mod header;
mod image;
mod reveal;
mod sections;
mod text;

pub use contact::{Contact, NoticeToast};
pub use header::{AnchorLink, SiteHeader};
pub use image::SafeImage;
pub use sections::{About, Features, Footer, Hero};
pub use text::{use_placeholder, use_text, Text};

/// Reactive page state shared with every section.
#[derive(Clone, Copy)]
pub struct PageSignals {
    pub localization: Signal<Localization>,
    pub menu: Signal<MobileMenu>,
    pub header_style: Signal<HeaderStyle>,
    pub reveal: Signal<RevealTracker>,
    pub notice: Signal<Option<Notice>>,
}

/// Platform backends for locale bundles and the language preference.
#[derive(Clone)]
pub struct PageServices {
    pub source: DefaultLocaleSource,
    pub prefs: DefaultPreferences,
}

impl PageServices {
    pub fn for_platform(config: &PageConfig) -> Self {
        Self {
            source: loader::default_source(config),
            prefs: storage::default_preferences(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct RevealHandle(pub(crate) Rc<Option<RevealObserver>>);

#[component]
pub fn LandingPage() -> Element {
    let config = use_hook(|| try_consume_context::<PageConfig>().unwrap_or_default());
    use_context_provider(|| config.clone());

    let services = use_context_provider(|| PageServices::for_platform(&config));

    let localization = use_signal(Localization::default);
    let menu = use_signal(MobileMenu::default);
    let header_style = use_signal(HeaderStyle::default);
    let reveal = use_signal(RevealTracker::default);
    let notice = use_signal(|| Option::<Notice>::None);
    let signals = use_context_provider(|| PageSignals {
        localization,
        menu,
        header_style,
        reveal,
        notice,
    });

    use_context_provider(|| {
        let mut tracker = reveal;
        RevealHandle(Rc::new(RevealObserver::new(
            config.reveal_threshold,
            &config.reveal_root_margin,
            move |id| {
                tracker.with_mut(|t| {
                    t.reveal(&id);
                });
            },
        )))
    });

    let mut ready = use_signal(|| false);
    let listeners: Rc<RefCell<Vec<WindowListener>>> = use_hook(|| Rc::new(RefCell::new(Vec::new())));

    use_future(move || {
        let services = services.clone();
        let config = config.clone();
        let listeners = listeners.clone();
        let mut localization = signals.localization;
        async move {
            let stored = load_language(&services.prefs, &config.preference_key);
            let browser = platform::browser_language();
            let requested = resolve_initial(stored.map(Language::code), browser.as_deref());

            let loaded = load_with_origin(&services.source, requested.code()).await;
            let language = loaded.served_language().unwrap_or(requested);
            localization.set(Localization::initialized(language, loaded.bundle));

            // Interactive wiring only after the first bundle is bound.
            listeners
                .borrow_mut()
                .extend(wire_window_listeners(&config, signals.header_style, signals.menu));
            ready.set(true);
            info!(%language, "landing page initialized");
        }
    });

    use_effect(move || {
        let code = localization.read().language().code();
        platform::mark_document_language(code);
    });

    let code = localization.read().language().code();

    rsx! {
        div { class: "landing", lang: "{code}", "data-lang": "{code}",
            if !ready() {
                div { class: "page-loading", aria_busy: "true",
                    div { class: "page-loading__spinner" }
                }
            } else {
                SiteHeader {}
                main {
                    Hero {}
                    Features {}
                    About {}
                    Contact {}
                }
                Footer {}
                NoticeToast {}
            }
        }
    }
}

fn wire_window_listeners(
    config: &PageConfig,
    mut header_style: Signal<HeaderStyle>,
    mut menu: Signal<MobileMenu>,
) -> Vec<WindowListener> {
    let mut tracker = HeaderScroll::new(config.header_threshold_px);
    let scroll = platform::listen_window("scroll", move || {
        let Some(y) = platform::scroll_y() else {
            return;
        };
        let next = tracker.on_scroll(y);
        if *header_style.peek() != next {
            header_style.set(next);
        }
    });

    let breakpoint = config.mobile_breakpoint_px;
    let resize = platform::listen_window("resize", move || {
        if let Some(width) = platform::viewport_width() {
            menu.with_mut(|m| {
                m.on_resize(width, breakpoint);
            });
        }
    });

    scroll.into_iter().chain(resize).collect()
}

/// Toggle to the other language. The control is disabled while this runs,
/// and `begin_switch` refuses a second concurrent switch.
pub(crate) fn switch_language(
    mut localization: Signal<Localization>,
    services: PageServices,
    preference_key: String,
) {
    let Some(target) = localization.with_mut(Localization::begin_switch) else {
        return;
    };

    spawn(async move {
        let prepared =
            prepare_switch(target, &services.source, &services.prefs, &preference_key).await;
        localization.with_mut(|l| l.settle_switch(prepared));
    });
}
