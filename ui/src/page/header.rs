use dioxus::prelude::*;

use crate::core::config::PageConfig;
use crate::core::navigation::fragment_target;
use crate::core::platform;

use super::text::Text;
use super::{switch_language, PageServices, PageSignals};

/// In-page link: smooth-scrolls to its fragment target and closes the
/// mobile panel on narrow viewports.
#[component]
pub fn AnchorLink(href: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let mut menu = use_context::<PageSignals>().menu;
    let breakpoint = use_context::<PageConfig>().mobile_breakpoint_px;

    rsx! {
        a {
            href: href,
            class: class.unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                let Some(id) = fragment_target(href) else {
                    return;
                };
                evt.prevent_default();
                if platform::scroll_to_fragment(id) {
                    menu.with_mut(|m| {
                        m.close_for_navigation(platform::viewport_width(), breakpoint);
                    });
                }
            },
            {children}
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let signals = use_context::<PageSignals>();
    let services = use_context::<PageServices>();
    let preference_key = use_context::<PageConfig>().preference_key;

    let mut menu = signals.menu;
    let menu_state = menu();
    let header_css = (signals.header_style)().inline_css();
    let (busy, toggle_label) = {
        let loc = signals.localization.read();
        (loc.is_busy(), loc.toggle_label())
    };

    #[cfg(debug_assertions)]
    tracing::debug!(busy, menu_open = menu_state.is_open(), "SiteHeader render");

    rsx! {
        header { class: "site-header", style: "{header_css}",
            nav { class: "navbar",
                AnchorLink { href: "#top", class: "logo",
                    span { class: "logo-mark", aria_hidden: "true", "🍷" }
                    "WineSoft"
                }

                ul { class: menu_state.panel_class(), style: menu_state.panel_style(),
                    li {
                        AnchorLink { href: "#features",
                            Text { i18n: "nav.features", fallback: "Features" }
                        }
                    }
                    li {
                        AnchorLink { href: "#about",
                            Text { i18n: "nav.about", fallback: "About" }
                        }
                    }
                    li {
                        AnchorLink { href: "#contact",
                            Text { i18n: "nav.contact", fallback: "Contact" }
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        r#type: "button",
                        class: "lang-switcher",
                        disabled: busy,
                        aria_label: "Switch language",
                        onclick: move |_| {
                            switch_language(signals.localization, services.clone(), preference_key.clone());
                        },
                        "{toggle_label}"
                    }
                    div {
                        class: menu_state.glyph_class(),
                        role: "button",
                        tabindex: 0,
                        aria_label: "Toggle navigation",
                        aria_expanded: menu_state.is_open(),
                        onclick: move |_| {
                            menu.with_mut(|m| {
                                m.toggle();
                            });
                        },
                        "{menu_state.glyph()}"
                    }
                }
            }
        }
    }
}
