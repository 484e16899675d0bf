use dioxus::prelude::*;

use crate::core::binder::{BindingKind, BoundText};

use super::PageSignals;

/// Localized text node. `fallback` stays on screen until a bundle provides the key.
#[component]
pub fn Text(i18n: &'static str, fallback: &'static str) -> Element {
    let value = use_bound(BindingKind::Text, i18n, fallback);
    rsx! { "{value}" }
}

/// Localized string for use inside attributes or labels.
pub fn use_text(key: &'static str, fallback: &'static str) -> String {
    use_bound(BindingKind::Text, key, fallback)
}

pub fn use_placeholder(key: &'static str, fallback: &'static str) -> String {
    use_bound(BindingKind::Placeholder, key, fallback)
}

// Each call site owns one bound slot, bound on mount and again whenever a new
// bundle is installed. Switch phase changes alone leave it alone.
fn use_bound(kind: BindingKind, key: &'static str, fallback: &'static str) -> String {
    let localization = use_context::<PageSignals>().localization;
    let mut synced = use_signal(|| localization.peek().generation());
    let mut bound = use_signal(|| {
        let mut slot = BoundText::new(kind, key, fallback);
        slot.apply(localization.peek().bundle());
        slot
    });

    use_effect(move || {
        let loc = localization.read();
        if *synced.peek() == loc.generation() {
            return;
        }
        synced.set(loc.generation());
        bound.with_mut(|slot| {
            slot.apply(loc.bundle());
        });
    });

    let value = bound.read().value().to_string();
    value
}
