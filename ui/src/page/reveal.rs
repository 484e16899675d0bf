use dioxus::prelude::*;

use super::{PageSignals, RevealHandle};

/// Register each item's element id for the fire-once reveal animation once
/// mounted. Anything the observer cannot watch is revealed straight away.
pub(crate) fn use_reveal<T: 'static>(items: &'static [T], id_of: fn(&T) -> &'static str) {
    let mut reveal = use_context::<PageSignals>().reveal;
    let handle = use_context::<RevealHandle>();

    use_effect(move || {
        reveal.with_mut(|tracker| {
            for item in items {
                tracker.observe(id_of(item));
            }
        });

        let Some(observer) = handle.0.as_ref() else {
            reveal.with_mut(|tracker| {
                tracker.reveal_all();
            });
            return;
        };

        let unwatched: Vec<&str> = items
            .iter()
            .map(id_of)
            .filter(|id| !observer.observe_id(id))
            .collect();
        if !unwatched.is_empty() {
            reveal.with_mut(|tracker| {
                for id in &unwatched {
                    tracker.reveal(id);
                }
            });
        }
    });
}
