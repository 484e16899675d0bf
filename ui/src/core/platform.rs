//! Window-level browser glue.
//!
//! Everything here is inert off wasm: queries return `None`/`false` and
//! listeners are never installed, so native builds render a static page.

pub fn viewport_width() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn scroll_y() -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.scroll_y().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// First language the browser (or OS, natively) asks for, as a locale tag.
pub fn browser_language() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    let requested = i18n_embed::WebLanguageRequester::requested_languages();

    #[cfg(not(target_arch = "wasm32"))]
    let requested = i18n_embed::DesktopLanguageRequester::requested_languages();

    requested.first().map(|id| id.to_string())
}

/// Set `data-lang` and `lang` on the document body.
pub fn mark_document_language(code: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_attribute("data-lang", code).ok();
            body.set_attribute("lang", code).ok();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = code;
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
/// Returns `false` when no such element exists.
pub fn scroll_to_fragment(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// A `window` event listener, removed again on drop.
pub struct WindowListener {
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
    #[cfg(not(target_arch = "wasm32"))]
    _inert: (),
}

pub fn listen_window<F>(event: &'static str, handler: F) -> Option<WindowListener>
where
    F: FnMut() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(WindowListener { event, callback })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, handler);
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Intersection observer that reports each element's id the first time it
/// becomes visible, then stops watching it.
pub struct RevealObserver {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    #[cfg(not(target_arch = "wasm32"))]
    _inert: (),
}

impl RevealObserver {
    /// `None` where intersection observers are unavailable.
    pub fn new<F>(threshold: f64, root_margin: &str, on_visible: F) -> Option<Self>
    where
        F: FnMut(String) + 'static,
    {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast, JsValue};
            use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

            let mut on_visible = on_visible;
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let target = entry.target();
                            observer.unobserve(&target);
                            on_visible(target.id());
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));
            options.set_root_margin(root_margin);
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok()?;
            Some(Self {
                observer,
                _callback: callback,
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (threshold, root_margin, on_visible);
            None
        }
    }

    /// Start watching the element with `id`; `false` if it is not in the document.
    pub fn observe_id(&self, id: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            match web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            {
                Some(element) => {
                    self.observer.observe(&element);
                    true
                }
                None => false,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = id;
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_fallbacks_are_inert() {
        assert_eq!(viewport_width(), None);
        assert_eq!(scroll_y(), None);
        assert!(!scroll_to_fragment("features"));
        assert!(listen_window("scroll", || {}).is_none());
        assert!(RevealObserver::new(0.1, "0px", |_| {}).is_none());
    }
}
