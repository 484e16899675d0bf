//! End-to-end checks of the page controller's state types, driven the way the
//! components drive them but without a renderer.

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use ui::core::binder::{apply_bundle, BoundText};
use ui::core::bundle::TranslationBundle;
use ui::core::contact::{self, ContactForm, FormCell};
use ui::core::error::{LocaleError, PreferenceError};
use ui::core::header::HeaderScroll;
use ui::core::language::Language;
use ui::core::loader::{load_translations, load_with_origin, EmbeddedLocaleSource, LocaleSource};
use ui::core::localization::{prepare_switch, resolve_initial, Localization};
use ui::core::storage::{load_language, MemoryPreferences, PreferenceStore};

const PREF_KEY: &str = "preferred-language";

fn page_bindings() -> Vec<BoundText> {
    vec![
        BoundText::text("nav.features", "Features"),
        BoundText::text("hero.title", "Wine management software built for modern wineries"),
        BoundText::text("contact.form.submit", "Send Message"),
        BoundText::placeholder("contact.form.email", "Your email"),
        BoundText::text("not.in.any.bundle", "static text"),
    ]
}

fn values(targets: &[BoundText]) -> Vec<String> {
    targets.iter().map(|t| t.value().to_string()).collect()
}

/// Run one toggle through the same steps as the header button.
fn toggle<S: LocaleSource, P: PreferenceStore>(loc: &mut Localization, source: &S, prefs: &P) -> Language {
    let target = loc.begin_switch().expect("idle before toggle");
    let prepared = block_on(prepare_switch(target, source, prefs, PREF_KEY));
    loc.settle_switch(prepared)
}

/// Embedded bundles with the Spanish file missing.
struct WithoutSpanish;

impl LocaleSource for WithoutSpanish {
    async fn fetch(&self, code: &str) -> Result<TranslationBundle, LocaleError> {
        if code == "es" {
            return Err(LocaleError::Http {
                code: code.to_string(),
                status: 404,
            });
        }
        EmbeddedLocaleSource.fetch(code).await
    }
}

/// Storage that reads fine but rejects every write.
struct FullStorage;

impl PreferenceStore for FullStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(None)
    }
    fn store(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable("quota exceeded".into()))
    }
}

#[test]
fn switching_away_and_back_restores_every_binding() {
    let prefs = MemoryPreferences::new();
    let en = block_on(load_translations(&EmbeddedLocaleSource, "en"));
    let mut loc = Localization::initialized(Language::En, en);

    let mut targets = page_bindings();
    apply_bundle(targets.iter_mut(), loc.bundle());
    let original = values(&targets);

    assert_eq!(toggle(&mut loc, &EmbeddedLocaleSource, &prefs), Language::Es);
    apply_bundle(targets.iter_mut(), loc.bundle());
    assert_ne!(values(&targets), original);
    assert_eq!(targets[0].value(), "Funciones");
    assert_eq!(load_language(&prefs, PREF_KEY), Some(Language::Es));

    assert_eq!(toggle(&mut loc, &EmbeddedLocaleSource, &prefs), Language::En);
    apply_bundle(targets.iter_mut(), loc.bundle());
    assert_eq!(values(&targets), original);
    assert_eq!(targets[4].value(), "static text");
}

#[test]
fn missing_key_leaves_prior_text() {
    let bundle = TranslationBundle::from_value(json!({ "nav": { "features": "Features" } })).unwrap();
    let mut hit = BoundText::text("nav.features", "old");
    let mut miss = BoundText::text("nav.missing", "unchanged");
    let mut deep = BoundText::text("contact.form.success", "kept");
    apply_bundle([&mut hit, &mut miss, &mut deep], &bundle);
    assert_eq!(hit.value(), "Features");
    assert_eq!(miss.value(), "unchanged");
    assert_eq!(deep.value(), "kept");
}

#[test]
fn unsupported_language_loads_default_bundle() {
    let loaded = block_on(load_with_origin(&EmbeddedLocaleSource, "fr"));
    assert_eq!(loaded.served_language(), Some(Language::En));
    assert_eq!(loaded.bundle.resolve("nav.features"), Some("Features"));
}

#[test]
fn startup_uses_stored_then_browser_then_default() {
    let stored = MemoryPreferences::with(PREF_KEY, "es");
    let lang = resolve_initial(
        load_language(&stored, PREF_KEY).map(Language::code),
        Some("en-US"),
    );
    assert_eq!(lang, Language::Es);

    let invalid = MemoryPreferences::with(PREF_KEY, "klingon");
    let lang = resolve_initial(
        load_language(&invalid, PREF_KEY).map(Language::code),
        Some("es-CL"),
    );
    assert_eq!(lang, Language::Es);

    let lang = resolve_initial(None, Some("pt-BR"));
    assert_eq!(lang, Language::DEFAULT);
}

#[test]
fn missing_target_bundle_keeps_language_and_text() {
    let prefs = MemoryPreferences::new();
    let en = block_on(load_translations(&EmbeddedLocaleSource, "en"));
    let mut loc = Localization::initialized(Language::En, en);
    let mut targets = page_bindings();
    apply_bundle(targets.iter_mut(), loc.bundle());
    let before = values(&targets);

    assert_eq!(toggle(&mut loc, &WithoutSpanish, &prefs), Language::En);
    assert!(!loc.is_busy());
    assert_eq!(loc.toggle_label(), "ES");
    assert_eq!(load_language(&prefs, PREF_KEY), None);

    apply_bundle(targets.iter_mut(), loc.bundle());
    assert_eq!(values(&targets), before);
}

#[test]
fn unsaved_preference_rolls_the_switch_back() {
    let en = block_on(load_translations(&EmbeddedLocaleSource, "en"));
    let mut loc = Localization::initialized(Language::En, en);
    let generation = loc.generation();

    assert_eq!(toggle(&mut loc, &EmbeddedLocaleSource, &FullStorage), Language::En);
    assert_eq!(loc.bundle().resolve("nav.features"), Some("Features"));
    assert_eq!(loc.generation(), generation);
    assert!(loc.begin_switch().is_some(), "control usable again after rollback");
}

/// Form shared between the page and the pending submission.
#[derive(Clone, Default)]
struct SharedForm(Rc<RefCell<ContactForm>>);

impl FormCell for SharedForm {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactForm) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[test]
fn simulated_submit_disables_waits_then_clears() {
    for bundle in [
        TranslationBundle::empty(),
        block_on(load_translations(&EmbeddedLocaleSource, "es")),
    ] {
        let shared = SharedForm(Rc::new(RefCell::new(ContactForm::new(
            "Lucía",
            "lucia@example.com",
            "",
            "Hola",
        ))));
        let idle = "Enviar mensaje";
        let sending = contact::sending_label(&bundle, Language::Es);

        let observer = shared.clone();
        let expected_sending = sending.clone();
        let during_wait = async move {
            let form = observer.0.borrow();
            assert!(form.is_submitting());
            assert_eq!(form.submit_label(idle), expected_sending);
            assert_eq!(form.name, "Lucía", "fields kept until the round trip ends");
        };

        let mut cell = shared.clone();
        let outcome = block_on(contact::run_submit(&mut cell, sending, during_wait, || {
            contact::success_message(&bundle)
        }))
        .expect("idle form accepts a submit");

        assert_eq!(outcome.payload.email, "lucia@example.com");
        assert!(!outcome.notice.message.is_empty());
        let form = shared.0.borrow();
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(idle), idle);
        assert!(form.message.is_empty() && form.email.is_empty());
    }
}

#[test]
fn header_boundary_and_direction() {
    let mut header = HeaderScroll::new(100.0);
    let at = header.on_scroll(100.0);
    assert!(!at.scrolled && !at.hidden);
    let past = header.on_scroll(101.0);
    assert!(past.scrolled && past.hidden);
    let down = header.on_scroll(140.0);
    assert!(down.hidden);
    let back = header.on_scroll(120.0);
    assert!(back.scrolled && !back.hidden);
}
