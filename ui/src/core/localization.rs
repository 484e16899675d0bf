//! Active language + bundle, and the toggle state machine around them.
//!
//! `language` and `bundle` only ever change together (in [`Localization::commit_switch`]
//! or at construction), so the bundle on screen always belongs to the recorded language.

use tracing::{error, info, warn};

use super::bundle::TranslationBundle;
use super::error::SwitchFailure;
use super::language::Language;
use super::loader::{load_with_origin, LocaleSource};
use super::storage::{store_language, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPhase {
    #[default]
    Idle,
    Switching { from: Language, to: Language },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Localization {
    language: Language,
    bundle: TranslationBundle,
    phase: SwitchPhase,
    /// Bumped whenever a new bundle is installed. Bound text re-binds only when
    /// this moves, not on phase changes.
    generation: u64,
}

impl Localization {
    pub fn initialized(language: Language, bundle: TranslationBundle) -> Self {
        Self {
            language,
            bundle,
            phase: SwitchPhase::Idle,
            generation: 1,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SwitchPhase::Switching { .. })
    }

    /// Idle → Switching. Returns the language to load, or `None` if a switch is
    /// already in flight.
    pub fn begin_switch(&mut self) -> Option<Language> {
        if self.is_busy() {
            return None;
        }
        let to = self.language.toggled();
        self.phase = SwitchPhase::Switching {
            from: self.language,
            to,
        };
        Some(to)
    }

    /// Switching → Idle with the freshly loaded bundle installed.
    pub fn commit_switch(&mut self, bundle: TranslationBundle) -> Option<Language> {
        let SwitchPhase::Switching { to, .. } = self.phase else {
            return None;
        };
        self.language = to;
        self.bundle = bundle;
        self.phase = SwitchPhase::Idle;
        self.generation += 1;
        Some(to)
    }

    /// Switching → Idle, keeping the prior language and bundle.
    pub fn revert_switch(&mut self) -> Language {
        if let SwitchPhase::Switching { from, .. } = self.phase {
            self.language = from;
        }
        self.phase = SwitchPhase::Idle;
        self.language
    }

    /// Label for the toggle control: a busy marker while switching, otherwise
    /// the language a click would switch to.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_busy() {
            "..."
        } else {
            self.language.toggled().badge()
        }
    }

    /// Finish a switch begun with [`Localization::begin_switch`]: commit the
    /// prepared bundle, or roll back on failure. Returns the active language.
    pub fn settle_switch(&mut self, prepared: Result<TranslationBundle, SwitchFailure>) -> Language {
        match prepared {
            Ok(bundle) => {
                if let Some(to) = self.commit_switch(bundle) {
                    info!(%to, "language switched");
                }
            }
            Err(err @ SwitchFailure::FellBack { .. }) => {
                warn!(%err, "keeping current language");
                self.revert_switch();
            }
            Err(err) => {
                error!(%err, "reverting language switch");
                self.revert_switch();
            }
        }
        self.language
    }
}

/// Load then persist `target`. Nothing is installed here; the result goes to
/// [`Localization::settle_switch`], so a failure at either step leaves the
/// current language and bundle in place.
pub async fn prepare_switch<S, P>(
    target: Language,
    source: &S,
    prefs: &P,
    preference_key: &str,
) -> Result<TranslationBundle, SwitchFailure>
where
    S: LocaleSource,
    P: PreferenceStore + ?Sized,
{
    let loaded = load_with_origin(source, target.code()).await;
    if loaded.fell_back(target.code()) {
        return Err(SwitchFailure::FellBack {
            requested: target,
            served: loaded.served,
        });
    }
    store_language(prefs, preference_key, target)
        .map_err(|source| SwitchFailure::NotPersisted { target, source })?;
    Ok(loaded.bundle)
}

/// Startup language: stored preference, then browser language, then the default.
pub fn resolve_initial(stored: Option<&str>, browser: Option<&str>) -> Language {
    stored
        .and_then(Language::parse)
        .or_else(|| browser.and_then(Language::from_locale_tag))
        .unwrap_or(Language::DEFAULT)
}
