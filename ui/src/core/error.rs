//! Error types shared by the locale loader and preference store.

use thiserror::Error;

use super::language::Language;

/// Failure to obtain a translation bundle for a language code.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("no locale bundle for `{0}`")]
    NotFound(String),

    #[error("locale request for `{code}` returned HTTP {status}")]
    Http { code: String, status: u16 },

    #[error("locale request for `{code}` failed: {reason}")]
    Network { code: String, reason: String },

    #[error("locale bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("locale bundle root must be a JSON object")]
    NotAnObject,
}

/// Failure to read or write the persisted language preference.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("preference file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Why a begun language switch was rolled back instead of committed.
#[derive(Debug, Error)]
pub enum SwitchFailure {
    #[error("no `{requested}` bundle available (served: {served:?})")]
    FellBack {
        requested: Language,
        served: Option<String>,
    },

    #[error("could not persist `{target}`: {source}")]
    NotPersisted {
        target: Language,
        #[source]
        source: PreferenceError,
    },
}
