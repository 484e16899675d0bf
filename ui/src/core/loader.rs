//! Locale loading with a single fallback to the default language.

use tracing::warn;

use super::bundle::TranslationBundle;
use super::error::LocaleError;
use super::language::Language;

/// Where translation bundles come from.
///
/// Futures are not required to be `Send`; on wasm everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait LocaleSource {
    async fn fetch(&self, code: &str) -> Result<TranslationBundle, LocaleError>;
}

/// A bundle together with the code it was actually served for.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBundle {
    /// `None` when nothing could be loaded and `bundle` is empty.
    pub served: Option<String>,
    pub bundle: TranslationBundle,
}

impl LoadedBundle {
    pub fn served_language(&self) -> Option<Language> {
        self.served.as_deref().and_then(Language::parse)
    }

    pub fn fell_back(&self, requested: &str) -> bool {
        self.served.as_deref() != Some(requested)
    }
}

/// Fetch `code`, falling back once to [`Language::DEFAULT`].
///
/// Never fails: if the default bundle is also unavailable the result is an
/// empty bundle and every bound element keeps its current content.
pub async fn load_translations<S: LocaleSource>(source: &S, code: &str) -> TranslationBundle {
    load_with_origin(source, code).await.bundle
}

/// [`load_translations`], also reporting which code served the bundle.
pub async fn load_with_origin<S: LocaleSource>(source: &S, code: &str) -> LoadedBundle {
    match source.fetch(code).await {
        Ok(bundle) => {
            return LoadedBundle {
                served: Some(code.to_string()),
                bundle,
            }
        }
        Err(err) => warn!(%code, %err, "failed to load translations"),
    }

    let fallback = Language::DEFAULT.code();
    if code == fallback {
        return LoadedBundle {
            served: None,
            bundle: TranslationBundle::empty(),
        };
    }

    match source.fetch(fallback).await {
        Ok(bundle) => LoadedBundle {
            served: Some(fallback.to_string()),
            bundle,
        },
        Err(err) => {
            warn!(code = %fallback, %err, "default translations unavailable; using empty bundle");
            LoadedBundle {
                served: None,
                bundle: TranslationBundle::empty(),
            }
        }
    }
}

/// Locale files compiled into native binaries. Browser builds fetch the same
/// files from the serving origin instead.
#[cfg(not(target_arch = "wasm32"))]
#[derive(rust_embed::Embed)]
#[folder = "../web/public/locales"]
struct BundledLocales;

/// Serves the bundled `locales/*.json` files without any I/O.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLocaleSource;

#[cfg(not(target_arch = "wasm32"))]
impl EmbeddedLocaleSource {
    /// Codes that have a bundled file, sorted.
    pub fn available_codes() -> Vec<String> {
        let mut codes = BundledLocales::iter()
            .filter_map(|path| path.strip_suffix(".json").map(str::to_string))
            .collect::<Vec<_>>();
        codes.sort();
        codes
    }

    pub fn bundle(code: &str) -> Result<TranslationBundle, LocaleError> {
        let file = BundledLocales::get(&format!("{code}.json"))
            .ok_or_else(|| LocaleError::NotFound(code.to_string()))?;
        TranslationBundle::from_value(serde_json::from_slice(&file.data)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocaleSource for EmbeddedLocaleSource {
    async fn fetch(&self, code: &str) -> Result<TranslationBundle, LocaleError> {
        Self::bundle(code)
    }
}

/// Fetches `<base>/locales/<code>.json` from the serving origin.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct HttpLocaleSource {
    base_path: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpLocaleSource {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl LocaleSource for HttpLocaleSource {
    async fn fetch(&self, code: &str) -> Result<TranslationBundle, LocaleError> {
        let url = super::config::locale_url(&self.base_path, code);
        let network = |err: gloo_net::Error| LocaleError::Network {
            code: code.to_string(),
            reason: err.to_string(),
        };

        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network)?;
        if !response.ok() {
            return Err(LocaleError::Http {
                code: code.to_string(),
                status: response.status(),
            });
        }
        let body = response.text().await.map_err(network)?;
        TranslationBundle::from_json(&body)
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultLocaleSource = HttpLocaleSource;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultLocaleSource = EmbeddedLocaleSource;

/// The source the running platform should use: HTTP in the browser, embedded elsewhere.
pub fn default_source(config: &super::config::PageConfig) -> DefaultLocaleSource {
    #[cfg(target_arch = "wasm32")]
    {
        HttpLocaleSource::new(config.locale_base_path.clone())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        EmbeddedLocaleSource
    }
}
