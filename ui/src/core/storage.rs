//! Browser-local persistence of the chosen language.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::warn;

use super::error::PreferenceError;
use super::language::Language;

/// A tiny string key/value store.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn store(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Read the stored language. Unreadable storage and unsupported values both
/// read as "no preference".
pub fn load_language<P: PreferenceStore + ?Sized>(store: &P, key: &str) -> Option<Language> {
    match store.load(key) {
        Ok(Some(raw)) => {
            let parsed = Language::parse(&raw);
            if parsed.is_none() {
                warn!(%key, value = %raw, "ignoring unsupported stored language");
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            warn!(%key, %err, "could not read language preference");
            None
        }
    }
}

pub fn store_language<P: PreferenceStore + ?Sized>(
    store: &P,
    key: &str,
    language: Language,
) -> Result<(), PreferenceError> {
    store.store(key, language.code())
}

/// In-process store; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorePreferences;

#[cfg(target_arch = "wasm32")]
impl LocalStorePreferences {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .ok_or_else(|| PreferenceError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| PreferenceError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| PreferenceError::Unavailable("localStorage read failed".into()))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| PreferenceError::Unavailable("localStorage write failed".into()))
    }
}

/// JSON map on disk, under the platform data directory by default.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FilePreferences {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn in_data_dir() -> Self {
        let path = directories::ProjectDirs::from("app", "WineSoft", "WineSoft")
            .map(|dirs| dirs.data_dir().join("preferences.json"));
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(BTreeMap::new());
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| PreferenceError::Unavailable("no data directory".into()))?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultPreferences = LocalStorePreferences;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultPreferences = FilePreferences;

pub fn default_preferences() -> DefaultPreferences {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorePreferences
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FilePreferences::in_data_dir()
    }
}
