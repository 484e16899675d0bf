//! Content binding: copy resolved translations onto bound targets.
//!
//! A target whose key does not resolve keeps whatever it currently shows, so a
//! bundle with gaps (or the empty fallback bundle) never blanks the page.

use super::bundle::TranslationBundle;

/// Something on the page that carries a text binding, a placeholder binding, or both.
pub trait BindingTarget {
    fn text_key(&self) -> Option<&str>;
    fn placeholder_key(&self) -> Option<&str>;
    fn set_text(&mut self, value: &str);
    fn set_placeholder(&mut self, value: &str);
}

/// Counts from one binding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BindReport {
    pub updated: usize,
    pub skipped: usize,
}

impl BindReport {
    fn record(&mut self, hit: bool) {
        if hit {
            self.updated += 1;
        } else {
            self.skipped += 1;
        }
    }
}

pub fn apply_bundle<'a, T, I>(targets: I, bundle: &TranslationBundle) -> BindReport
where
    T: BindingTarget + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut report = BindReport::default();
    for target in targets {
        if let Some(key) = target.text_key() {
            let hit = bundle.resolve(key).map(str::to_owned);
            report.record(hit.is_some());
            if let Some(value) = hit {
                target.set_text(&value);
            }
        }
        if let Some(key) = target.placeholder_key() {
            let hit = bundle.resolve(key).map(str::to_owned);
            report.record(hit.is_some());
            if let Some(value) = hit {
                target.set_placeholder(&value);
            }
        }
    }
    report
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Text,
    Placeholder,
}

/// A single bound value owned by one rendered element.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundText {
    kind: BindingKind,
    key: String,
    value: String,
}

impl BoundText {
    pub fn new(kind: BindingKind, key: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: initial.into(),
        }
    }

    pub fn text(key: impl Into<String>, initial: impl Into<String>) -> Self {
        Self::new(BindingKind::Text, key, initial)
    }

    pub fn placeholder(key: impl Into<String>, initial: impl Into<String>) -> Self {
        Self::new(BindingKind::Placeholder, key, initial)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Bind this one target; `true` when the bundle had a translation for it.
    pub fn apply(&mut self, bundle: &TranslationBundle) -> bool {
        apply_bundle(std::iter::once(&mut *self), bundle).updated > 0
    }
}

impl BindingTarget for BoundText {
    fn text_key(&self) -> Option<&str> {
        (self.kind == BindingKind::Text).then_some(self.key.as_str())
    }

    fn placeholder_key(&self) -> Option<&str> {
        (self.kind == BindingKind::Placeholder).then_some(self.key.as_str())
    }

    fn set_text(&mut self, value: &str) {
        self.value = value.to_owned();
    }

    fn set_placeholder(&mut self, value: &str) {
        self.value = value.to_owned();
    }
}
