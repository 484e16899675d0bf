//! Page-wide tunables.

use serde::{Deserialize, Serialize};

/// Constants the page controller reads at runtime. Every field has a default,
/// so a partial JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix for `<base>/locales/<code>.json`.
    pub locale_base_path: String,
    /// Browser-local storage key holding the chosen language code.
    pub preference_key: String,
    /// Scroll offset (px) past which the header switches to its scrolled treatment.
    pub header_threshold_px: f64,
    /// Viewports at or below this width (px) use the collapsible mobile menu.
    pub mobile_breakpoint_px: f64,
    /// Simulated contact-form round trip.
    pub submit_delay_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale_base_path: ".".to_string(),
            preference_key: "preferred-language".to_string(),
            header_threshold_px: 100.0,
            mobile_breakpoint_px: 768.0,
            submit_delay_ms: 1500,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    pub fn locale_url(&self, code: &str) -> String {
        locale_url(&self.locale_base_path, code)
    }
}

/// Resource path for a language bundle, without doubling slashes.
pub fn locale_url(base_path: &str, code: &str) -> String {
    let base = base_path.trim_end_matches('/');
    format!("{base}/locales/{code}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PageConfig::from_json(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(cfg.submit_delay_ms, 10);
        assert_eq!(cfg.preference_key, "preferred-language");
        assert_eq!(cfg.header_threshold_px, 100.0);
    }

    #[test]
    fn locale_url_joins_base_path() {
        let mut cfg = PageConfig::default();
        assert_eq!(cfg.locale_url("es"), "./locales/es.json");
        cfg.locale_base_path = "https://cdn.example.com/site/".into();
        assert_eq!(
            cfg.locale_url("en"),
            "https://cdn.example.com/site/locales/en.json"
        );
    }
}
