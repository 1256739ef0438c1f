use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "settings";

const DEFAULT_BANKING_API: &str = "http://127.0.0.1:5001/api";
const DEFAULT_RECEIVABLES_API: &str = "http://127.0.0.1:5001/api";
const DEFAULT_ANALYTICS_API: &str = "http://127.0.0.1:5002/api";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    #[default]
    Banking,
    Receivables,
}

impl DashboardKind {
    pub fn label(self) -> &'static str {
        match self {
            DashboardKind::Banking => "Zava Banking",
            DashboardKind::Receivables => "Zava Receivables",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DashboardKind::Banking => "banking",
            DashboardKind::Receivables => "receivables",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "banking" => Some(DashboardKind::Banking),
            "receivables" => Some(DashboardKind::Receivables),
            _ => None,
        }
    }
}

/// Preferences persisted in `localStorage`. Blank overrides mean "use the
/// build-time default".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default)]
    pub dashboard: DashboardKind,
    #[serde(default)]
    pub banking_api: Option<String>,
    #[serde(default)]
    pub receivables_api: Option<String>,
    #[serde(default)]
    pub analytics_api: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub banking: String,
    pub receivables: String,
    pub analytics: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            banking: normalize_base_url(option_env!("ZAVA_BANKING_API").unwrap_or(DEFAULT_BANKING_API)),
            receivables: normalize_base_url(
                option_env!("ZAVA_RECEIVABLES_API").unwrap_or(DEFAULT_RECEIVABLES_API),
            ),
            analytics: normalize_base_url(
                option_env!("ZAVA_ANALYTICS_API").unwrap_or(DEFAULT_ANALYTICS_API),
            ),
        }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn pick(override_url: &Option<String>, fallback: &str) -> String {
    match override_url.as_deref().map(normalize_base_url) {
        Some(url) if !url.is_empty() => url,
        _ => fallback.to_string(),
    }
}

impl AppSettings {
    pub fn api_config(&self) -> ApiConfig {
        let defaults = ApiConfig::default();
        ApiConfig {
            banking: pick(&self.banking_api, &defaults.banking),
            receivables: pick(&self.receivables_api, &defaults.receivables),
            analytics: pick(&self.analytics_api, &defaults.analytics),
        }
    }

    /// Turns a text field value into an override; blank clears it.
    pub fn override_from(value: &str) -> Option<String> {
        let url = normalize_base_url(value);
        (!url.is_empty()).then_some(url)
    }
}

/// Corrupt or missing JSON yields the defaults.
pub fn parse_settings(raw: Option<&str>) -> AppSettings {
    raw.and_then(|raw| serde_json::from_str::<AppSettings>(raw).ok())
        .unwrap_or_default()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_settings() -> AppSettings {
    let raw = storage().and_then(|s| s.get_item(SETTINGS_KEY).ok().flatten());
    parse_settings(raw.as_deref())
}

pub fn save_settings(settings: &AppSettings) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                tracing::warn!("could not persist settings");
            }
        }
        Err(err) => tracing::warn!(%err, "could not encode settings"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_corrupt_settings_fall_back_to_defaults() {
        assert_eq!(parse_settings(None), AppSettings::default());
        assert_eq!(parse_settings(Some("{not json")), AppSettings::default());
        assert_eq!(parse_settings(Some("{}")).dashboard, DashboardKind::Banking);
    }

    #[test]
    fn stored_settings_round_trip_through_json() {
        let settings = parse_settings(Some(
            r#"{"dashboard":"receivables","analytics_api":"http://analytics.local/api/"}"#,
        ));
        assert_eq!(settings.dashboard, DashboardKind::Receivables);
        assert_eq!(settings.api_config().analytics, "http://analytics.local/api");
    }

    #[test]
    fn blank_overrides_use_defaults() {
        let settings = AppSettings {
            banking_api: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(settings.api_config(), ApiConfig::default());
        assert_eq!(AppSettings::override_from(" "), None);
        assert_eq!(
            AppSettings::override_from("http://host:5001/api//"),
            Some("http://host:5001/api".to_string())
        );
    }

    #[test]
    fn dashboard_keys() {
        assert_eq!(DashboardKind::from_key("receivables"), Some(DashboardKind::Receivables));
        assert_eq!(DashboardKind::from_key(DashboardKind::Banking.key()), Some(DashboardKind::Banking));
        assert_eq!(DashboardKind::from_key("crm"), None);
    }
}
