//! App Configuration
//!
//! The MyElectric app configuration, persisted in browser local storage.

/// Local storage key for the saved configuration.
pub const CONFIG_STORAGE_KEY: &str = "emonview.app.config";

/// Configuration of the MyElectric screen: display name plus the two feed
/// identifiers the view-model reads from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub power_feed_id: String,
    #[serde(default)]
    pub kwh_feed_id: String,
}

impl AppConfig {
    /// A configuration is complete once every field is filled in. Readiness
    /// of the whole screen derives from this.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.power_feed_id.trim().is_empty()
            && !self.kwh_feed_id.trim().is_empty()
    }

    /// Load the saved configuration from local storage, or the default
    /// (unconfigured) one when nothing usable is stored.
    pub fn load() -> Self {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json)) = storage.get_item(CONFIG_STORAGE_KEY) {
                    match serde_json::from_str(&json) {
                        Ok(config) => return config,
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to parse saved config: {}", e).into(),
                            );
                        }
                    }
                }
            }
        }
        Self::default()
    }

    /// Persist the configuration to local storage.
    pub fn store(&self) -> Result<(), String> {
        let json = serde_json::to_string(self).map_err(|e| e.to_string())?;

        let window = web_sys::window().ok_or("No window available")?;
        let storage = window
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or("Local storage unavailable")?;

        storage
            .set_item(CONFIG_STORAGE_KEY, &json)
            .map_err(|e| format!("{:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_incomplete() {
        assert!(!AppConfig::default().is_complete());
    }

    #[test]
    fn blank_fields_do_not_count_as_filled() {
        let config = AppConfig {
            name: "Home".to_string(),
            power_feed_id: "   ".to_string(),
            kwh_feed_id: "2".to_string(),
        };
        assert!(!config.is_complete());
    }

    #[test]
    fn filled_config_is_complete() {
        let config = AppConfig {
            name: "Home".to_string(),
            power_feed_id: "1".to_string(),
            kwh_feed_id: "2".to_string(),
        };
        assert!(config.is_complete());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            name: "Home".to_string(),
            power_feed_id: "power.house".to_string(),
            kwh_feed_id: "kwh.house".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let back: AppConfig = serde_json::from_str(r#"{"name":"Home"}"#).unwrap();
        assert_eq!(back.name, "Home");
        assert!(back.power_feed_id.is_empty());
        assert!(!back.is_complete());
    }
}
