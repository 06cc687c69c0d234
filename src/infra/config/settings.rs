use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(1500);

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mapbox_token: Option<String>,
    pub export_dir: Option<PathBuf>,
    pub payment_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapbox_token: None,
            export_dir: None,
            payment_delay: DEFAULT_PAYMENT_DELAY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mapbox_token = non_blank("MEDASSIST_MAPBOX_TOKEN").or_else(|| non_blank("MAPBOX_TOKEN"));
        let export_dir = non_blank("MEDASSIST_EXPORT_DIR").map(PathBuf::from);
        let payment_delay = match non_blank("MEDASSIST_PAYMENT_DELAY_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(millis) => Duration::from_millis(millis),
                Err(err) => {
                    tracing::warn!(value = %raw, %err, "invalid MEDASSIST_PAYMENT_DELAY_MS, using default");
                    DEFAULT_PAYMENT_DELAY
                }
            },
            None => DEFAULT_PAYMENT_DELAY,
        };

        Self {
            mapbox_token,
            export_dir,
            payment_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn map_token_falls_back_to_the_generic_name() {
        let config = config_from(&[("MAPBOX_TOKEN", "pk.generic")]);
        assert_eq!(config.mapbox_token.as_deref(), Some("pk.generic"));

        let config = config_from(&[
            ("MAPBOX_TOKEN", "pk.generic"),
            ("MEDASSIST_MAPBOX_TOKEN", "pk.app"),
        ]);
        assert_eq!(config.mapbox_token.as_deref(), Some("pk.app"));
    }

    #[test]
    fn blank_values_count_as_absent() {
        let config = config_from(&[("MEDASSIST_MAPBOX_TOKEN", "   "), ("MEDASSIST_EXPORT_DIR", "")]);
        assert_eq!(config.mapbox_token, None);
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn payment_delay_is_parsed_in_milliseconds() {
        let config = config_from(&[("MEDASSIST_PAYMENT_DELAY_MS", "20")]);
        assert_eq!(config.payment_delay, Duration::from_millis(20));

        let config = config_from(&[("MEDASSIST_PAYMENT_DELAY_MS", "soon")]);
        assert_eq!(config.payment_delay, DEFAULT_PAYMENT_DELAY);
    }
}
