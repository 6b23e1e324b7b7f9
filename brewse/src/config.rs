use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Catalog endpoint serving the `{"record": [...]}` envelope
    #[serde(default)]
    pub api_url: String,
    /// Serve the built-in sample catalog when a fetch fails
    #[serde(default)]
    pub sample_fallback: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("BREWSE_CONFIG").unwrap_or_else(|_| "brewse.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("BREWSE").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required (set BREWSE_API_URL or add it to brewse.toml)".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_a_missing_url() {
        let settings = Settings {
            api_url: String::new(),
            sample_fallback: false,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_a_non_http_url() {
        let settings = Settings {
            api_url: "ftp://catalog.example.com".to_string(),
            sample_fallback: false,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_accepts_http_and_https_urls() {
        let settings = Settings {
            api_url: "https://api.example.com/b/catalog".to_string(),
            sample_fallback: true,
        };
        assert!(settings.validate().is_ok());

        let settings = Settings {
            api_url: "http://localhost:8080/catalog".to_string(),
            sample_fallback: false,
        };
        assert!(settings.validate().is_ok());
    }
}
