/// Service address used when `API_URL` is not set at build time.
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://192.168.237.85:8000";

/// Client configuration. The only recognized option is the service base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_base_url: DEFAULT_SERVICE_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the configuration from the raw `API_URL` value.
    ///
    /// Blank values fall back to [`DEFAULT_SERVICE_BASE_URL`]; trailing
    /// slashes are dropped so paths can be appended as `/api/...`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self {
                service_base_url: url.trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.service_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(
            ClientConfig::from_env_value(None).service_base_url,
            DEFAULT_SERVICE_BASE_URL
        );
        assert_eq!(
            ClientConfig::from_env_value(Some("   ")).service_base_url,
            DEFAULT_SERVICE_BASE_URL
        );
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = ClientConfig::from_env_value(Some(" http://localhost:8000/ "));
        assert_eq!(config.service_base_url, "http://localhost:8000");
        assert_eq!(config.url("/api/cadgss"), "http://localhost:8000/api/cadgss");
    }
}
