//! Connector configuration.
//!
//! All configuration is driven by environment variables; credential storage
//! and UI wiring are the host platform's concern.

use ebaylink_model::Credentials;

/// Which Trading API environment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    /// The sandbox environment.
    #[default]
    Sandbox,
    /// The production environment.
    Production,
}

impl ApiEnvironment {
    /// The Trading API endpoint URL for this environment.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            ApiEnvironment::Sandbox => "https://api.sandbox.ebay.com/ws/api.dll",
            ApiEnvironment::Production => "https://api.ebay.com/ws/api.dll",
        }
    }
}

/// Global configuration for the connector.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    /// Target API environment.
    pub environment: ApiEnvironment,
    /// Developer key.
    pub dev_id: String,
    /// Application key.
    pub app_id: String,
    /// Certification key.
    pub cert_id: String,
    /// Auth token for the user making the calls.
    pub auth_token: String,
    /// eBay site id (0 = US, 2 = Canada, 3 = UK, ...).
    pub site_id: u32,
    /// Trading API compatibility level.
    pub compatibility_level: u32,
    /// Number of items per submission envelope.
    pub chunk_capacity: usize,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::Sandbox,
            dev_id: String::new(),
            app_id: String::new(),
            cert_id: String::new(),
            auth_token: String::new(),
            site_id: 0,
            compatibility_level: 971,
            chunk_capacity: 5,
        }
    }
}

impl ConnectorConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("EBAY_ENVIRONMENT") {
            if v.eq_ignore_ascii_case("production") {
                config.environment = ApiEnvironment::Production;
            }
        }
        if let Ok(v) = std::env::var("EBAY_DEV_ID") {
            config.dev_id = v;
        }
        if let Ok(v) = std::env::var("EBAY_APP_ID") {
            config.app_id = v;
        }
        if let Ok(v) = std::env::var("EBAY_CERT_ID") {
            config.cert_id = v;
        }
        if let Ok(v) = std::env::var("EBAY_AUTH_TOKEN") {
            config.auth_token = v;
        }
        if let Ok(v) = std::env::var("EBAY_SITE_ID") {
            if let Ok(site_id) = v.parse() {
                config.site_id = site_id;
            }
        }
        if let Ok(v) = std::env::var("EBAY_COMPATIBILITY_LEVEL") {
            if let Ok(level) = v.parse() {
                config.compatibility_level = level;
            }
        }
        if let Ok(v) = std::env::var("EBAY_CHUNK_CAPACITY") {
            if let Ok(capacity) = v.parse::<usize>() {
                config.chunk_capacity = capacity.max(1);
            }
        }

        config
    }

    /// The requester credentials block for request envelopes.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.auth_token.clone())
    }

    /// The endpoint URL for the configured environment.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        self.environment.endpoint()
    }
}
