use std::env;

/// Storage location. Fixed at build time; `mode=rwc` creates the file on first start.
pub const DATABASE_URL: &str = "sqlite://./test.db?mode=rwc";

/// Metadata published in the OpenAPI document.
pub struct ApiInfo;

impl ApiInfo {
    pub const TITLE: &'static str = "My Custom API Title";
    pub const DESCRIPTION: &'static str = "This is a custom API for managing users.";
    pub const VERSION: &'static str = "1.0.0";
    pub const DOCS_PATH: &'static str = "/documentation";
    pub const OPENAPI_PATH: &'static str = "/openapi.json";
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            host: Self::get_env_or("HOST", "127.0.0.1"),
            port: Self::get_env_or("PORT", "8000").parse().unwrap_or(8000),
            db_url: DATABASE_URL.to_string(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            db_url: DATABASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_fixed_storage() {
        let config = EnvConfig::default();
        assert_eq!(config.db_url, DATABASE_URL);
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }
}
