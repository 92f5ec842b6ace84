/**
 * Client Configuration
 *
 * Server URL resolution for the desktop client.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4001";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
        };
        assert_eq!(
            config.api_url("/users/login"),
            "http://127.0.0.1:4001/users/login"
        );
    }
}
