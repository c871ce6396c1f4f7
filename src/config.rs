use tracing::info;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";

/// Application configuration.
///
/// The diagnosis service origin is the only configuration point. It can be
/// overridden with `DXCHECK_API_BASE_URL` (a `.env` file is honored in debug
/// builds).
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the diagnosis service, without a trailing slash.
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("loaded .env file");
        }

        let api_base_url = std::env::var("DXCHECK_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        info!("diagnosis service base URL: {}", api_base_url);

        Self { api_base_url }
    }
}
