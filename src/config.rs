#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_base_url: String,
    pub bank_timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bank_base_url: std::env::var("BANK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            bank_timeout_ms: std::env::var("BANK_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
        }
    }
}
