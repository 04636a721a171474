/// Server configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Origin allowed by CORS, typically the dashboard dev server.
    pub allowed_origin: String,
}

impl AppConfig {
    /// Build the config from environment variables, with defaults suitable
    /// for local development.
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("DOCUFLOW_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            allowed_origin: std::env::var("DOCUFLOW_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
