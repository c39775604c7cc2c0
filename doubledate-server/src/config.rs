use std::path::PathBuf;

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared admin secret. `None` disables the admin guard entirely
    /// (dev mode); the server logs a warning when running unprotected.
    pub admin_code: Option<String>,
    pub bind_address: String,
    /// Path to the admin HTML asset, read at request time.
    pub admin_page: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            admin_code: std::env::var("ADMIN_CODE")
                .ok()
                .filter(|code| !code.is_empty()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            admin_page: std::env::var("ADMIN_PAGE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("admin.html")),
        }
    }
}
