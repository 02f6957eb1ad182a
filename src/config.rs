use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Base64 encoding of the admin key — either the plaintext key bytes or
    /// their SHA-256 digest. Absent means every login attempt fails.
    pub admin_key_base64: Option<String>,
    pub data_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            admin_key_base64: env::var("ADMIN_KEY_BASE64").ok().filter(|v| !v.is_empty()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        }
    }
}
