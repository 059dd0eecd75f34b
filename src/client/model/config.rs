use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SESSION_PATH: &str = ".barney_session.json";

/// Client configs
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// backend base url, without the `/api` prefix
    pub base_url: String,
    /// per request timeout
    pub timeout_secs: u64,
    /// where the logged-in member is remembered
    pub session_path: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64, session_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
            session_path: session_path.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_SESSION_PATH)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/", 5, "s.json");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(ClientConfig::default().timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
