/// Rakuten Web Service credentials. Both values are needed for any call.
#[derive(Clone)]
pub struct RakutenCredentials {
    pub app_id: String,
    pub access_key: String,
    /// Sent as `Origin`/`Referer`; the API rejects calls from unregistered referrers.
    pub referer: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub http_connect_timeout_secs: u64,
    pub user_agent: String,
    pub google_books_api_key: Option<String>,
    pub rakuten: Option<RakutenCredentials>,
    pub yahoo_app_id: Option<String>,
}

impl std::fmt::Debug for RakutenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RakutenCredentials")
            .field("app_id", &"[redacted]")
            .field("access_key", &"[redacted]")
            .field("referer", &self.referer)
            .finish()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("http_connect_timeout_secs", &self.http_connect_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "google_books_api_key",
                &self.google_books_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("rakuten", &self.rakuten)
            .field(
                "yahoo_app_id",
                &self.yahoo_app_id.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
