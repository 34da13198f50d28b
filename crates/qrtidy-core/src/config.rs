use crate::app_config::{AppConfig, RakutenCredentials};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or credentials are half-configured.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or credentials are half-configured.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values count as unset so `KEY=` in a .env file disables a provider.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("QRTIDY_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("QRTIDY_HTTP_TIMEOUT_SECS", "10")?;
    let http_connect_timeout_secs = parse_u64("QRTIDY_HTTP_CONNECT_TIMEOUT_SECS", "5")?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "QRTIDY_HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("QRTIDY_USER_AGENT", "qrtidy/0.1 (product-lookup)");

    let google_books_api_key = optional("GOOGLE_BOOKS_API_KEY");
    let rakuten = match (optional("RAKUTEN_APP_ID"), optional("RAKUTEN_ACCESS_KEY")) {
        (Some(app_id), Some(access_key)) => Some(RakutenCredentials {
            app_id,
            access_key,
            referer: or_default("RAKUTEN_REFERER", "https://github.com/"),
        }),
        (Some(_), None) => return Err(ConfigError::MissingEnvVar("RAKUTEN_ACCESS_KEY".into())),
        (None, Some(_)) => return Err(ConfigError::MissingEnvVar("RAKUTEN_APP_ID".into())),
        (None, None) => None,
    };
    let yahoo_app_id = optional("YAHOO_APP_ID");

    Ok(AppConfig {
        log_level,
        http_timeout_secs,
        http_connect_timeout_secs,
        user_agent,
        google_books_api_key,
        rakuten,
        yahoo_app_id,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
