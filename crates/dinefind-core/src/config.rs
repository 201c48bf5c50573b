use crate::app_config::{AppConfig, Environment};
use crate::paging::DEFAULT_PAGE_SIZE;
use crate::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/recipes";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "dinefind/0.1 (restaurant-discovery)";
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 4000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("DINEFIND_ENV", "development"))?;
    let log_level = or_default("DINEFIND_LOG_LEVEL", "info");

    let catalog_url = or_default("DINEFIND_CATALOG_URL", DEFAULT_CATALOG_URL);
    let overpass_url = or_default("DINEFIND_OVERPASS_URL", DEFAULT_OVERPASS_URL);

    let request_timeout_secs = parse_u64("DINEFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DINEFIND_USER_AGENT", DEFAULT_USER_AGENT);
    let max_retries = parse_u32("DINEFIND_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("DINEFIND_RETRY_BACKOFF_BASE_SECS", "1")?;
    let search_radius_m = parse_u32(
        "DINEFIND_SEARCH_RADIUS_M",
        &DEFAULT_SEARCH_RADIUS_M.to_string(),
    )?;

    let page_size = or_default("DINEFIND_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
        .parse::<usize>()
        .map_err(|e| invalid("DINEFIND_PAGE_SIZE", e.to_string()))?;
    if page_size == 0 {
        return Err(invalid(
            "DINEFIND_PAGE_SIZE",
            "must be greater than zero".to_string(),
        ));
    }

    let rng_seed = match lookup("DINEFIND_RNG_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("DINEFIND_RNG_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        overpass_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        search_radius_m,
        page_size,
        rng_seed,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DINEFIND_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
