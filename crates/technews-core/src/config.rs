use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("TECHNEWS_ENV", "development"))?;
    let log_level = or_default("TECHNEWS_LOG_LEVEL", "info");
    let vocabulary_path = lookup("TECHNEWS_VOCABULARY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let trending_window_hours = parse_positive_u32("TECHNEWS_TRENDING_WINDOW_HOURS", "24")?;
    let trending_limit = parse_positive_usize("TECHNEWS_TRENDING_LIMIT", "10")?;
    let timeline_hours = parse_positive_u32("TECHNEWS_TIMELINE_HOURS", "168")?;
    let timeline_interval_hours = parse_positive_u32("TECHNEWS_TIMELINE_INTERVAL_HOURS", "24")?;
    if timeline_interval_hours > 24 {
        return Err(invalid(
            "TECHNEWS_TIMELINE_INTERVAL_HOURS",
            format!("{timeline_interval_hours} exceeds 24; buckets never span days"),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        vocabulary_path,
        trending_window_hours,
        trending_limit,
        timeline_hours,
        timeline_interval_hours,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TECHNEWS_ENV".to_string(),
            reason: format!("unknown environment '{other}'; expected development, test, or production"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
