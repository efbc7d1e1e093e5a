use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse or validate.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse or validate.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
///
/// Every rigrec setting has a default; nothing is required. Without a search
/// API key the service runs in permanent fallback mode.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("RIGREC_ENV", "development"));
    let bind_addr = parse_addr("RIGREC_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("RIGREC_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "RIGREC_CATALOG_PATH",
        "./config/fallback_catalog.yaml",
    ));

    let search_api_key = lookup("RIGREC_SEARCH_API_KEY").ok().filter(|s| !s.is_empty());
    let search_base_url = lookup("RIGREC_SEARCH_BASE_URL").ok();
    let search_timeout_secs = parse_u64("RIGREC_SEARCH_TIMEOUT_SECS", "10")?;
    let search_phrase = or_default("RIGREC_SEARCH_PHRASE", "prebuilt gaming desktop pc");
    let search_result_cap = parse_usize("RIGREC_SEARCH_RESULT_CAP", "24")?;

    let budget_tolerance = parse_f64("RIGREC_BUDGET_TOLERANCE", "0.12")?;
    if !(0.0..1.0).contains(&budget_tolerance) {
        return Err(ConfigError::InvalidEnvVar {
            var: "RIGREC_BUDGET_TOLERANCE".to_string(),
            reason: format!("must be in [0, 1), got {budget_tolerance}"),
        });
    }

    let result_limit = parse_usize("RIGREC_RESULT_LIMIT", "5")?;
    if result_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "RIGREC_RESULT_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        search_api_key,
        search_base_url,
        search_timeout_secs,
        search_phrase,
        search_result_cap,
        budget_tolerance,
        result_limit,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn empty_env_yields_full_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should build");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.search_api_key.is_none());
        assert!(cfg.search_base_url.is_none());
        assert_eq!(cfg.search_timeout_secs, 10);
        assert_eq!(cfg.search_phrase, "prebuilt gaming desktop pc");
        assert_eq!(cfg.search_result_cap, 24);
        assert!((cfg.budget_tolerance - 0.12).abs() < 1e-9);
        assert_eq!(cfg.result_limit, 5);
    }

    #[test]
    fn empty_api_key_treated_as_absent() {
        let mut map = HashMap::new();
        map.insert("RIGREC_SEARCH_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.search_api_key.is_none());
    }

    #[test]
    fn api_key_override() {
        let mut map = HashMap::new();
        map.insert("RIGREC_SEARCH_API_KEY", "key-123");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_api_key.as_deref(), Some("key-123"));
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map = HashMap::new();
        map.insert("RIGREC_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIGREC_BIND_ADDR"),
            "expected InvalidEnvVar(RIGREC_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn tolerance_override() {
        let mut map = HashMap::new();
        map.insert("RIGREC_BUDGET_TOLERANCE", "0.2");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!((cfg.budget_tolerance - 0.2).abs() < 1e-9);
    }

    #[test]
    fn tolerance_out_of_range_is_rejected() {
        let mut map = HashMap::new();
        map.insert("RIGREC_BUDGET_TOLERANCE", "1.5");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIGREC_BUDGET_TOLERANCE"),
            "expected InvalidEnvVar(RIGREC_BUDGET_TOLERANCE), got: {result:?}"
        );
    }

    #[test]
    fn tolerance_not_a_number_is_rejected() {
        let mut map = HashMap::new();
        map.insert("RIGREC_BUDGET_TOLERANCE", "twelve-percent");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIGREC_BUDGET_TOLERANCE"
        ));
    }

    #[test]
    fn zero_result_limit_is_rejected() {
        let mut map = HashMap::new();
        map.insert("RIGREC_RESULT_LIMIT", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIGREC_RESULT_LIMIT"),
            "expected InvalidEnvVar(RIGREC_RESULT_LIMIT), got: {result:?}"
        );
    }

    #[test]
    fn result_limit_override() {
        let mut map = HashMap::new();
        map.insert("RIGREC_RESULT_LIMIT", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.result_limit, 10);
    }
}
