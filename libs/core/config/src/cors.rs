use crate::{env_required, ConfigError, FromEnv};

/// Cross-origin configuration.
///
/// The service trusts exactly one browser origin; requests carrying any other
/// `Origin` are not granted CORS headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }
}

impl FromEnv for CorsConfig {
    /// Requires CORS_ALLOWED_ORIGIN, e.g. `http://localhost:5173`
    fn from_env() -> Result<Self, ConfigError> {
        let origin = env_required("CORS_ALLOWED_ORIGIN")?;
        let origin = origin.trim();

        if origin.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "origin cannot be empty".to_string(),
            });
        }

        if origin.contains(',') {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "only a single trusted origin is supported".to_string(),
            });
        }

        Ok(Self::new(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_from_env() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" http://localhost:5173 "), || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(config.allowed_origin, "http://localhost:5173");
        });
    }

    #[test]
    fn test_cors_config_missing() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }

    #[test]
    fn test_cors_config_empty() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("   "), || {
            assert!(CorsConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_cors_config_rejects_lists() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000,https://example.com"),
            || {
                let err = CorsConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("single"));
            },
        );
    }
}
