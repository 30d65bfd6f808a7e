use std::env;
use std::fmt;

use crate::marketplace::requests::TransitionPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the marketplace core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub lifecycle: LifecycleConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let policy_raw =
            env::var("APP_TRANSITION_POLICY").unwrap_or_else(|_| "permissive".to_string());
        let transition_policy = parse_transition_policy(&policy_raw)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            lifecycle: LifecycleConfig { transition_policy },
        })
    }
}

fn parse_transition_policy(value: &str) -> Result<TransitionPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "permissive" => Ok(TransitionPolicy::Permissive),
        "strict" => Ok(TransitionPolicy::Strict),
        other => Err(ConfigError::InvalidTransitionPolicy {
            value: other.to_string(),
        }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Controls how strictly the lifecycle engine polices transitions.
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    pub transition_policy: TransitionPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTransitionPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTransitionPolicy { value } => {
                write!(
                    f,
                    "APP_TRANSITION_POLICY must be 'permissive' or 'strict', got '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
