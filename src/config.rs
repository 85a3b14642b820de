use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Explicit `LOG_FORMAT` wins; otherwise production logs JSON.
    fn resolve(raw: Option<&str>, env: &Environment) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ if matches!(env, Environment::Prod) => Self::Json,
            _ => Self::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,
    pub log_format: LogFormat,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Session
    pub current_user_id: String,

    // Booking outbox
    pub booking_outbox_capacity: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_format = LogFormat::resolve(env::var("LOG_FORMAT").ok().as_deref(), &env);

        // CORS
        let cors_allow_origins = parse_origins(
            &env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        // Session
        let current_user_id = env::var("CURRENT_USER_ID").unwrap_or_else(|_| "1".to_string());

        // Booking outbox
        let booking_outbox_capacity = match env::var("BOOKING_OUTBOX_CAPACITY") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .with_context(|| format!("BOOKING_OUTBOX_CAPACITY must be a positive integer, got {raw:?}"))?,
            Err(_) => 64,
        };

        Ok(Settings {
            env,
            server_addr,
            log_format,
            cors_allow_origins,
            current_user_id,
            booking_outbox_capacity,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_defaults_to_dev() {
        assert_eq!(Environment::from_str("production"), Environment::Prod);
        assert_eq!(Environment::from_str("PROD"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything"), Environment::Dev);
    }

    #[test]
    fn log_format_follows_environment_unless_overridden() {
        assert_eq!(LogFormat::resolve(None, &Environment::Prod), LogFormat::Json);
        assert_eq!(LogFormat::resolve(None, &Environment::Dev), LogFormat::Pretty);
        assert_eq!(LogFormat::resolve(Some("JSON"), &Environment::Dev), LogFormat::Json);
        assert_eq!(LogFormat::resolve(Some("pretty"), &Environment::Prod), LogFormat::Pretty);
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
