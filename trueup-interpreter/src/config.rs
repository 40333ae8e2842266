use std::env;
use trueup_domain::{RoundingMode, SettlementContext};

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TRUEUP_ROUNDING_MODE must be `half-up` or `half-even` (got `{0}`)")]
    InvalidRoundingMode(String),
}

/// Interpreter configuration read from the environment (and `.env`, if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub currency_symbol: String,
    pub rounding_mode: RoundingMode,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol = lookup("TRUEUP_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        let rounding_mode = match lookup("TRUEUP_ROUNDING_MODE") {
            Some(value) => parse_rounding_mode(&value)?,
            None => RoundingMode::default(),
        };
        let log_filter = lookup("TRUEUP_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            currency_symbol,
            rounding_mode,
            log_filter,
        })
    }

    pub fn settlement_context(&self) -> SettlementContext {
        SettlementContext::cents_default().with_rounding_mode(self.rounding_mode)
    }
}

fn parse_rounding_mode(value: &str) -> Result<RoundingMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "half-up" | "half_up" => Ok(RoundingMode::HalfUp),
        "half-even" | "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
        _ => Err(ConfigError::InvalidRoundingMode(value.to_string())),
    }
}

/// Initialize logging and tracing
pub fn init_logging(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
