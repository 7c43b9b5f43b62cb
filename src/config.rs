use std::env;

/// Analysis window and lookback configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Trailing window of monthly observations kept by the normalizer.
    pub window: usize,
    /// Rate-of-change baseline offset in periods.
    pub lookback: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: 48,
            lookback: 3,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything missing or unparseable.
    ///
    /// - `IMPULSE_WINDOW`: trailing window size (default 48)
    /// - `IMPULSE_LOOKBACK`: ROC lookback in periods (default 3)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            window: env_usize("IMPULSE_WINDOW", defaults.window),
            lookback: env_usize("IMPULSE_LOOKBACK", defaults.lookback),
        }
    }
}

/// Data retrieval collaborator configuration.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Alpha Vantage API key.
    pub api_key: String,
}

impl SourceConfig {
    /// Load from `ALPHA_VANTAGE_API_KEY`. Returns `None` when unset so the
    /// caller can decide whether fetching is available.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("ALPHA_VANTAGE_API_KEY").ok()?;
        if api_key.is_empty() {
            return None;
        }
        Some(Self { api_key })
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
