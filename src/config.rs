use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// LLM provider used when the fallback chain is disabled
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Provider name to provider settings
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Automatic provider switching and retry behavior
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// Marketplace scrape settings
    #[serde(default)]
    pub scrape: ScrapeConfig,
    /// Matching weights and package-fit bands
    #[serde(default)]
    pub matching: MatchingConfig,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

impl AppConfig {
    /// Load the configuration, layered highest priority first:
    /// `GROCERY__`-prefixed environment variables (nested keys separated by
    /// `__`, e.g. GROCERY__PROVIDERS__ANTHROPIC__API_KEY), an optional
    /// `config.toml` in the working directory, then the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("GROCERY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Settings for one LLM provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Disabled providers are refused by the factory and skipped by fallback
    pub enabled: bool,
    /// Model identifier, e.g. "gpt-4o-mini" or "claude-3-5-sonnet-20241022"
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Falls back to the provider's conventional environment variable
    pub api_key: Option<String>,
    /// Endpoint override for proxies and tests
    pub base_url: Option<String>,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

/// Provider fallback order and per-provider retry behavior.
#[derive(Debug, Deserialize, Clone)]
pub struct FallbackConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Providers to try, first to last
    #[serde(default)]
    pub order: Vec<String>,
    /// Attempts per provider before moving down the order
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Base delay between attempts; grows with the attempt number
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            order: Vec::new(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Marketplace scrape settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapeConfig {
    /// Request timeout in seconds
    #[serde(default = "default_scrape_timeout")]
    pub timeout: u64,
    /// User agent sent with search requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_scrape_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout: default_scrape_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Relevance-scoring weights.
///
/// Tuning constants rather than a statistical model; the defaults are the
/// values the rest of the system is calibrated against.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchWeights {
    /// Exact full-string equality
    #[serde(default = "default_weight_exact")]
    pub exact: i64,
    /// Product name starts with the query followed by a space
    #[serde(default = "default_weight_prefix")]
    pub prefix: i64,
    /// Each query word present as a whole word in the product name
    #[serde(default = "default_weight_word")]
    pub word: i64,
    /// Query present anywhere as a substring
    #[serde(default = "default_weight_substring")]
    pub substring: i64,
    /// Subtracted per category-changing compound suffix
    #[serde(default = "default_weight_category_penalty")]
    pub category_penalty: i64,
}

fn default_weight_exact() -> i64 {
    100
}

fn default_weight_prefix() -> i64 {
    80
}

fn default_weight_word() -> i64 {
    30
}

fn default_weight_substring() -> i64 {
    20
}

fn default_weight_category_penalty() -> i64 {
    50
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            exact: default_weight_exact(),
            prefix: default_weight_prefix(),
            word: default_weight_word(),
            substring: default_weight_substring(),
            category_penalty: default_weight_category_penalty(),
        }
    }
}

/// Package-fit bands and ranking tunables for the best-match selector.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    #[serde(default)]
    pub weights: MatchWeights,
    /// "Closely fits" ratio band, inclusive
    #[serde(default = "default_close_fit_min")]
    pub close_fit_min: f64,
    #[serde(default = "default_close_fit_max")]
    pub close_fit_max: f64,
    /// "Acceptable range" ratio band, used only when the close band is empty
    #[serde(default = "default_acceptable_min")]
    pub acceptable_min: f64,
    #[serde(default = "default_acceptable_max")]
    pub acceptable_max: f64,
    /// Pool size of the best-effort fallback when both bands are empty
    #[serde(default = "default_best_effort_pool")]
    pub best_effort_pool: usize,
    /// Sentinel that makes calorie-unknown candidates sort last in calorie mode
    #[serde(default = "default_unknown_calories")]
    pub unknown_calories: f64,
}

fn default_close_fit_min() -> f64 {
    0.8
}

fn default_close_fit_max() -> f64 {
    1.5
}

fn default_acceptable_min() -> f64 {
    0.5
}

fn default_acceptable_max() -> f64 {
    3.0
}

fn default_best_effort_pool() -> usize {
    3
}

fn default_unknown_calories() -> f64 {
    9999.0
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            close_fit_min: default_close_fit_min(),
            close_fit_max: default_close_fit_max(),
            acceptable_min: default_acceptable_min(),
            acceptable_max: default_acceptable_max(),
            best_effort_pool: default_best_effort_pool(),
            unknown_calories: default_unknown_calories(),
        }
    }
}
