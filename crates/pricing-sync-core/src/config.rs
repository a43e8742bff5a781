use std::path::PathBuf;
use std::time::Duration;

/// OpenRouter model listing; every entry carries a `pricing` object.
pub const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

/// Fixture consumed by the ploke-tui pricing tests, relative to the workspace root.
pub const DEFAULT_OUTPUT_PATH: &str = "crates/ploke-tui/data/models/all_pricing_parsed.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Where to fetch from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub endpoint: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: OPENROUTER_MODELS_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SyncConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
