use crate::infrastructure::corpus::config::{DEFAULT_GITHUB_ORG, DEFAULT_TASK_COUNT};
use crate::infrastructure::http::config::DEFAULT_TIMEOUT;
use crate::infrastructure::morphology::MorphologyService;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_KEY_FILE: &str = "key.txt";
pub const DEFAULT_BLACKLIST_FILE: &str = "blacklist.json";

/// Process settings read from the environment (after `.env` is applied).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub key_file: PathBuf,
    pub blacklist_file: PathBuf,
    pub github_org: String,
    pub task_count: usize,
    /// `None` lets the concurrent queries start every lookup at once.
    pub lookup_concurrency: Option<usize>,
    pub http_timeout: Duration,
    pub sequential_service: MorphologyService,
    pub concurrent_service: MorphologyService,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let lookup_concurrency = parse_var("LOOKUP_CONCURRENCY", 0usize)?;
        Ok(Self {
            key_file: path_var("KEY_FILE", DEFAULT_KEY_FILE),
            blacklist_file: path_var("BLACKLIST_FILE", DEFAULT_BLACKLIST_FILE),
            github_org: env::var("GITHUB_ORG").unwrap_or_else(|_| DEFAULT_GITHUB_ORG.to_string()),
            task_count: parse_var("TASK_COUNT", DEFAULT_TASK_COUNT)?,
            lookup_concurrency: (lookup_concurrency > 0).then_some(lookup_concurrency),
            http_timeout: Duration::from_secs(parse_var(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT.as_secs(),
            )?),
            sequential_service: parse_service("SEQUENTIAL_SERVICE", MorphologyService::MorphemeOnline)?,
            concurrent_service: parse_service("CONCURRENT_SERVICE", MorphologyService::VnutriSlova)?,
        })
    }

    /// Reads the GitHub access token. A missing or blank file is fatal.
    pub async fn load_key(&self) -> Result<String> {
        let raw = tokio::fs::read_to_string(&self.key_file)
            .await
            .with_context(|| format!("failed to read access key from {}", self.key_file.display()))?;
        let key = raw.trim();
        if key.is_empty() {
            return Err(anyhow!("access key file {} is empty", self.key_file.display()));
        }
        Ok(key.to_string())
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var_os(name)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{} has invalid value '{}': {}", name, value, e)),
        Err(_) => Ok(default),
    }
}

fn parse_service(name: &str, default: MorphologyService) -> Result<MorphologyService> {
    match env::var(name) {
        Ok(value) => value
            .parse::<MorphologyService>()
            .map_err(|e| anyhow!("{}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn key_is_trimmed_and_blank_key_rejected() {
        let path = env::temp_dir().join(format!("readme-roots-key-{}.txt", std::process::id()));
        let mut config = AppConfig {
            key_file: path.clone(),
            blacklist_file: PathBuf::from(DEFAULT_BLACKLIST_FILE),
            github_org: DEFAULT_GITHUB_ORG.to_string(),
            task_count: 1,
            lookup_concurrency: None,
            http_timeout: DEFAULT_TIMEOUT,
            sequential_service: MorphologyService::MorphemeOnline,
            concurrent_service: MorphologyService::VnutriSlova,
        };

        std::fs::write(&path, "  token123\n").unwrap();
        assert_eq!(config.load_key().await.unwrap(), "token123");

        std::fs::write(&path, "\n").unwrap();
        assert!(config.load_key().await.is_err());
        std::fs::remove_file(&path).ok();

        config.key_file = env::temp_dir().join("readme-roots-no-such-key.txt");
        assert!(config.load_key().await.is_err());
    }
}
