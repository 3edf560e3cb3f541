//! Runtime configuration for the scheduler and HTTP fetcher.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::LiveError;

/// Default per-request timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Poll period used when the diagram has no usable `live.refresh`.
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(10);

/// Scheduler and fetcher settings that do not come from the diagram itself.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LiveConfig {
  /// Upper bound for a single GET; a hung endpoint delays its tick by at most this much.
  #[serde(with = "duration_secs")]
  pub fetch_timeout: Duration,
  /// Poll period when `live.refresh` is missing, unparsable or zero.
  #[serde(with = "duration_secs")]
  pub default_refresh: Duration,
  /// `User-Agent` header sent with every request.
  pub user_agent: String,
}

impl Default for LiveConfig {
  fn default() -> Self {
    Self {
      fetch_timeout: DEFAULT_FETCH_TIMEOUT,
      default_refresh: DEFAULT_REFRESH,
      user_agent: concat!("diagram-live/", env!("CARGO_PKG_VERSION")).to_string(),
    }
  }
}

impl LiveConfig {
  /// Reads a JSON config file. Missing keys keep their defaults.
  pub fn load(path: &Path) -> Result<Self, LiveError> {
    let config_err = |reason: String| LiveError::Config {
      path: path.display().to_string(),
      reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
    let config: Self = serde_json::from_str(&text).map_err(|e| config_err(e.to_string()))?;
    debug!(path = %path.display(), ?config, "loaded live config");
    Ok(config)
  }
}

/// Durations are written as whole seconds in config files.
mod duration_secs {
  use serde::{Deserialize, Deserializer};
  use std::time::Duration;

  pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
    u64::deserialize(d).map(Duration::from_secs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let c = LiveConfig::default();
    assert_eq!(c.fetch_timeout, Duration::from_secs(30));
    assert_eq!(c.default_refresh, Duration::from_secs(10));
    assert!(c.user_agent.starts_with("diagram-live/"));
  }

  #[test]
  fn deserialize_partial_json_keeps_defaults() {
    let c: LiveConfig = serde_json::from_str(r#"{"fetch_timeout": 3}"#).unwrap();
    assert_eq!(c.fetch_timeout, Duration::from_secs(3));
    assert_eq!(c.default_refresh, DEFAULT_REFRESH);
  }

  #[test]
  fn load_reads_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
      &mut file,
      br#"{"default_refresh": 7, "user_agent": "watch-test/1"}"#,
    )
    .unwrap();
    let c = LiveConfig::load(file.path()).unwrap();
    assert_eq!(c.default_refresh, Duration::from_secs(7));
    assert_eq!(c.fetch_timeout, DEFAULT_FETCH_TIMEOUT);
    assert_eq!(c.user_agent, "watch-test/1");
  }

  #[test]
  fn load_reports_bad_files() {
    let missing = LiveConfig::load(Path::new("/nonexistent/live.json")).unwrap_err();
    assert!(matches!(missing, LiveError::Config { .. }), "{missing:?}");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, br#"{"fetch_timeout": "soon"}"#).unwrap();
    let bad = LiveConfig::load(file.path()).unwrap_err();
    assert!(bad.to_string().starts_with("invalid config"), "{bad}");
  }
}
