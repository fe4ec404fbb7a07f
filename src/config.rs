use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

pub const SEED_VAR: &str = "PANAHSC_SEED";
pub const WINDOW_VAR: &str = "PANAHSC_WINDOW";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed file replacing the built-in data.
    pub seed_path: Option<PathBuf>,
    pub window_size: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            // phone sized
            window_size: (390.0, 844.0),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(SEED_VAR).ok(), env::var(WINDOW_VAR).ok())
    }

    pub fn from_vars(seed: Option<String>, window: Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(seed) = seed.filter(|s| !s.trim().is_empty()) {
            config.seed_path = Some(seed.into());
        }
        if let Some(window) = window.filter(|s| !s.trim().is_empty()) {
            config.window_size =
                parse_size(&window).with_context(|| format!("{WINDOW_VAR}={window}"))?;
        }
        Ok(config)
    }
}

/// `WIDTHxHEIGHT`, both finite and positive.
fn parse_size(raw: &str) -> Result<(f32, f32)> {
    let (width, height) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT"))?;
    let width: f32 = width.trim().parse()?;
    let height: f32 = height.trim().parse()?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(anyhow!("window size must be finite and positive"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() -> Result<()> {
        let config = Config::from_vars(None, None)?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn reads_seed_and_window() -> Result<()> {
        let config = Config::from_vars(Some("/tmp/seed.json".into()), Some("430x932".into()))?;
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.window_size, (430.0, 932.0));
        Ok(())
    }

    #[test]
    fn rejects_bad_window() {
        assert!(Config::from_vars(None, Some("wide".into())).is_err());
        assert!(Config::from_vars(None, Some("0x100".into())).is_err());
        assert!(Config::from_vars(None, Some("infx800".into())).is_err());
        assert!(Config::from_vars(None, Some("390xNaN".into())).is_err());
    }
}
