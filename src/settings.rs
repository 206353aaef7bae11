//! Runtime settings for the host loop
//!
//! Nothing is read from disk: `load()` returns the defaults. Embedders can
//! hand in a JSON document through `from_json`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Host loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spawn RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Frames to run before the host loop quits on its own
    pub session_frames: u64,
    /// Let the autopilot drive (start, steer, restart)
    pub autopilot: bool,
    /// Sleep between ticks to hold `tick_rate`; off runs as fast as possible
    pub realtime: bool,
    /// Target ticks per second when `realtime` is on
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            // One minute of play
            session_frames: 60 * u64::from(TICKS_PER_SECOND),
            autopilot: true,
            realtime: true,
            tick_rate: TICKS_PER_SECOND,
        }
    }
}

impl Settings {
    /// Native builds have no settings store
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Reject values the host loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        if self.session_frames == 0 {
            bail!("session_frames must be at least 1");
        }
        if self.tick_rate != TICKS_PER_SECOND {
            log::warn!(
                "tick_rate {} differs from the tuned rate {}; game speed will change",
                self.tick_rate,
                TICKS_PER_SECOND
            );
        }
        Ok(())
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }

    /// Wall-clock length of one tick
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::load();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_rate, 60);
        assert!(settings.autopilot);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "realtime": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.realtime);
        assert_eq!(settings.session_frames, Settings::default().session_frames);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Settings::from_json(r#"{ "tick_rate": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "session_frames": 0 }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            seed: Some(7),
            session_frames: 10,
            autopilot: false,
            realtime: false,
            tick_rate: 30,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings::default();
        let d = settings.frame_duration();
        assert!((d.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
