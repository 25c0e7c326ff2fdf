//! The plugin's only setting: how often to emit a frame.

use core::str::FromStr;

use fugit::{MicrosDurationU64, SecsDurationU32};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("update interval must be a whole number of seconds, got {0:?}")]
    NotANumber(String),
    #[error(
        "update interval must be between {min} and {max} seconds, got {0}",
        min = UpdateInterval::MIN_SECS,
        max = UpdateInterval::MAX_SECS
    )]
    OutOfRange(u32),
}

/// Time between two frames. Always within `MIN_SECS..=MAX_SECS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateInterval(SecsDurationU32);

impl UpdateInterval {
    pub const MIN_SECS: u32 = 1;
    pub const MAX_SECS: u32 = 360;

    pub fn from_secs(secs: u32) -> Result<Self, ConfigError> {
        if (Self::MIN_SECS..=Self::MAX_SECS).contains(&secs) {
            Ok(Self(SecsDurationU32::from_ticks(secs)))
        } else {
            Err(ConfigError::OutOfRange(secs))
        }
    }

    pub fn as_secs(&self) -> u32 {
        self.0.ticks()
    }

    pub fn as_micros(&self) -> MicrosDurationU64 {
        MicrosDurationU64::secs(u64::from(self.0.ticks()))
    }
}

impl Default for UpdateInterval {
    fn default() -> Self {
        Self(SecsDurationU32::from_ticks(Self::MIN_SECS))
    }
}

impl FromStr for UpdateInterval {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::NotANumber(s.to_owned()))?;
        Self::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_second() {
        let interval = UpdateInterval::default();
        assert_eq!(interval.as_secs(), 1);
        assert_eq!(interval.as_micros().ticks(), 1_000_000);
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!("1".parse::<UpdateInterval>().unwrap().as_secs(), 1);
        assert_eq!("360".parse::<UpdateInterval>().unwrap().as_secs(), 360);
        assert_eq!(
            UpdateInterval::from_secs(360).unwrap().as_micros().ticks(),
            360_000_000
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            "0".parse::<UpdateInterval>(),
            Err(ConfigError::OutOfRange(0))
        );
        assert_eq!(
            "361".parse::<UpdateInterval>(),
            Err(ConfigError::OutOfRange(361))
        );
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            "fast".parse::<UpdateInterval>(),
            Err(ConfigError::NotANumber(_))
        ));
        assert!(matches!(
            "-5".parse::<UpdateInterval>(),
            Err(ConfigError::NotANumber(_))
        ));
        assert!(matches!(
            "1.5".parse::<UpdateInterval>(),
            Err(ConfigError::NotANumber(_))
        ));
    }

    #[test]
    fn error_message_names_range() {
        let err = UpdateInterval::from_secs(400).unwrap_err();
        assert_eq!(
            err.to_string(),
            "update interval must be between 1 and 360 seconds, got 400"
        );
    }
}
