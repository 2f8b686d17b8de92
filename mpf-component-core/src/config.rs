// ============================================================================
// mpf-component-core/src/config.rs
// ============================================================================
//
// ADAPTER CONFIGURATION: Configuration for the audio/video adapter
//
// The only setting is how a video job's frame window is turned into a time
// window. The default is the `FRAME_COUNT`-aware resolution; the sentinel
// convention of older hosts is available but must be opted into.

use log::warn;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`AdapterConfig::from_env`].
pub const FRAME_RANGE_POLICY_ENV: &str = "MPF_FRAME_RANGE_POLICY";

/// How the stop of a video job's frame window is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameRangePolicy {
    /// Requires `FRAME_COUNT`. A stop frame at or past the last frame of the
    /// media means "to the end", which is then taken from `DURATION`.
    #[default]
    FrameCountAware,

    /// Deprecated. Negative start or stop frames mean "whole file" and
    /// "to the end" respectively; `FRAME_COUNT` is not consulted.
    LegacySentinel,
}

impl fmt::Display for FrameRangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRangePolicy::FrameCountAware => f.write_str("frame-count"),
            FrameRangePolicy::LegacySentinel => f.write_str("legacy"),
        }
    }
}

impl FromStr for FrameRangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frame-count" | "frame_count" => Ok(FrameRangePolicy::FrameCountAware),
            "legacy" => Ok(FrameRangePolicy::LegacySentinel),
            other => Err(format!(
                "unknown frame range policy '{other}' (expected 'frame-count' or 'legacy')"
            )),
        }
    }
}

/// Settings for [`AudioVideoAdapter`](crate::adapter::AudioVideoAdapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdapterConfig {
    pub frame_range_policy: FrameRangePolicy,
}

impl AdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame_range_policy(mut self, policy: FrameRangePolicy) -> Self {
        self.frame_range_policy = policy;
        self
    }

    /// Reads `MPF_FRAME_RANGE_POLICY`, falling back to the default when the
    /// variable is unset or unrecognized.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = match lookup(FRAME_RANGE_POLICY_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring {}: {}", FRAME_RANGE_POLICY_ENV, e);
                FrameRangePolicy::default()
            }),
            None => FrameRangePolicy::default(),
        };
        Self::new().frame_range_policy(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("frame-count".parse::<FrameRangePolicy>(), Ok(FrameRangePolicy::FrameCountAware));
        assert_eq!(" LEGACY ".parse::<FrameRangePolicy>(), Ok(FrameRangePolicy::LegacySentinel));
        assert!("sometimes".parse::<FrameRangePolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [FrameRangePolicy::FrameCountAware, FrameRangePolicy::LegacySentinel] {
            assert_eq!(policy.to_string().parse::<FrameRangePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_from_lookup() {
        let legacy = AdapterConfig::from_lookup(|_| Some("legacy".to_string()));
        assert_eq!(legacy.frame_range_policy, FrameRangePolicy::LegacySentinel);

        let unset = AdapterConfig::from_lookup(|_| None);
        assert_eq!(unset.frame_range_policy, FrameRangePolicy::FrameCountAware);

        let garbage = AdapterConfig::from_lookup(|_| Some("garbage".to_string()));
        assert_eq!(garbage.frame_range_policy, FrameRangePolicy::FrameCountAware);
    }
}
