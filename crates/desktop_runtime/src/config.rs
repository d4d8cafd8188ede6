//! Shell configuration: optional interaction features and timer intervals.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFICATION_DELAY_MS: u64 = 3000;
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;

/// Optional desktop behaviors that earlier revisions of the shell toggled by forking components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellFeatures {
    /// Rubber-band selection started by pressing on empty desktop space.
    pub enable_marquee_selection: bool,
    /// Dragging a selected icon moves every selected icon.
    pub enable_group_drag: bool,
    /// One-shot welcome banner shown shortly after boot.
    pub show_arrival_notification: bool,
}

impl Default for ShellFeatures {
    fn default() -> Self {
        Self {
            enable_marquee_selection: true,
            enable_group_drag: true,
            show_arrival_notification: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub features: ShellFeatures,
    pub notification_delay_ms: u64,
    pub clock_tick_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            features: ShellFeatures::default(),
            notification_delay_ms: DEFAULT_NOTIFICATION_DELAY_MS,
            clock_tick_ms: DEFAULT_CLOCK_TICK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{ "features": { "enable_group_drag": false } }"#)
                .expect("partial config");
        assert_eq!(config.notification_delay_ms, DEFAULT_NOTIFICATION_DELAY_MS);
        assert_eq!(config.clock_tick_ms, DEFAULT_CLOCK_TICK_MS);
        assert!(config.features.enable_marquee_selection);
        assert!(!config.features.enable_group_drag);
    }
}
