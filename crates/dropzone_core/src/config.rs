//! Drop-zone behaviour switches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
/// Configuration shared by the region logic and the browser binding.
pub struct DropZoneConfig {
    /// Stop gesture events from bubbling to enclosing elements.
    pub stop_propagation: bool,
    /// Clear the platform transfer buffer after files are extracted from a drop.
    pub clear_transfer_on_drop: bool,
    /// Report the initial idle state to the observer when the region is mounted.
    pub report_initial_state: bool,
    /// Emit console log lines for mount, unmount, and drops.
    pub debug_log: bool,
}

impl DropZoneConfig {
    /// Default configuration as a constant.
    pub const DEFAULT: Self = Self {
        stop_propagation: true,
        clear_transfer_on_drop: true,
        report_initial_state: true,
        debug_log: false,
    };
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_fills_defaults() {
        let config: DropZoneConfig =
            serde_json::from_str(r#"{ "debug-log": true, "stop-propagation": false }"#)
                .expect("parse config");
        assert_eq!(
            config,
            DropZoneConfig {
                stop_propagation: false,
                debug_log: true,
                ..DropZoneConfig::DEFAULT
            }
        );
    }

    #[test]
    fn empty_object_is_default() {
        let config: DropZoneConfig = serde_json::from_str("{}").expect("parse config");
        assert_eq!(config, DropZoneConfig::default());
    }
}
