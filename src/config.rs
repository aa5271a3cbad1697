/*!
 * Configuration for a sorter node
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SorterError};
use crate::types::{DIRECTION_COUNT, Direction, SLOTS_PER_DIRECTION};

/// Static layout of a sorter's filter inventory plus its fallback side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    /// How many consecutive inventory slots make up one direction's filter
    pub slots_per_direction: usize,

    /// Side used when an item matches no filter
    pub default_direction: Direction,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            slots_per_direction: SLOTS_PER_DIRECTION,
            default_direction: Direction::Top,
        }
    }
}

impl SorterConfig {
    /// Total number of filter slots a configuration snapshot must carry.
    ///
    /// Saturates for group sizes [`SorterConfig::validate`] would reject.
    pub fn slot_count(&self) -> usize {
        self.slots_per_direction.saturating_mul(DIRECTION_COUNT)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots_per_direction == 0 {
            return Err(SorterError::invalid_config(
                "slots_per_direction must be non-zero",
            ));
        }
        if self.slots_per_direction.checked_mul(DIRECTION_COUNT).is_none() {
            return Err(SorterError::invalid_config(format!(
                "slots_per_direction {} is too large",
                self.slots_per_direction
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SorterConfig = toml::from_str(contents)
            .map_err(|e| SorterError::invalid_config(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SorterError::invalid_config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SorterError::invalid_config(format!("failed to encode TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_inventory_layout() {
        let config = SorterConfig::default();
        assert_eq!(config.slots_per_direction, 5);
        assert_eq!(config.slot_count(), 30);
        assert_eq!(config.default_direction, Direction::Top);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = SorterConfig::from_toml_str("default_direction = \"front\"").unwrap();
        assert_eq!(config.default_direction, Direction::Front);
        assert_eq!(config.slots_per_direction, SLOTS_PER_DIRECTION);
    }

    #[test]
    fn zero_slots_rejected() {
        let err = SorterConfig::from_toml_str("slots_per_direction = 0").unwrap_err();
        assert!(matches!(err, SorterError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_slot_groups_rejected() {
        let err = SorterConfig::from_toml_str("slots_per_direction = 4000000000000000000")
            .unwrap_err();
        assert!(matches!(err, SorterError::InvalidConfig(_)));

        let config = SorterConfig {
            slots_per_direction: usize::MAX,
            ..SorterConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.slot_count(), usize::MAX);
    }

    #[test]
    fn unknown_direction_rejected() {
        assert!(SorterConfig::from_toml_str("default_direction = \"north\"").is_err());
    }

    #[test]
    fn toml_output_parses_back() {
        let config = SorterConfig {
            slots_per_direction: 3,
            default_direction: Direction::Back,
        };
        let encoded = config.to_toml_string().unwrap();
        assert_eq!(SorterConfig::from_toml_str(&encoded).unwrap(), config);
    }
}
