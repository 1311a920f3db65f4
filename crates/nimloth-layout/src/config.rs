use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_HORIZONTAL_SPACING: f64 = 200.0;
pub const DEFAULT_VERTICAL_SPACING: f64 = 150.0;

/// Row layout spacing.
///
/// JSON keys are camelCase (`horizontalSpacing`, `verticalSpacing`); missing keys keep their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Distance between neighbours in one generation row.
    pub horizontal_spacing: f64,
    /// Distance between generation rows.
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: f64) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidSpacing { field, value });
            }
        }
        Ok(())
    }
}
