//! # Editor Configuration
//!
//! Every layout constant the engine uses lives here, with the values the
//! editor ships with as defaults. A config file only needs to name the
//! fields it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PagecraftError;

/// How the partial reflow treats elements below a resized spacer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerReflow {
    /// Move every element below the spacer to `spacer.y + height + gap`.
    /// All of them land on the same `y`; kept for compatibility with
    /// documents authored against that behavior.
    #[default]
    Collapse,
    /// Move every element below the spacer by the height delta, keeping
    /// their spacing relative to each other.
    Shift,
}

/// Inclusive numeric range used for clamping user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into the range. NaN maps to `min`.
    pub fn clamp(&self, v: f64) -> f64 {
        if v.is_nan() {
            return self.min;
        }
        v.clamp(self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Layout constants for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EditorConfig {
    /// `y` of the first element in the flow.
    pub top_offset: f64,
    /// Gap inserted below the last element when a new one is added.
    pub add_gap: f64,
    /// Horizontal inset used by left/right alignment and default widths.
    pub side_margin: f64,
    /// Extra room kept below the lowest element when the canvas grows.
    pub footer_slack: f64,
    /// Gap between a spacer's bottom and whatever is placed below it.
    pub spacer_gap: f64,
    /// Nominal element height used by drag-reorder; half of it is the
    /// minimum pointer travel that counts as a move.
    pub drag_unit: f64,
    /// Clamp range for `spacing.top` / `spacing.bottom` and padding/margin.
    pub spacing_range: Range,
    /// Clamp range for a spacer's declared height.
    pub spacer_range: Range,
    pub spacer_reflow: SpacerReflow,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            top_offset: 50.0,
            add_gap: 20.0,
            side_margin: 20.0,
            footer_slack: 50.0,
            spacer_gap: 20.0,
            drag_unit: 100.0,
            spacing_range: Range::new(0.0, 200.0),
            spacer_range: Range::new(0.0, 500.0),
            spacer_reflow: SpacerReflow::Collapse,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, PagecraftError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PagecraftError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would make the layout ill-defined.
    pub fn validate(&self) -> Result<(), PagecraftError> {
        let non_negative = [
            ("topOffset", self.top_offset),
            ("addGap", self.add_gap),
            ("sideMargin", self.side_margin),
            ("footerSlack", self.footer_slack),
            ("spacerGap", self.spacer_gap),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PagecraftError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !self.drag_unit.is_finite() || self.drag_unit <= 0.0 {
            return Err(PagecraftError::Config(format!(
                "dragUnit must be positive, got {}",
                self.drag_unit
            )));
        }
        for (name, range) in [
            ("spacingRange", self.spacing_range),
            ("spacerRange", self.spacer_range),
        ] {
            if range.min > range.max {
                return Err(PagecraftError::Config(format!(
                    "{name} has min {} above max {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Pointer travel a drag must exceed to reorder.
    pub fn drag_threshold(&self) -> f64 {
        self.drag_unit / 2.0
    }
}
