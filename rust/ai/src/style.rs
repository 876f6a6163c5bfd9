//! Playing-style profiles.
//!
//! A profile is fixed for the whole session once it is assigned to a seat.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}

/// Style ids accepted by [`PlayerStyleConfig::preset`].
pub const PRESET_IDS: [&str; 5] = ["tag", "lag", "rock", "station", "maniac"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStyleConfig {
    pub name: String,
    pub style_id: String,
    /// Percentage of hands played, 0-100.
    pub vpip: f64,
    /// Percentage of hands raised pre-flop, 0-100.
    pub pfr: f64,
    /// 0 (passive) to 10 (always pressing).
    pub aggression: f64,
    /// Probability in [0, 1].
    pub bluff_frequency: f64,
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), StyleError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(StyleError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl PlayerStyleConfig {
    pub fn new(
        name: impl Into<String>,
        style_id: impl Into<String>,
        vpip: f64,
        pfr: f64,
        aggression: f64,
        bluff_frequency: f64,
    ) -> Result<Self, StyleError> {
        let style = Self {
            name: name.into(),
            style_id: style_id.into(),
            vpip,
            pfr,
            aggression,
            bluff_frequency,
        };
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        check("vpip", self.vpip, 0.0, 100.0)?;
        check("pfr", self.pfr, 0.0, 100.0)?;
        check("aggression", self.aggression, 0.0, 10.0)?;
        check("bluff_frequency", self.bluff_frequency, 0.0, 1.0)
    }

    /// Built-in profile by id (case-insensitive).
    ///
    /// ```
    /// use holdem_ai::style::PlayerStyleConfig;
    ///
    /// let tag = PlayerStyleConfig::preset("TAG").unwrap();
    /// assert_eq!(tag.style_id, "tag");
    /// assert!(PlayerStyleConfig::preset("fish").is_err());
    /// ```
    pub fn preset(id: &str) -> Result<Self, StyleError> {
        let (name, style_id, vpip, pfr, aggression, bluff) = match id.to_ascii_lowercase().as_str() {
            "tag" => ("Tight-Aggressive", "tag", 22.0, 18.0, 7.0, 0.15),
            "lag" => ("Loose-Aggressive", "lag", 35.0, 28.0, 8.0, 0.30),
            "rock" => ("Rock", "rock", 12.0, 8.0, 3.0, 0.05),
            "station" => ("Calling Station", "station", 50.0, 5.0, 2.0, 0.05),
            "maniac" => ("Maniac", "maniac", 65.0, 45.0, 10.0, 0.50),
            _ => return Err(StyleError::UnknownStyle(id.to_string())),
        };
        Self::new(name, style_id, vpip, pfr, aggression, bluff)
    }

    pub fn presets() -> Vec<Self> {
        PRESET_IDS
            .iter()
            .filter_map(|id| Self::preset(id).ok())
            .collect()
    }
}
