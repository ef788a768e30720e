// Copyright 2025 the HackMap Authors
// SPDX-License-Identifier: Apache-2.0

//! Node colors as the user typed them.
//!
//! A `ColorSpec` keeps the original string ("#00ff00", "lightblue",
//! "rgb(10, 20, 30)") so that saving and loading a diagram reproduces the
//! exact text, while the parsed sRGB value is cached for painting.

use peniko::Color;
use peniko::color::{DynamicColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color string that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{spec}`: {reason}")]
pub struct ColorError {
    pub spec: String,
    pub reason: String,
}

/// A validated CSS color specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSpec {
    spec: String,
    parsed: Color,
}

impl ColorSpec {
    /// Parse a CSS color string
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let trimmed = spec.trim();
        let dynamic = DynamicColor::from_str(trimmed).map_err(|err| ColorError {
            spec: spec.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            spec: spec.to_string(),
            parsed: dynamic.to_alpha_color::<Srgb>(),
        })
    }

    /// The string this color was created from
    pub fn as_str(&self) -> &str {
        &self.spec
    }

    /// The color for painting
    pub fn color(&self) -> Color {
        self.parsed
    }

    /// `#rrggbb` form, used by the document exporters
    pub fn to_hex(&self) -> String {
        let rgba = self.parsed.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Red, green and blue in the 0..=1 range
    pub fn rgb_f64(&self) -> (f64, f64, f64) {
        let rgba = self.parsed.to_rgba8();
        (
            f64::from(rgba.r) / 255.0,
            f64::from(rgba.g) / 255.0,
            f64::from(rgba.b) / 255.0,
        )
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorSpec> for String {
    fn from(value: ColorSpec) -> Self {
        value.spec
    }
}

impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_original_spelling() {
        let c = ColorSpec::parse("#00ff00").unwrap();
        assert_eq!(c.as_str(), "#00ff00");
        assert_eq!(c.to_hex(), "#00ff00");

        let named = ColorSpec::parse("lightblue").unwrap();
        assert_eq!(named.as_str(), "lightblue");
        assert_eq!(named.to_hex(), "#add8e6");
    }

    #[test]
    fn rejects_garbage() {
        let err = ColorSpec::parse("not-a-color").unwrap_err();
        assert_eq!(err.spec, "not-a-color");
    }

    #[test]
    fn serde_uses_plain_string() {
        let c = ColorSpec::parse("red").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"red\"");
        let back: ColorSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<ColorSpec>("\"nope\"").is_err());
    }

    #[test]
    fn rgb_components() {
        let (r, g, b) = ColorSpec::parse("#ff0000").unwrap().rgb_f64();
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
    }
}
