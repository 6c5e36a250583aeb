//! Comparison and rendering options.
//!
//! Both option sets deserialize from JSON so a harness can load them from a
//! fixture or configuration file. Missing fields take their defaults.

use crate::errors::{Result, VassertError};
use serde::{Deserialize, Serialize};

/// Options for the comparator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Stop collecting deep mismatches after this many. `None` collects all.
    pub max_mismatches: Option<usize>,
}

impl CompareOptions {
    /// # Errors
    ///
    /// * `InvalidOptions` - If `max_mismatches` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_mismatches == Some(0) {
            return Err(VassertError::InvalidOptions {
                reason: "max_mismatches must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    ///
    /// # Errors
    ///
    /// * `InvalidOptions` - If the JSON is malformed or fails validation
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(text).map_err(|e| VassertError::InvalidOptions {
                reason: format!("compare options are not valid JSON: {}", e),
            })?;
        options.validate()?;
        Ok(options)
    }
}

/// Options for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Name printed in front of deep mismatch paths (`for v.V[1]`).
    pub root_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            root_name: "v".to_string(),
        }
    }
}

impl RenderOptions {
    /// # Errors
    ///
    /// * `InvalidOptions` - If `root_name` is empty or contains whitespace
    pub fn validate(&self) -> Result<()> {
        if self.root_name.is_empty() || self.root_name.chars().any(char::is_whitespace) {
            return Err(VassertError::InvalidOptions {
                reason: format!("invalid root_name: {:?}", self.root_name),
            });
        }
        Ok(())
    }

    /// Parse and validate options from JSON.
    ///
    /// # Errors
    ///
    /// * `InvalidOptions` - If the JSON is malformed or fails validation
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(text).map_err(|e| VassertError::InvalidOptions {
                reason: format!("render options are not valid JSON: {}", e),
            })?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(CompareOptions::default().max_mismatches, None);
        assert_eq!(RenderOptions::default().root_name, "v");
        assert!(CompareOptions::default().validate().is_ok());
        assert!(RenderOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let options = CompareOptions {
            max_mismatches: Some(0),
        };
        assert!(matches!(
            options.validate(),
            Err(VassertError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let compare = CompareOptions::from_json("{}").unwrap();
        assert_eq!(compare, CompareOptions::default());

        let render = RenderOptions::from_json(r#"{"root_name": "got"}"#).unwrap();
        assert_eq!(render.root_name, "got");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(CompareOptions::from_json("not json").is_err());
        assert!(CompareOptions::from_json(r#"{"max_mismatches": 0}"#).is_err());
        assert!(RenderOptions::from_json(r#"{"root_name": ""}"#).is_err());
        assert!(RenderOptions::from_json(r#"{"root_name": "a b"}"#).is_err());
    }
}
