//! Configuration enum types.

use crate::draw::FontWeight;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font weight specification - either a keyword or a numeric weight.
///
/// # Examples
/// ```toml
/// # Keyword
/// font_weight = "bold"
///
/// # Numeric weight (100-900)
/// font_weight = 600
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum FontWeightSpec {
    /// Numeric weight 100-900
    Numeric(u16),
    /// Keyword: normal, bold, or a number written as a string ("600")
    Name(String),
}

impl FontWeightSpec {
    /// Converts the specification to a [`FontWeight`], `None` if it is out of range.
    pub fn to_weight(&self) -> Option<FontWeight> {
        match self {
            FontWeightSpec::Numeric(value) => FontWeight::from_numeric(*value),
            FontWeightSpec::Name(name) => FontWeight::parse(name),
        }
    }
}

impl Default for FontWeightSpec {
    fn default() -> Self {
        FontWeightSpec::Name("normal".to_string())
    }
}

impl From<FontWeight> for FontWeightSpec {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::NORMAL | FontWeight::BOLD => FontWeightSpec::Name(weight.to_string()),
            other => FontWeightSpec::Numeric(other.value()),
        }
    }
}
