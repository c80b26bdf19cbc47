use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidInput;

/// Soil texture classes, ordered from least to most water retentive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SoilType {
    #[default]
    Sandy,
    Loamy,
    Clay,
}

impl SoilType {
    pub fn all() -> &'static [SoilType] {
        &[SoilType::Sandy, SoilType::Loamy, SoilType::Clay]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandy => "sandy",
            Self::Loamy => "loamy",
            Self::Clay => "clay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sandy => "Sandy",
            Self::Loamy => "Loamy",
            Self::Clay => "Clay",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandy" => Some(Self::Sandy),
            "loamy" => Some(Self::Loamy),
            "clay" => Some(Self::Clay),
            _ => None,
        }
    }
}

impl FromStr for SoilType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInput {
            field: "soil type",
            value: s.to_string(),
            expected: "sandy, loamy, clay",
        })
    }
}

impl TryFrom<String> for SoilType {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SoilType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
