use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidInput;

/// Ways of delivering water to the field.
///
/// The declaration order is the order the optimizer evaluates methods in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum IrrigationMethod {
    #[default]
    Drip,
    Sprinkler,
    Flood,
}

impl IrrigationMethod {
    pub fn all() -> &'static [IrrigationMethod] {
        &[
            IrrigationMethod::Drip,
            IrrigationMethod::Sprinkler,
            IrrigationMethod::Flood,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drip => "drip",
            Self::Sprinkler => "sprinkler",
            Self::Flood => "flood",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Drip => "Drip",
            Self::Sprinkler => "Sprinkler",
            Self::Flood => "Flood",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drip" => Some(Self::Drip),
            "sprinkler" => Some(Self::Sprinkler),
            "flood" => Some(Self::Flood),
            _ => None,
        }
    }
}

impl FromStr for IrrigationMethod {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInput {
            field: "irrigation method",
            value: s.to_string(),
            expected: "drip, sprinkler, flood",
        })
    }
}

impl TryFrom<String> for IrrigationMethod {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IrrigationMethod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
