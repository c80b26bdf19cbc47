use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidInput;

/// Crops the water demand model has a base requirement for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CropType {
    #[default]
    Corn,
    Wheat,
    Soybeans,
    Rice,
    Cotton,
}

impl CropType {
    /// Every crop, in selector order.
    pub fn all() -> &'static [CropType] {
        &[
            CropType::Corn,
            CropType::Wheat,
            CropType::Soybeans,
            CropType::Rice,
            CropType::Cotton,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corn => "corn",
            Self::Wheat => "wheat",
            Self::Soybeans => "soybeans",
            Self::Rice => "rice",
            Self::Cotton => "cotton",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Corn => "Corn",
            Self::Wheat => "Wheat",
            Self::Soybeans => "Soybeans",
            Self::Rice => "Rice",
            Self::Cotton => "Cotton",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "corn" => Some(Self::Corn),
            "wheat" => Some(Self::Wheat),
            "soybeans" => Some(Self::Soybeans),
            "rice" => Some(Self::Rice),
            "cotton" => Some(Self::Cotton),
            _ => None,
        }
    }
}

impl FromStr for CropType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInput {
            field: "crop type",
            value: s.to_string(),
            expected: "corn, wheat, soybeans, rice, cotton",
        })
    }
}

impl TryFrom<String> for CropType {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CropType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_key_case_insensitively() {
        for crop in CropType::all() {
            assert_eq!(CropType::parse(crop.as_str()), Some(*crop));
            assert_eq!(CropType::parse(&crop.as_str().to_uppercase()), Some(*crop));
        }
    }

    #[test]
    fn from_str_rejects_unknown_crop() {
        let err = "barley".parse::<CropType>().unwrap_err();

        assert_eq!(err.field, "crop type");
        assert_eq!(err.value, "barley");
    }
}
