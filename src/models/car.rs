use crate::CreationalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model name stamped on every car built by a sedan factory.
pub const SEDAN_MODEL: &str = "sedan";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarBrand {
    #[serde(rename = "mastodon")]
    Mastodon,
    #[serde(rename = "rhino")]
    Rhino,
}

impl fmt::Display for CarBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mastodon => write!(f, "mastodon"),
            Self::Rhino => write!(f, "rhino"),
        }
    }
}

impl FromStr for CarBrand {
    type Err = CreationalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mastodon" => Ok(Self::Mastodon),
            "rhino" => Ok(Self::Rhino),
            _ => Err(CreationalError::UnknownCarBrand(value.to_string())),
        }
    }
}

/// Named customization recipes a director knows how to apply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    #[serde(rename = "cvt")]
    Cvt,
    #[serde(rename = "signature")]
    Signature,
}

impl Edition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cvt => "cvt",
            Self::Signature => "signature",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Edition {
    type Err = CreationalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "cvt" => Ok(Self::Cvt),
            "signature" => Ok(Self::Signature),
            _ => Err(CreationalError::UnknownEdition(value.to_string())),
        }
    }
}
