use crate::CreationalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of device kinds a component factory can be selected for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "tablet")]
    Tablet,
    #[serde(rename = "laptop")]
    Laptop,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 3] = [Self::Phone, Self::Tablet, Self::Laptop];

    /// Phones and tablets share the mobile CPU and memory line.
    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Phone | Self::Tablet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = CreationalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "tablet" => Ok(Self::Tablet),
            "laptop" => Ok(Self::Laptop),
            _ => Err(CreationalError::UnknownDeviceKind(value.to_string())),
        }
    }
}

impl TryFrom<&str> for DeviceKind {
    type Error = CreationalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Marker carried by every component, naming the family it was built for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyMarker {
    Mobile,
    Laptop,
    Phone,
    Tablet,
}

impl fmt::Display for FamilyMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "MOBILE"),
            Self::Laptop => write!(f, "LAPTOP"),
            Self::Phone => write!(f, "PHONE"),
            Self::Tablet => write!(f, "TABLET"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
