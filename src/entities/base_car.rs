use crate::CreationalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarId(Uuid);

impl CarId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CarId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CarId {
    type Error = CreationalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| CreationalError::validation(format!("Invalid car ID: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// Attribute record shared by every car.
///
/// This is plain data: it has no identity and is not a [`Car`](crate::Car),
/// so it cannot be prototyped on its own. Only concrete cars can; the
/// snippet below is rejected with `no method named prototype found for
/// struct BaseCar` (E0599).
///
/// ```compile_fail,E0599
/// use creational_core::{BaseCar, Car};
///
/// let car = BaseCar::default();
/// let _copy: Box<dyn Car> = car.prototype();
/// ```
///
/// The model is fixed when the record is created; there is no setter for it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BaseCar {
    edition: String,
    model: String,
    air_bags: u32,
    color: String,
}

impl BaseCar {
    pub fn new<S: Into<String>>(edition: S, model: S, air_bags: u32, color: S) -> Self {
        Self {
            edition: edition.into(),
            model: model.into(),
            air_bags,
            color: color.into(),
        }
    }

    /// Blank record for the given model.
    pub fn with_model<S: Into<String>>(model: S) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn air_bags(&self) -> u32 {
        self.air_bags
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_edition<S: Into<String>>(&mut self, edition: S) {
        self.edition = edition.into();
    }

    pub fn set_air_bags(&mut self, how_many: u32) {
        self.air_bags = how_many;
    }

    pub fn set_color<S: Into<String>>(&mut self, color: S) {
        self.color = color.into();
    }

    /// True while no customization has been applied.
    pub fn is_blank(&self) -> bool {
        self.edition.is_empty() && self.air_bags == 0 && self.color.is_empty()
    }
}

impl fmt::Display for BaseCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} air bags, {})",
            self.model, self.edition, self.air_bags, self.color
        )
    }
}
