use crate::{BaseCar, CarBrand, CarId};
use std::any::Any;
use std::fmt;

/// Prototype contract for cars.
///
/// `prototype` must return a value of the same concrete type with equal
/// attributes and its own storage and [`CarId`].
///
/// Only edition, air bags and color can change after creation; the model
/// stays whatever the concrete car was built with.
pub trait Car: fmt::Debug + Send + Sync {
    fn id(&self) -> &CarId;

    fn brand(&self) -> CarBrand;

    fn attributes(&self) -> &BaseCar;

    fn set_edition(&mut self, edition: &str);

    fn set_air_bags(&mut self, how_many: u32);

    fn set_color(&mut self, color: &str);

    fn prototype(&self) -> Box<dyn Car>;

    fn as_any(&self) -> &dyn Any;
}

pub trait CarFactory: Send + Sync {
    fn brand(&self) -> CarBrand;

    /// Returns a blank car of this factory's brand.
    fn create(&self) -> Box<dyn Car>;
}
