use crate::{Car, CarBrand, CarFactory};

/// Builder that customizes one in-progress car at a time.
///
/// Setters return the line itself so calls can be chained. `build` hands
/// the car over and immediately loads a blank one from the active factory.
pub trait CarProductionLine: Send + Sync {
    fn set_edition(&mut self, edition: &str) -> &mut dyn CarProductionLine;

    fn set_air_bags(&mut self, how_many: u32) -> &mut dyn CarProductionLine;

    fn set_color(&mut self, color: &str) -> &mut dyn CarProductionLine;

    /// Replaces the factory and discards the in-progress car.
    fn set_car_factory(&mut self, factory: Box<dyn CarFactory>);

    fn car_brand(&self) -> CarBrand;

    fn current(&self) -> &dyn Car;

    fn build(&mut self) -> Box<dyn Car>;
}
