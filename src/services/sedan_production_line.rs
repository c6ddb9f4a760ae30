use crate::{Car, CarBrand, CarFactory, CarProductionLine};

/// Builder for sedans of whatever brand the active factory produces.
///
/// The line always holds exactly one in-progress car. It starts blank,
/// is customized through the setters and is replaced by a fresh blank
/// car on every `build` or factory swap.
pub struct SedanProductionLine {
    car_factory: Box<dyn CarFactory>,
    sedan_car: Box<dyn Car>,
}

impl SedanProductionLine {
    pub fn new(factory: Box<dyn CarFactory>) -> Self {
        let sedan_car = factory.create();
        tracing::debug!(brand = %factory.brand(), car = %sedan_car.id(), "production line ready");
        Self {
            car_factory: factory,
            sedan_car,
        }
    }

    /// Loads a new car onto the line and returns the one it replaces.
    fn reset_production_line(&mut self, car: Box<dyn Car>) -> Box<dyn Car> {
        std::mem::replace(&mut self.sedan_car, car)
    }
}

impl CarProductionLine for SedanProductionLine {
    fn set_edition(&mut self, edition: &str) -> &mut dyn CarProductionLine {
        self.sedan_car.set_edition(edition);
        self
    }

    fn set_air_bags(&mut self, how_many: u32) -> &mut dyn CarProductionLine {
        self.sedan_car.set_air_bags(how_many);
        self
    }

    fn set_color(&mut self, color: &str) -> &mut dyn CarProductionLine {
        self.sedan_car.set_color(color);
        self
    }

    fn set_car_factory(&mut self, factory: Box<dyn CarFactory>) {
        tracing::info!(
            from = %self.car_factory.brand(),
            to = %factory.brand(),
            "swapping car factory"
        );
        self.car_factory = factory;
        let fresh = self.car_factory.create();
        let discarded = self.reset_production_line(fresh);
        if !discarded.attributes().is_blank() {
            tracing::debug!(car = %discarded.id(), "discarded in-progress customization");
        }
    }

    fn car_brand(&self) -> CarBrand {
        self.car_factory.brand()
    }

    fn current(&self) -> &dyn Car {
        self.sedan_car.as_ref()
    }

    fn build(&mut self) -> Box<dyn Car> {
        let fresh = self.car_factory.create();
        let finished = self.reset_production_line(fresh);
        tracing::info!(
            car = %finished.id(),
            brand = %finished.brand(),
            attributes = %finished.attributes(),
            "sedan built"
        );
        finished
    }
}
