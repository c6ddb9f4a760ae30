// src/factories/car_factories.rs

use crate::{Car, CarBrand, CarFactory, MastodonSedanCar, RhinoSedanCar};

#[derive(Debug, Clone, Copy, Default)]
pub struct MastodonSedanCarFactory;

impl CarFactory for MastodonSedanCarFactory {
    fn brand(&self) -> CarBrand {
        CarBrand::Mastodon
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(MastodonSedanCar::new())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RhinoSedanCarFactory;

impl CarFactory for RhinoSedanCarFactory {
    fn brand(&self) -> CarBrand {
        CarBrand::Rhino
    }

    fn create(&self) -> Box<dyn Car> {
        Box::new(RhinoSedanCar::new())
    }
}

/// Selects the sedan factory for a brand.
pub fn create_car_factory(brand: CarBrand) -> Box<dyn CarFactory> {
    match brand {
        CarBrand::Mastodon => Box::new(MastodonSedanCarFactory),
        CarBrand::Rhino => Box::new(RhinoSedanCarFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SEDAN_MODEL;

    #[test]
    fn test_factories_build_blank_sedans_of_their_brand() {
        for brand in [CarBrand::Mastodon, CarBrand::Rhino] {
            let factory = create_car_factory(brand);
            let car = factory.create();

            assert_eq!(factory.brand(), brand);
            assert_eq!(car.brand(), brand);
            assert_eq!(car.attributes().model(), SEDAN_MODEL);
            assert!(car.attributes().is_blank());
        }
    }

    #[test]
    fn test_concrete_types() {
        let mastodon = MastodonSedanCarFactory.create();
        assert!(mastodon.as_any().downcast_ref::<MastodonSedanCar>().is_some());

        let rhino = RhinoSedanCarFactory.create();
        assert!(rhino.as_any().downcast_ref::<RhinoSedanCar>().is_some());
    }

    #[test]
    fn test_each_call_returns_a_new_car() {
        let factory = MastodonSedanCarFactory;
        assert_ne!(factory.create().id(), factory.create().id());
    }
}
