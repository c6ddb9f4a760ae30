use crate::{BaseCar, Car, CarBrand, CarId, SEDAN_MODEL};
use std::any::Any;

#[derive(Debug)]
pub struct MastodonSedanCar {
    id: CarId,
    attributes: BaseCar,
}

impl MastodonSedanCar {
    pub fn new() -> Self {
        Self {
            id: CarId::new(),
            attributes: BaseCar::with_model(SEDAN_MODEL),
        }
    }

    /// New car configured exactly like `source`.
    pub fn from_prototype(source: &Self) -> Self {
        Self {
            id: CarId::new(),
            attributes: source.attributes.clone(),
        }
    }
}

impl Default for MastodonSedanCar {
    fn default() -> Self {
        Self::new()
    }
}

impl Car for MastodonSedanCar {
    fn id(&self) -> &CarId {
        &self.id
    }

    fn brand(&self) -> CarBrand {
        CarBrand::Mastodon
    }

    fn attributes(&self) -> &BaseCar {
        &self.attributes
    }

    fn set_edition(&mut self, edition: &str) {
        self.attributes.set_edition(edition);
    }

    fn set_air_bags(&mut self, how_many: u32) {
        self.attributes.set_air_bags(how_many);
    }

    fn set_color(&mut self, color: &str) {
        self.attributes.set_color(color);
    }

    fn prototype(&self) -> Box<dyn Car> {
        let copy = Self::from_prototype(self);
        tracing::debug!(source = %self.id, copy = %copy.id, "prototyped mastodon sedan");
        Box::new(copy)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
pub struct RhinoSedanCar {
    id: CarId,
    attributes: BaseCar,
}

impl RhinoSedanCar {
    pub fn new() -> Self {
        Self {
            id: CarId::new(),
            attributes: BaseCar::with_model(SEDAN_MODEL),
        }
    }

    pub fn from_prototype(source: &Self) -> Self {
        Self {
            id: CarId::new(),
            attributes: source.attributes.clone(),
        }
    }
}

impl Default for RhinoSedanCar {
    fn default() -> Self {
        Self::new()
    }
}

impl Car for RhinoSedanCar {
    fn id(&self) -> &CarId {
        &self.id
    }

    fn brand(&self) -> CarBrand {
        CarBrand::Rhino
    }

    fn attributes(&self) -> &BaseCar {
        &self.attributes
    }

    fn set_edition(&mut self, edition: &str) {
        self.attributes.set_edition(edition);
    }

    fn set_air_bags(&mut self, how_many: u32) {
        self.attributes.set_air_bags(how_many);
    }

    fn set_color(&mut self, color: &str) {
        self.attributes.set_color(color);
    }

    fn prototype(&self) -> Box<dyn Car> {
        let copy = Self::from_prototype(self);
        tracing::debug!(source = %self.id, copy = %copy.id, "prototyped rhino sedan");
        Box::new(copy)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn customized(mut car: Box<dyn Car>, edition: &str, air_bags: u32, color: &str) -> Box<dyn Car> {
        car.set_edition(edition);
        car.set_air_bags(air_bags);
        car.set_color(color);
        car
    }

    #[test]
    fn test_new_cars_are_blank_sedans() {
        let mastodon = MastodonSedanCar::new();
        let rhino = RhinoSedanCar::new();

        assert_eq!(mastodon.attributes().model(), SEDAN_MODEL);
        assert_eq!(rhino.attributes().model(), SEDAN_MODEL);
        assert!(mastodon.attributes().is_blank());
        assert!(rhino.attributes().is_blank());
        assert_ne!(mastodon.id(), rhino.id());
    }

    #[test]
    fn test_prototype_keeps_concrete_type() {
        let mastodon = customized(Box::new(MastodonSedanCar::new()), "cvt", 4, "red");
        let copy = mastodon.prototype();
        assert!(copy.as_any().downcast_ref::<MastodonSedanCar>().is_some());
        assert_eq!(copy.brand(), CarBrand::Mastodon);

        let rhino = customized(Box::new(RhinoSedanCar::new()), "cvt", 4, "red");
        let copy = rhino.prototype();
        assert!(copy.as_any().downcast_ref::<RhinoSedanCar>().is_some());
        assert!(copy.as_any().downcast_ref::<MastodonSedanCar>().is_none());
    }

    #[test]
    fn test_model_survives_customization_and_prototyping() {
        let mut mastodon: Box<dyn Car> = Box::new(MastodonSedanCar::new());
        mastodon.set_edition("cvt");
        mastodon.set_air_bags(4);
        mastodon.set_color("red");
        assert_eq!(mastodon.attributes().model(), SEDAN_MODEL);
        assert_eq!(mastodon.prototype().attributes().model(), SEDAN_MODEL);

        let mut rhino: Box<dyn Car> = Box::new(RhinoSedanCar::new());
        rhino.set_edition("signature");
        let mut copy = rhino.prototype();
        copy.set_color("gray");
        assert_eq!(rhino.attributes().model(), SEDAN_MODEL);
        assert_eq!(copy.attributes().model(), SEDAN_MODEL);
    }

    #[test]
    fn test_prototype_has_own_identity() {
        let original = customized(Box::new(RhinoSedanCar::new()), "signature", 8, "gray");
        let copy = original.prototype();

        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.attributes(), original.attributes());
    }

    proptest! {
        #[test]
        fn prop_mutating_a_prototype_leaves_the_source_untouched(
            edition in "[a-z]{0,12}",
            air_bags in 0u32..32,
            color in "[a-z]{0,10}",
            new_edition in "[a-z]{1,12}",
            new_air_bags in 0u32..32,
            new_color in "[a-z]{1,10}",
            rhino in any::<bool>(),
        ) {
            let blank: Box<dyn Car> = if rhino {
                Box::new(RhinoSedanCar::new())
            } else {
                Box::new(MastodonSedanCar::new())
            };
            let original = customized(blank, &edition, air_bags, &color);
            let snapshot = original.attributes().clone();

            let mut copy = original.prototype();
            prop_assert_eq!(copy.attributes(), &snapshot);

            copy.set_edition(&new_edition);
            copy.set_air_bags(new_air_bags);
            copy.set_color(&new_color);

            prop_assert_eq!(original.attributes(), &snapshot);
            prop_assert_eq!(copy.attributes().edition(), new_edition.as_str());
            prop_assert_eq!(copy.attributes().air_bags(), new_air_bags);
            prop_assert_eq!(copy.attributes().color(), new_color.as_str());
            prop_assert_eq!(copy.attributes().model(), SEDAN_MODEL);
        }
    }
}
