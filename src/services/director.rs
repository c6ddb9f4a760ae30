use crate::{CarFactory, CarProductionLine, CreationalError, Edition};

/// Applies named customization recipes to a bound production line.
///
/// The director never keeps finished cars; callers retrieve them with the
/// line's `build`.
#[derive(Default)]
pub struct Director {
    production_line: Option<Box<dyn CarProductionLine>>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_production_line(production_line: Box<dyn CarProductionLine>) -> Self {
        Self {
            production_line: Some(production_line),
        }
    }

    /// Binds a production line, returning the previously bound one.
    pub fn set_production_line(
        &mut self,
        production_line: Box<dyn CarProductionLine>,
    ) -> Option<Box<dyn CarProductionLine>> {
        self.production_line.replace(production_line)
    }

    pub fn take_production_line(&mut self) -> Option<Box<dyn CarProductionLine>> {
        self.production_line.take()
    }

    pub fn production_line_mut(&mut self) -> Result<&mut dyn CarProductionLine, CreationalError> {
        match self.production_line.as_mut() {
            Some(line) => Ok(line.as_mut()),
            None => Err(CreationalError::NoProductionLine),
        }
    }

    pub fn set_production_line_car_factory(
        &mut self,
        car_factory: Box<dyn CarFactory>,
    ) -> Result<(), CreationalError> {
        self.production_line_mut()?.set_car_factory(car_factory);
        Ok(())
    }

    pub fn construct_cvt_edition(&mut self) -> Result<(), CreationalError> {
        self.production_line_mut()?
            .set_air_bags(4)
            .set_color("red")
            .set_edition("cvt");
        tracing::debug!("applied cvt edition recipe");
        Ok(())
    }

    pub fn construct_signature_edition(&mut self) -> Result<(), CreationalError> {
        self.production_line_mut()?
            .set_air_bags(8)
            .set_color("gray")
            .set_edition("signature");
        tracing::debug!("applied signature edition recipe");
        Ok(())
    }

    pub fn construct(&mut self, edition: Edition) -> Result<(), CreationalError> {
        match edition {
            Edition::Cvt => self.construct_cvt_edition(),
            Edition::Signature => self.construct_signature_edition(),
        }
    }
}
