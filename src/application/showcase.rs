use crate::{
    AdapterReport, Car, CreationalError, DeviceKind, DeviceReport, Driver, DriverOutcome,
    HttpMethod, PrototypeRun, ShowcaseConfig, ShowcaseEvent,
    factories::{MastodonSedanCarFactory, RhinoSedanCarFactory, create_device_factory},
    ports::{CarFactory, DeviceFactory, EventPublisher, HttpAdapterFactory},
    services::{Director, SedanProductionLine},
};
use std::sync::Arc;

pub const NO_FACTORY_PROVIDED: &str = "No factory provided";
pub const NO_DIRECTOR_PROVIDED: &str = "No director provided";

/// Application service hosting the demo drivers for the three creational
/// patterns.
///
/// Each driver receives its collaborator from the caller. A missing
/// collaborator is reported through logging and the event publisher, and
/// the driver returns [`DriverOutcome::Skipped`] without creating anything.
pub struct Showcase<EVENTS>
where
    EVENTS: EventPublisher,
{
    config: ShowcaseConfig,
    event_publisher: Arc<EVENTS>,
}

impl<EVENTS> Showcase<EVENTS>
where
    EVENTS: EventPublisher,
{
    pub fn new(config: ShowcaseConfig, event_publisher: EVENTS) -> Self {
        Self::with_shared_publisher(config, Arc::new(event_publisher))
    }

    pub fn with_shared_publisher(config: ShowcaseConfig, event_publisher: Arc<EVENTS>) -> Self {
        Self {
            config,
            event_publisher,
        }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn event_publisher(&self) -> &EVENTS {
        &self.event_publisher
    }

    /// Builds one set of components from the given family and applies the
    /// profile configured for the factory's device kind.
    pub fn run_abstract_factory(
        &self,
        factory: Option<&dyn DeviceFactory>,
    ) -> Result<DriverOutcome<DeviceReport>, CreationalError> {
        let driver = Driver::AbstractFactory;
        self.start(driver)?;

        let Some(factory) = factory else {
            return self.skip(driver, NO_FACTORY_PROVIDED);
        };

        let kind = factory.kind();
        let profile = self.config.profile_for(kind);

        let cpu = factory.create_cpu();
        let memory = factory.create_memory();
        let display = factory.create_display();

        let report = DeviceReport {
            kind,
            cpu: cpu.set_series(&profile.series),
            memory: memory.set_capacity_in_gb(profile.memory_gb),
            display: display.set_resolution(),
        };

        for (marker, reading) in [
            (cpu.marker(), &report.cpu),
            (memory.marker(), &report.memory),
            (display.marker(), &report.display),
        ] {
            self.event_publisher
                .publish(ShowcaseEvent::ComponentConfigured {
                    kind,
                    marker,
                    reading: reading.clone(),
                })?;
        }

        Ok(DriverOutcome::Completed(report))
    }

    pub fn run_abstract_factory_for(
        &self,
        kind: DeviceKind,
    ) -> Result<DriverOutcome<DeviceReport>, CreationalError> {
        let factory = create_device_factory(kind);
        self.run_abstract_factory(Some(factory.as_ref()))
    }

    /// Makes an adapter and calls each HTTP verb once, in order.
    pub fn run_factory_method(
        &self,
        factory: Option<&dyn HttpAdapterFactory>,
    ) -> Result<DriverOutcome<AdapterReport>, CreationalError> {
        let driver = Driver::FactoryMethod;
        self.start(driver)?;

        let Some(factory) = factory else {
            return self.skip(driver, NO_FACTORY_PROVIDED);
        };

        let adapter = factory.make_adapter();
        let adapter_type = adapter.adapter_type().to_string();
        tracing::info!("Http Adapter is {}", adapter_type);

        let mut calls = Vec::with_capacity(HttpMethod::ALL.len());
        for method in HttpMethod::ALL {
            let reading = adapter.request(method);
            self.event_publisher.publish(ShowcaseEvent::AdapterCalled {
                adapter_type: adapter_type.clone(),
                method,
                reading: reading.clone(),
            })?;
            calls.push(reading);
        }

        Ok(DriverOutcome::Completed(AdapterReport {
            adapter_type,
            calls,
        }))
    }

    /// Builds a Mastodon cvt sedan and a prototype of it, then switches the
    /// line to Rhino and repeats.
    pub fn run_prototype(
        &self,
        director: Option<&mut Director>,
    ) -> Result<DriverOutcome<PrototypeRun>, CreationalError> {
        let driver = Driver::Prototype;
        self.start(driver)?;

        let Some(director) = director else {
            return self.skip(driver, NO_DIRECTOR_PROVIDED);
        };

        director.set_production_line(Box::new(SedanProductionLine::new(Box::new(
            MastodonSedanCarFactory,
        ))));

        let mut cars = Vec::with_capacity(4);

        director.construct_cvt_edition()?;
        let mastodon_cvt = self.build(director)?;
        let mastodon_cvt_copy = self.prototype(mastodon_cvt.as_ref())?;
        cars.push(mastodon_cvt);
        cars.push(mastodon_cvt_copy);

        let rhino: Box<dyn CarFactory> = Box::new(RhinoSedanCarFactory);
        let brand = rhino.brand();
        director.set_production_line_car_factory(rhino)?;
        self.event_publisher
            .publish(ShowcaseEvent::CarFactorySwapped { brand })?;

        director.construct_cvt_edition()?;
        let rhino_cvt = self.build(director)?;
        let rhino_cvt_copy = self.prototype(rhino_cvt.as_ref())?;
        cars.push(rhino_cvt);
        cars.push(rhino_cvt_copy);

        Ok(DriverOutcome::Completed(PrototypeRun { cars }))
    }

    fn build(&self, director: &mut Director) -> Result<Box<dyn Car>, CreationalError> {
        let car = director.production_line_mut()?.build();
        self.event_publisher.publish(ShowcaseEvent::CarBuilt {
            car_id: *car.id(),
            brand: car.brand(),
            attributes: car.attributes().clone(),
        })?;
        Ok(car)
    }

    fn prototype(&self, source: &dyn Car) -> Result<Box<dyn Car>, CreationalError> {
        let copy = source.prototype();
        self.event_publisher.publish(ShowcaseEvent::CarPrototyped {
            source: *source.id(),
            copy: *copy.id(),
            brand: copy.brand(),
        })?;
        Ok(copy)
    }

    fn start(&self, driver: Driver) -> Result<(), CreationalError> {
        tracing::info!(%driver, "calling demo driver");
        self.event_publisher
            .publish(ShowcaseEvent::DriverStarted { driver })
    }

    fn skip<T>(&self, driver: Driver, reason: &str) -> Result<DriverOutcome<T>, CreationalError> {
        tracing::warn!(%driver, "{}", reason);
        self.event_publisher.publish(ShowcaseEvent::DriverSkipped {
            driver,
            reason: reason.to_string(),
        })?;
        Ok(DriverOutcome::Skipped {
            reason: reason.to_string(),
        })
    }
}
