use crate::{BaseCar, CarBrand, CarId, DeviceKind, FamilyMarker, HttpMethod};
use std::fmt;

/// Demo driver that emitted an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    AbstractFactory,
    FactoryMethod,
    Prototype,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbstractFactory => write!(f, "abstract-factory"),
            Self::FactoryMethod => write!(f, "factory-method"),
            Self::Prototype => write!(f, "prototype"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEvent {
    DriverStarted {
        driver: Driver,
    },

    DriverSkipped {
        driver: Driver,
        reason: String,
    },

    ComponentConfigured {
        kind: DeviceKind,
        marker: FamilyMarker,
        reading: String,
    },

    AdapterCalled {
        adapter_type: String,
        method: HttpMethod,
        reading: String,
    },

    CarBuilt {
        car_id: CarId,
        brand: CarBrand,
        attributes: BaseCar,
    },

    CarPrototyped {
        source: CarId,
        copy: CarId,
        brand: CarBrand,
    },

    CarFactorySwapped {
        brand: CarBrand,
    },
}

impl ShowcaseEvent {
    /// True for events caused by a created product rather than by the driver itself.
    pub fn is_product_level(&self) -> bool {
        !matches!(
            self,
            Self::DriverStarted { .. } | Self::DriverSkipped { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub recorded_at: chrono::DateTime<chrono::Utc>,
    pub event: ShowcaseEvent,
}

impl RecordedEvent {
    pub fn now(event: ShowcaseEvent) -> Self {
        Self {
            recorded_at: chrono::Utc::now(),
            event,
        }
    }
}
