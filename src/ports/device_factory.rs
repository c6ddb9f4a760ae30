use crate::{DeviceKind, FamilyMarker, Resolution};

pub trait Cpu: Send + Sync {
    fn marker(&self) -> FamilyMarker;

    /// Applies a series designation and returns the rendered reading.
    fn set_series(&self, series: &str) -> String;
}

pub trait Memory: Send + Sync {
    fn marker(&self) -> FamilyMarker;

    fn set_capacity_in_gb(&self, capacity: u32) -> String;
}

pub trait Display: Send + Sync {
    fn marker(&self) -> FamilyMarker;

    fn resolution(&self) -> Resolution;

    fn set_resolution(&self) -> String;
}

/// Abstract factory for one device family.
///
/// A factory is bound to a single [`DeviceKind`]; every component it
/// creates belongs to that kind's family.
pub trait DeviceFactory: Send + Sync {
    fn kind(&self) -> DeviceKind;

    fn create_cpu(&self) -> Box<dyn Cpu>;

    fn create_memory(&self) -> Box<dyn Memory>;

    fn create_display(&self) -> Box<dyn Display>;
}
