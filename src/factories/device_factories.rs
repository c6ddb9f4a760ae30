// src/factories/device_factories.rs

use crate::{
    Cpu, DeviceFactory, DeviceKind, Display, LaptopCpu, LaptopDisplay, LaptopMemory, Memory,
    MobileCpu, MobileMemory, PhoneDisplay, TabletDisplay,
};

/// Phone family: mobile CPU and memory with a phone display.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneDeviceFactory;

impl DeviceFactory for PhoneDeviceFactory {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Phone
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(MobileCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(MobileMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(PhoneDisplay)
    }
}

/// Tablet family: mobile CPU and memory with a tablet display.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabletDeviceFactory;

impl DeviceFactory for TabletDeviceFactory {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Tablet
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(MobileCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(MobileMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(TabletDisplay)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaptopDeviceFactory;

impl DeviceFactory for LaptopDeviceFactory {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Laptop
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(LaptopCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(LaptopMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(LaptopDisplay)
    }
}

/// Selects the component factory for a device kind.
pub fn create_device_factory(kind: DeviceKind) -> Box<dyn DeviceFactory> {
    tracing::debug!(%kind, "selecting device factory");
    match kind {
        DeviceKind::Phone => Box::new(PhoneDeviceFactory),
        DeviceKind::Tablet => Box::new(TabletDeviceFactory),
        DeviceKind::Laptop => Box::new(LaptopDeviceFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CreationalError, FamilyMarker};

    fn expected_markers(kind: DeviceKind) -> (FamilyMarker, FamilyMarker, FamilyMarker) {
        match kind {
            DeviceKind::Phone => (FamilyMarker::Mobile, FamilyMarker::Mobile, FamilyMarker::Phone),
            DeviceKind::Tablet => (FamilyMarker::Mobile, FamilyMarker::Mobile, FamilyMarker::Tablet),
            DeviceKind::Laptop => (FamilyMarker::Laptop, FamilyMarker::Laptop, FamilyMarker::Laptop),
        }
    }

    #[test]
    fn test_every_factory_stays_within_its_family() {
        for kind in DeviceKind::ALL {
            let factory = create_device_factory(kind);
            let (cpu, memory, display) = expected_markers(kind);

            assert_eq!(factory.kind(), kind);
            assert_eq!(factory.create_cpu().marker(), cpu);
            assert_eq!(factory.create_memory().marker(), memory);
            assert_eq!(factory.create_display().marker(), display);
        }
    }

    #[test]
    fn test_phone_family_readings() {
        let factory = create_device_factory(DeviceKind::Phone);
        assert_eq!(factory.create_cpu().set_series("MB001"), "[MOBILE] MB001");
        assert_eq!(factory.create_display().set_resolution(), "[PHONE] 2340x1080");
    }

    #[test]
    fn test_selector_from_tag() {
        let factory = create_device_factory("laptop".parse().unwrap());
        assert_eq!(factory.create_display().marker(), FamilyMarker::Laptop);

        let result = "desktop".parse::<DeviceKind>().map(create_device_factory);
        assert!(matches!(result, Err(CreationalError::UnknownDeviceKind(_))));
    }
}
