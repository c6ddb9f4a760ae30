//! Concrete device components.
//!
//! Components hold no state beyond their family marker; each operation
//! renders a reading tagged with that marker and logs it.

use crate::{Cpu, Display, FamilyMarker, Memory, Resolution};

fn series_reading(marker: FamilyMarker, series: &str) -> String {
    let reading = format!("[{}] {}", marker, series);
    tracing::info!(%marker, series, "cpu series set");
    reading
}

fn capacity_reading(marker: FamilyMarker, capacity: u32) -> String {
    let reading = format!("[{}] {}GB", marker, capacity);
    tracing::info!(%marker, capacity_gb = capacity, "memory capacity set");
    reading
}

fn resolution_reading(marker: FamilyMarker, resolution: Resolution) -> String {
    let reading = format!("[{}] {}", marker, resolution);
    tracing::info!(%marker, %resolution, "display resolution set");
    reading
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileCpu;

impl Cpu for MobileCpu {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Mobile
    }

    fn set_series(&self, series: &str) -> String {
        series_reading(self.marker(), series)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaptopCpu;

impl Cpu for LaptopCpu {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Laptop
    }

    fn set_series(&self, series: &str) -> String {
        series_reading(self.marker(), series)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMemory;

impl Memory for MobileMemory {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Mobile
    }

    fn set_capacity_in_gb(&self, capacity: u32) -> String {
        capacity_reading(self.marker(), capacity)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaptopMemory;

impl Memory for LaptopMemory {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Laptop
    }

    fn set_capacity_in_gb(&self, capacity: u32) -> String {
        capacity_reading(self.marker(), capacity)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneDisplay;

impl PhoneDisplay {
    pub const RESOLUTION: Resolution = Resolution::new(2340, 1080);
}

impl Display for PhoneDisplay {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Phone
    }

    fn resolution(&self) -> Resolution {
        Self::RESOLUTION
    }

    fn set_resolution(&self) -> String {
        resolution_reading(self.marker(), self.resolution())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TabletDisplay;

impl TabletDisplay {
    pub const RESOLUTION: Resolution = Resolution::new(2048, 1536);
}

impl Display for TabletDisplay {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Tablet
    }

    fn resolution(&self) -> Resolution {
        Self::RESOLUTION
    }

    fn set_resolution(&self) -> String {
        resolution_reading(self.marker(), self.resolution())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LaptopDisplay;

impl LaptopDisplay {
    pub const RESOLUTION: Resolution = Resolution::new(2560, 1600);
}

impl Display for LaptopDisplay {
    fn marker(&self) -> FamilyMarker {
        FamilyMarker::Laptop
    }

    fn resolution(&self) -> Resolution {
        Self::RESOLUTION
    }

    fn set_resolution(&self) -> String {
        resolution_reading(self.marker(), self.resolution())
    }
}
