// src/factories/mod.rs

mod car_factories;
mod device_factories;
mod http_adapter_factory;

pub use car_factories::{MastodonSedanCarFactory, RhinoSedanCarFactory, create_car_factory};
pub use device_factories::{
    LaptopDeviceFactory, PhoneDeviceFactory, TabletDeviceFactory, create_device_factory,
};
pub use http_adapter_factory::RestHttpAdapterFactory;
