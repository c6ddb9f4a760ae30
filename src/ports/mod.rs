// src/ports/mod.rs

pub use car_factory::{Car, CarFactory};
pub use device_factory::{Cpu, DeviceFactory, Display, Memory};
pub use event_publisher::{EventCallback, EventPublisher};
pub use http_adapter::{HttpAdapter, HttpAdapterFactory};
pub use production_line::CarProductionLine;

pub mod car_factory;
pub mod device_factory;
pub mod event_publisher;
pub mod http_adapter;
pub mod production_line;
